//! Middle Frame CLI - browse and publish on The Middle Frame from a terminal
//!
//! # Account
//!
//! ```bash
//! middleframe login --email ines@example.com --password secret
//! middleframe register --username ines --email ines@example.com --password secret --role uploader
//! middleframe whoami
//! middleframe logout
//! ```
//!
//! # Browsing and publishing
//!
//! ```bash
//! middleframe photos [--mine]                      # List photos
//! middleframe album 12                             # Show an album
//! middleframe upload dawn.jpg --title "Dawn"       # Single photo
//! middleframe upload *.jpg --album-title "Coast"   # New album
//! middleframe delete 42                            # Delete one of your photos
//! ```
//!
//! The server location comes from `MIDDLEFRAME_SERVER_URL` (or `.env`), the
//! session file from `MIDDLEFRAME_SESSION_FILE`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use middleframe::{
    complete_login, format_album_photos, format_photos, photos_by_uploader, read_selection,
    AlbumField, ApiClient, ApiStatus, ClientConfig, FileStore, LoginRequest, MetadataField, PhotoView,
    RegisterRequest, Role, SelectedFile, SessionContext, UploadComposer, UploadMode,
};
use tracing_subscriber::EnvFilter;

type CliResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "middleframe")]
#[command(about = "Browse and publish photos on The Middle Frame", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and store the session
    Login {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },

    /// Create an account and sign in
    Register {
        #[arg(short, long)]
        username: String,

        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,

        /// Account role: buyer or uploader
        #[arg(short, long, default_value = "buyer", value_parser = parse_role)]
        role: Role,
    },

    /// Forget the stored session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// List published photos
    Photos {
        /// Only photos uploaded by the signed-in user
        #[arg(long)]
        mine: bool,
    },

    /// Show an album and its photos
    Album {
        /// Album ID
        id: i64,
    },

    /// Upload one photo, or several as an album
    Upload {
        /// Image files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Title of the album to create
        #[arg(long)]
        album_title: Option<String>,

        /// Description of the album to create
        #[arg(long)]
        album_description: Option<String>,

        /// Add to an existing album instead of creating one
        #[arg(long, conflicts_with_all = ["album_title", "album_description"])]
        album_id: Option<i64>,

        /// Title for every photo (default: file name)
        #[arg(long)]
        title: Option<String>,

        /// Description for every photo
        #[arg(long)]
        description: Option<String>,

        /// Capture date for every photo, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Delete one of your photos
    Delete {
        /// Photo ID
        id: i64,
    },
}

fn parse_role(value: &str) -> Result<Role, String> {
    Role::parse(value).ok_or_else(|| format!("unknown role '{}' (expected buyer or uploader)", value))
}

/// A file on disk picked for upload.
struct LocalFile(PathBuf);

impl SelectedFile for LocalFile {
    fn name(&self) -> String {
        self.0
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.0.display().to_string())
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, String> {
        tokio::fs::read(&self.0).await.map_err(|e| e.to_string())
    }
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = ClientConfig::from_env();
    let client = ApiClient::new(config, SessionContext::new(FileStore::from_env()));

    let result = match cli.command {
        Commands::Login { email, password } => cmd_login(&client, email, password).await,

        Commands::Register {
            username,
            email,
            password,
            role,
        } => cmd_register(&client, username, email, password, role).await,

        Commands::Logout => cmd_logout(&client),

        Commands::Whoami => cmd_whoami(&client),

        Commands::Photos { mine } => cmd_photos(&client, mine).await,

        Commands::Album { id } => cmd_album(&client, id).await,

        Commands::Upload {
            files,
            album_title,
            album_description,
            album_id,
            title,
            description,
            date,
        } => {
            let options = UploadOptions {
                album_title,
                album_description,
                album_id,
                title,
                description,
                date,
            };
            cmd_upload(&client, files, options).await
        }

        Commands::Delete { id } => cmd_delete(&client, id).await,
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

// =============================================================================
// Account
// =============================================================================

async fn cmd_login(client: &ApiClient<FileStore>, email: String, password: String) -> CliResult {
    eprintln!("🔑 Signing in as {}", email);

    let response = client.login(&LoginRequest { email, password }).await;
    let user = complete_login(client.session(), response).map_err(|e| e.user_message())?;

    eprintln!("✅ Welcome back, {} ({})", user.username, user.role);
    Ok(())
}

async fn cmd_register(
    client: &ApiClient<FileStore>,
    username: String,
    email: String,
    password: String,
    role: Role,
) -> CliResult {
    eprintln!("📝 Creating {} account for {}", role, username);

    let request = RegisterRequest {
        username,
        email,
        password,
        role,
    };
    let response = client.register(&request).await;
    let user = complete_login(client.session(), response).map_err(|e| e.user_message())?;

    eprintln!("✅ Signed in as {}", user.username);
    Ok(())
}

fn cmd_logout(client: &ApiClient<FileStore>) -> CliResult {
    client.session().clear()?;
    eprintln!("👋 Signed out");
    Ok(())
}

fn cmd_whoami(client: &ApiClient<FileStore>) -> CliResult {
    match client.session().load() {
        session if session.is_authenticated() => {
            if let Some(user) = session.user {
                println!("{} <{}> ({})", user.username, user.email, user.role);
            }
        }
        _ => eprintln!("Not signed in."),
    }
    Ok(())
}

// =============================================================================
// Browsing
// =============================================================================

async fn cmd_photos(client: &ApiClient<FileStore>, mine: bool) -> CliResult {
    let records = client
        .list_photos()
        .await
        .map_err(|e| e.user_message("Failed to load photos"))?;
    let photos = format_photos(&records, client.config().server_url());

    let photos = if mine {
        let user = client
            .session()
            .user()
            .ok_or("Sign in to list your own photos")?;
        photos_by_uploader(&photos, &user.username)
    } else {
        photos
    };

    if photos.is_empty() {
        eprintln!("📷 No photos yet.");
        return Ok(());
    }

    eprintln!("📷 {} photo(s):\n", photos.len());
    for photo in &photos {
        print_photo(photo);
    }
    Ok(())
}

async fn cmd_album(client: &ApiClient<FileStore>, album_id: i64) -> CliResult {
    let response = client
        .album_details(album_id)
        .await
        .map_err(|e| e.user_message("Failed to load album"))?;

    let album = response
        .album
        .ok_or_else(|| format!("Album not found: {}", album_id))?;
    let photos = format_album_photos(&album, &response.photos, client.config().server_url());

    println!("📁 {} ({})", album.title, album.id);
    if let Some(ref uploader) = album.uploader {
        println!("   By: {}", uploader);
    }
    if let Some(ref description) = album.description {
        if !description.is_empty() {
            println!("   {}", description);
        }
    }
    if let Some(ref created) = album.created_at {
        println!("   Created: {}", created);
    }
    println!("   Photos: {}\n", photos.len());

    for photo in &photos {
        print_photo(photo);
    }
    Ok(())
}

fn print_photo(photo: &PhotoView) {
    println!(
        "  🖼  {} ({})",
        photo.title.as_deref().unwrap_or("Untitled"),
        photo.id
    );
    if let Some(ref uploader) = photo.uploader {
        println!("     By: {}", uploader);
    }
    if let Some(year) = photo.capture_year() {
        println!("     Year: {}", year);
    }
    if let Some(ref album) = photo.album {
        println!("     Album: {} ({})", album.title, album.id);
    }
    if let Some(ref url) = photo.url {
        println!("     {}", url);
    }
    println!();
}

// =============================================================================
// Publishing
// =============================================================================

struct UploadOptions {
    album_title: Option<String>,
    album_description: Option<String>,
    album_id: Option<i64>,
    title: Option<String>,
    description: Option<String>,
    date: Option<String>,
}

impl UploadOptions {
    fn wants_album(&self) -> bool {
        self.album_title.is_some() || self.album_description.is_some() || self.album_id.is_some()
    }
}

async fn cmd_upload(client: &ApiClient<FileStore>, files: Vec<PathBuf>, options: UploadOptions) -> CliResult {
    let mode = if files.len() == 1 && !options.wants_album() {
        UploadMode::Single
    } else {
        UploadMode::Album
    };

    let mut composer = UploadComposer::new();
    composer.open()?;
    composer.choose_mode(mode)?;

    eprintln!("📤 Reading {} file(s) ({} upload)", files.len(), mode.as_str());
    let files: Vec<LocalFile> = files.into_iter().map(LocalFile).collect();
    let today = chrono::Local::now().date_naive();
    let generation = composer.generation();
    let outcomes = read_selection(&files, today).await;
    let report = composer.apply_selection(generation, outcomes)?;

    for failed in &report.failed {
        eprintln!("   ⚠️  Skipped {}: {}", failed.filename, failed.reason);
    }

    let count = composer.batch().map(|batch| batch.len()).unwrap_or_default();
    for index in 0..count {
        if let Some(ref title) = options.title {
            composer.update_metadata(index, MetadataField::Title, title.as_str())?;
        }
        if let Some(ref description) = options.description {
            composer.update_metadata(index, MetadataField::Description, description.as_str())?;
        }
        if let Some(ref date) = options.date {
            composer.update_metadata(index, MetadataField::CaptureDate, date.as_str())?;
        }
    }

    if mode == UploadMode::Album {
        match options.album_id {
            Some(album_id) => composer.use_existing_album(album_id)?,
            None => {
                if let Some(title) = options.album_title {
                    composer.set_album_field(AlbumField::Title, title)?;
                }
                if let Some(description) = options.album_description {
                    composer.set_album_field(AlbumField::Description, description)?;
                }
            }
        }
    }

    if let Some(batch) = composer.batch() {
        for entry in batch.entries() {
            eprintln!("   {} - {} ({})", entry.filename, entry.display_title(), entry.capture_date);
        }
    }

    composer
        .submit(client, || eprintln!("✅ Uploaded {} photo(s)", count))
        .await
        .map_err(|e| e.user_message())?;
    Ok(())
}

async fn cmd_delete(client: &ApiClient<FileStore>, photo_id: i64) -> CliResult {
    client
        .delete_photo(photo_id)
        .await
        .and_then(ApiStatus::into_result)
        .map_err(|e| e.user_message("Delete failed"))?;

    eprintln!("🗑️  Photo deleted: {}", photo_id);
    Ok(())
}
