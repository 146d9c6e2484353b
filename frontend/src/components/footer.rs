//! Footer component

use leptos::*;

use crate::config::APP_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"© 2025 " {APP_NAME} " • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-links">
                <a href="/" class="footer-link">"Explore"</a>
                <a href="/register" class="footer-link">"Join Marketplace"</a>
                <a href="/login" class="footer-link">"Sign In"</a>
            </div>
        </footer>
    }
}
