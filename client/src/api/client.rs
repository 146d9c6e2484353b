//! Native HTTP gateway built on `reqwest`.

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::types::{AlbumResponse, ApiStatus, AuthResponse, LoginRequest, RegisterRequest, UploadRequest};
use super::{bearer, endpoints, interpret_response, UploadTransport};
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::PhotoRecord;
use crate::session::{KeyValueStore, SessionContext};

/// Client for the marketplace REST API.
///
/// Every request reads the bearer token from the session store at send
/// time, so a login or logout is picked up by the next call.
#[derive(Debug, Clone)]
pub struct ApiClient<S> {
    config: ClientConfig,
    session: SessionContext<S>,
    http: Client,
}

impl<S: KeyValueStore> ApiClient<S> {
    pub fn new(config: ClientConfig, session: SessionContext<S>) -> Self {
        Self {
            config,
            session,
            http: Client::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionContext<S> {
        &self.session
    }

    /// `GET photos/` - every published photo.
    pub async fn list_photos(&self) -> ApiResult<Vec<PhotoRecord>> {
        self.send(self.request(Method::GET, endpoints::PHOTOS)).await
    }

    /// `GET albums/{id}` - album header and photos.
    pub async fn album_details(&self, album_id: i64) -> ApiResult<AlbumResponse> {
        self.send(self.request(Method::GET, &endpoints::album(album_id)))
            .await
    }

    /// `POST photos/upload`.
    pub async fn upload_batch(&self, request: &UploadRequest) -> ApiResult<ApiStatus> {
        self.send_json(Method::POST, endpoints::UPLOAD, request).await
    }

    /// `DELETE photos/delete/{id}`.
    pub async fn delete_photo(&self, photo_id: i64) -> ApiResult<ApiStatus> {
        self.send(self.request(Method::DELETE, &endpoints::delete_photo(photo_id)))
            .await
    }

    /// `POST auth/login`. Pass the result to [`crate::session::complete_login`].
    pub async fn login(&self, request: &LoginRequest) -> ApiResult<AuthResponse> {
        self.send_json(Method::POST, endpoints::LOGIN, request).await
    }

    /// `POST auth/register`. Pass the result to [`crate::session::complete_login`].
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<AuthResponse> {
        self.send_json(Method::POST, endpoints::REGISTER, request).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.endpoint(path);
        log::debug!("{} {}", method, url);

        let builder = self.http.request(method, url);
        match self.session.token() {
            Some(token) => builder.header(reqwest::header::AUTHORIZATION, bearer(&token)),
            None => builder,
        }
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(method, path).json(body)).await
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<T> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        log::debug!("Response status: {}", status);
        interpret_response(status.as_u16(), &body)
    }
}

impl<S: KeyValueStore> UploadTransport for ApiClient<S> {
    async fn upload(&self, request: &UploadRequest) -> ApiResult<ApiStatus> {
        self.upload_batch(request).await
    }
}
