//! Browser gateway to the marketplace API.
//!
//! Same contract as the native client: a fresh bearer token is read from
//! `localStorage` for every request, and responses go through
//! [`interpret_response`] so server messages reach the user verbatim.

use gloo_net::http::{Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use middleframe::api::{bearer, endpoints};
use middleframe::{
    interpret_response, AlbumResponse, ApiError, ApiResult, ApiStatus, AuthResponse, ClientConfig,
    LoginRequest, PhotoRecord, RegisterRequest, UploadRequest, UploadTransport,
};

use super::storage::{browser_session, BrowserSession};
use crate::config::client_config;

/// HTTP gateway for the browser.
#[derive(Debug, Clone)]
pub struct Gateway {
    config: ClientConfig,
    session: BrowserSession,
}

impl Default for Gateway {
    fn default() -> Self {
        Self::new(client_config(), browser_session())
    }
}

impl Gateway {
    pub fn new(config: ClientConfig, session: BrowserSession) -> Self {
        Self { config, session }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn list_photos(&self) -> ApiResult<Vec<PhotoRecord>> {
        finish(self.request(Method::GET, endpoints::PHOTOS).send().await).await
    }

    pub async fn album_details(&self, album_id: i64) -> ApiResult<AlbumResponse> {
        finish(self.request(Method::GET, &endpoints::album(album_id)).send().await).await
    }

    pub async fn delete_photo(&self, photo_id: i64) -> ApiResult<ApiStatus> {
        finish(self.request(Method::DELETE, &endpoints::delete_photo(photo_id)).send().await).await
    }

    pub async fn login(&self, request: &LoginRequest) -> ApiResult<AuthResponse> {
        self.post_json(endpoints::LOGIN, request).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<AuthResponse> {
        self.post_json(endpoints::REGISTER, request).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.endpoint(path);
        log::debug!("{} {}", method, url);

        let builder = RequestBuilder::new(&url).method(method);
        match self.session.token() {
            Some(token) => builder.header("Authorization", &bearer(&token)),
            None => builder,
        }
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .request(Method::POST, path)
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        finish(request.send().await).await
    }
}

impl UploadTransport for Gateway {
    async fn upload(&self, request: &UploadRequest) -> ApiResult<ApiStatus> {
        self.post_json(endpoints::UPLOAD, request).await
    }
}

async fn finish<T: DeserializeOwned>(response: Result<Response, gloo_net::Error>) -> ApiResult<T> {
    let response = response.map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    interpret_response(status, &body)
}
