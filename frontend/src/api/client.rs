use reqwest::{Client, RequestBuilder, Response, StatusCode};

use crate::{api::types::*, config, utils::url::absolutize};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    async fn resolved_base_url(&self) -> String {
        let base = if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        };
        absolutize(&base)
    }

    /// Fetches the signed-in user. `Ok(None)` means nobody is signed in.
    pub async fn get_user_info(&self) -> Result<Option<UserInfo>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self
            .client
            .get(format!("{}/user-info", base_url.trim_end_matches('/')));
        let response = with_credentials(request)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::NO_CONTENT => Ok(None),
            status if status.is_success() => response
                .json::<UserInfo>()
                .await
                .map(Some)
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e))),
            _ => Err(error_from_response(response).await),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
    builder.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
    builder
}

async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    match response.json::<ApiError>().await {
        Ok(error) if error.message().is_some() => error,
        _ => ApiError::request_failed(format!(
            "Request failed with status {}",
            status.as_u16()
        )),
    }
}
