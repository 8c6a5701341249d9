use gloo_net::http::{Request, Response};
use gloo_net::Error as GlooError;
use serde::Serialize;

/// JSON POST to a third-party endpoint. No credentials are attached and
/// nothing is retried; callers decide what a failure means.
pub struct JsonPost {
    request: Request,
    url: String,
}

impl JsonPost {
    pub fn new(url: &str) -> Self {
        Self {
            request: Request::post(url).header("Accept", "application/json"),
            url: url.to_string(),
        }
    }

    /// Serializes `data` as the body and sets `Content-Type: application/json`.
    pub fn json<T: Serialize>(mut self, data: &T) -> Result<Self, GlooError> {
        self.request = self.request.json(data)?;
        Ok(self)
    }

    pub async fn send(self) -> Result<Response, GlooError> {
        log::debug!("POST {}", self.url);
        let response = self.request.send().await?;
        if !response.ok() {
            log::warn!("POST {} returned {}", self.url, response.status());
        }
        Ok(response)
    }
}
