//! Type-safe API clients that separate public from bearer-authenticated calls

use super::ClientError;
use reqwest::{header, Client, ClientBuilder};

const USER_AGENT: &str = "mindwell-web/0.1.0";

/// Client for endpoints that do not require authentication
/// (email check, OTP issue/verify, registration, token refresh).
#[derive(Clone, Debug)]
pub struct PublicClient {
    client: Client,
    base_url: String,
}

/// Client for endpoints behind bearer authentication
/// (user info, activity logs, profile update, token blacklist).
#[derive(Clone)]
pub struct AuthenticatedClient {
    client: Client,
    base_url: String,
    access_token: String,
}

fn build_http_client() -> Result<Client, ClientError> {
    Ok(ClientBuilder::new().user_agent(USER_AGENT).build()?)
}

/// Send a request and decode the JSON body, mapping non-2xx statuses to
/// [`ClientError`].
async fn dispatch<T: serde::de::DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, ClientError> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        Ok(response.json().await?)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(ClientError::from_status(status, body))
    }
}

impl PublicClient {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder without authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.base_url, path))
    }

    /// Execute a request and handle common errors
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        dispatch(request).await
    }

    /// Upgrade to an authenticated client carrying `access_token`.
    pub fn authenticate(self, access_token: impl Into<String>) -> AuthenticatedClient {
        AuthenticatedClient {
            client: self.client,
            base_url: self.base_url,
            access_token: access_token.into(),
        }
    }
}

impl AuthenticatedClient {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder with the bearer token attached
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.base_url, path))
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", self.access_token),
            )
    }

    /// Execute a request and handle common errors
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        dispatch(request).await
    }

}

fn normalize(base_url: impl Into<String>) -> String {
    base_url.into().trim_end_matches('/').to_string()
}

/// Builder that produces the appropriate client type.
pub struct TypedClientBuilder {
    base_url: Option<String>,
}

impl TypedClientBuilder {
    pub fn new() -> Self {
        Self { base_url: None }
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    fn require_base_url(self) -> Result<String, ClientError> {
        self.base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))
    }

    /// Build a public client
    pub fn build_public(self) -> Result<PublicClient, ClientError> {
        let base_url = self.require_base_url()?;
        let client = build_http_client()?;
        Ok(PublicClient {
            client,
            base_url: normalize(base_url),
        })
    }

    /// Build a bearer-authenticated client
    pub fn build_authenticated(
        self,
        access_token: impl Into<String>,
    ) -> Result<AuthenticatedClient, ClientError> {
        let base_url = self.require_base_url()?;
        let client = build_http_client()?;
        Ok(AuthenticatedClient {
            client,
            base_url: normalize(base_url),
            access_token: access_token.into(),
        })
    }
}

impl Default for TypedClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_base_url() {
        let err = TypedClientBuilder::new().build_public().unwrap_err();
        assert!(matches!(err, ClientError::Configuration(_)));
    }

    #[test]
    fn builder_strips_trailing_slash() {
        let client = TypedClientBuilder::new()
            .base_url("https://app.example.org/")
            .build_public()
            .unwrap();
        assert_eq!(client.base_url(), "https://app.example.org");
    }
}
