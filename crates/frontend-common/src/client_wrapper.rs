//! Wrapped client that refreshes and retries once on expired credentials
//!
//! Authorization failures are handled by an explicit retry budget: a
//! request that comes back 401 is retried exactly once after a successful
//! token refresh. A second 401 (or a failed refresh) escalates to the
//! session-expired handler, which forces a local logout.

use mindwell_http::client::{AuthenticatedClient, ClientError};

/// Bounded retry budget for authorization failures.
#[derive(Debug)]
struct RetryBudget {
    remaining: u8,
}

impl RetryBudget {
    fn new() -> Self {
        Self { remaining: 1 }
    }

    /// Whether this failure may be retried; consumes budget when it may.
    fn admit(&mut self, error: &ClientError) -> bool {
        if error.is_auth_expired() && self.remaining > 0 {
            self.remaining -= 1;
            true
        } else {
            false
        }
    }
}

/// Wrapper around [`AuthenticatedClient`] with refresh-and-retry-once
/// semantics.
#[derive(Clone)]
pub struct WrappedAuthClient {
    inner: AuthenticatedClient,
}

impl WrappedAuthClient {
    pub fn new(client: AuthenticatedClient) -> Self {
        Self { inner: client }
    }

    /// Execute a request built by `build`, refreshing the token and
    /// retrying once if the server rejects the credential.
    ///
    /// `build` is invoked per attempt so the retried request carries the
    /// new bearer token rather than a stale clone of the old one.
    pub async fn execute<T, F>(&self, build: F) -> Result<T, ClientError>
    where
        T: serde::de::DeserializeOwned,
        F: Fn(&AuthenticatedClient) -> reqwest::RequestBuilder,
    {
        let mut budget = RetryBudget::new();
        let mut client = self.inner.clone();

        loop {
            match client.execute(build(&client)).await {
                Ok(value) => return Ok(value),
                Err(error) => {
                    if budget.admit(&error) {
                        tracing::debug!("access token rejected, refreshing and retrying");
                        client = crate::client::refresh_session().await?;
                        continue;
                    }
                    if error.is_auth_expired() {
                        crate::auth::session_expired::trigger();
                    }
                    return Err(error);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth_error() -> ClientError {
        ClientError::AuthenticationFailed("token expired".into())
    }

    #[test]
    fn budget_admits_first_auth_failure_only() {
        let mut budget = RetryBudget::new();
        assert!(budget.admit(&auth_error()));
        assert!(!budget.admit(&auth_error()));
        assert!(!budget.admit(&auth_error()));
    }

    #[test]
    fn budget_rejects_non_auth_failures() {
        let mut budget = RetryBudget::new();
        assert!(!budget.admit(&ClientError::BadRequest("nope".into())));
        assert!(!budget.admit(&ClientError::ServerError {
            status: 500,
            message: "boom".into(),
        }));
        // Budget was not consumed by non-auth failures.
        assert!(budget.admit(&auth_error()));
    }
}
