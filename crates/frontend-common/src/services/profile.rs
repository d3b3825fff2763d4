//! Profile and activity-log API service (authenticated endpoints)

use crate::client::create_authenticated_client;
use crate::client_wrapper::WrappedAuthClient;
use mindwell_http::client::ClientError;
use mindwell_http::types::{ActivityLogEntry, UpdateProfileRequest, UserInfo};
use reqwest::Method;

/// Profile API service
#[derive(Clone)]
pub struct ProfileService;

impl ProfileService {
    pub fn new() -> Self {
        Self
    }

    fn client(&self) -> Result<WrappedAuthClient, ClientError> {
        create_authenticated_client()?
            .ok_or_else(|| ClientError::Configuration("Not authenticated".into()))
    }

    /// Fetch the current user's profile.
    pub async fn user_info(&self) -> Result<UserInfo, ClientError> {
        let client = self.client()?;
        client
            .execute(|c| c.request(Method::GET, "/api/auth/user-info/"))
            .await
    }

    /// Fetch the current user's recent account activity.
    pub async fn activity_logs(&self) -> Result<Vec<ActivityLogEntry>, ClientError> {
        let client = self.client()?;
        client
            .execute(|c| c.request(Method::GET, "/api/auth/activity-logs/"))
            .await
    }

    /// Update profile fields; returns the updated profile.
    pub async fn update_profile(
        &self,
        request: &UpdateProfileRequest,
    ) -> Result<UserInfo, ClientError> {
        let client = self.client()?;
        client
            .execute(|c| {
                c.request(Method::POST, "/api/auth/update-profile/")
                    .json(request)
            })
            .await
    }
}

impl Default for ProfileService {
    fn default() -> Self {
        Self::new()
    }
}
