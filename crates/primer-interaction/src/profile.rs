//! Profile endpoints: the "who am I" lookup and the survey submission.

use crate::backend::{BackendClient, decode_error};
use async_trait::async_trait;
use primer_core::Result;
use primer_core::profile::{ProfileService, SurveyResponses, UserProfile};
use uuid::Uuid;

#[async_trait]
impl ProfileService for BackendClient {
    async fn current_profile(&self, token: &str) -> Result<UserProfile> {
        let response = self
            .http
            .get(self.url("/auth/me"))
            .header("Authorization", Self::bearer(token))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let profile: UserProfile = response.json().await.map_err(decode_error)?;
        Ok(profile)
    }

    async fn submit_background(
        &self,
        token: &str,
        user_id: Uuid,
        survey: &SurveyResponses,
    ) -> Result<UserProfile> {
        let response = self
            .http
            .post(self.url(&format!("/users/{user_id}/background")))
            .header("Authorization", Self::bearer(token))
            .json(survey)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let profile: UserProfile = response.json().await.map_err(decode_error)?;
        tracing::debug!(user_id = %profile.user_id, "background survey stored");
        Ok(profile)
    }
}
