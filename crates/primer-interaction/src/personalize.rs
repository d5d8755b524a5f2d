//! Chapter personalization endpoint.

use crate::backend::{BackendClient, decode_error};
use async_trait::async_trait;
use primer_core::Result;
use primer_core::personalize::PersonalizeService;
use serde::{Deserialize, Serialize};

#[async_trait]
impl PersonalizeService for BackendClient {
    async fn personalize_chapter(
        &self,
        token: &str,
        chapter_key: &str,
        content: &str,
    ) -> Result<String> {
        let body = PersonalizeRequest {
            chapter_content: content,
        };

        let response = self
            .http
            .post(self.url(&format!("/personalize/chapter/{chapter_key}")))
            .header("Authorization", Self::bearer(token))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let parsed: PersonalizeResponse = response.json().await.map_err(decode_error)?;
        tracing::debug!(chapter = %parsed.chapter_id, "personalized content received");
        Ok(parsed.personalized_content)
    }
}

#[derive(Serialize)]
struct PersonalizeRequest<'a> {
    chapter_content: &'a str,
}

#[derive(Deserialize)]
struct PersonalizeResponse {
    chapter_id: String,
    personalized_content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = PersonalizeRequest {
            chapter_content: "# Chapter\n\nOriginal body.",
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["chapter_content"], "# Chapter\n\nOriginal body.");
    }

    #[test]
    fn test_response_shape() {
        let json = r#"{"chapter_id": "ch-01", "personalized_content": "Adapted body."}"#;
        let parsed: PersonalizeResponse = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.chapter_id, "ch-01");
        assert_eq!(parsed.personalized_content, "Adapted body.");
    }
}
