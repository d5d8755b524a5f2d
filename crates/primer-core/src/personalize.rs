//! Chapter personalization service seam.

use crate::error::Result;
use async_trait::async_trait;

/// Backend chapter personalization.
#[async_trait]
pub trait PersonalizeService: Send + Sync {
    /// Requests a personalized rendition of a chapter for the signed-in
    /// reader. Returns the personalized content as an opaque markup string.
    async fn personalize_chapter(
        &self,
        token: &str,
        chapter_key: &str,
        content: &str,
    ) -> Result<String>;
}
