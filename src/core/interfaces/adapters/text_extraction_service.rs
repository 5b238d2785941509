use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::ImageLocation;

#[async_trait]
pub trait TextExtractionService: Send + Sync {
    async fn extract_text(&self, location: &ImageLocation) -> Result<String>;
}
