use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::{PickerOptions, PickerResult};

#[async_trait]
pub trait ImagePicker: Send + Sync {
    async fn pick_image(&self, options: &PickerOptions) -> Result<PickerResult>;
}
