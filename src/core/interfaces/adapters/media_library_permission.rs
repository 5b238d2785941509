use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::PermissionStatus;

#[async_trait]
pub trait MediaLibraryPermission: Send + Sync {
    async fn request_access(&self) -> Result<PermissionStatus>;
}
