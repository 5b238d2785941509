use anyhow::Result;
use async_trait::async_trait;

/// Shows a blocking message to the user and resolves once it is dismissed.
#[async_trait]
pub trait AlertPresenter: Send + Sync {
    async fn show_alert(&self, message: &str) -> Result<()>;
}
