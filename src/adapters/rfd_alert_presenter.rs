use anyhow::Result;
use async_trait::async_trait;

use crate::core::interfaces::adapters::AlertPresenter;
use crate::global_constants;

pub struct RfdAlertPresenter;

impl RfdAlertPresenter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AlertPresenter for RfdAlertPresenter {
    async fn show_alert(&self, message: &str) -> Result<()> {
        log::info!("[ALERT] {}", message);

        rfd::AsyncMessageDialog::new()
            .set_level(rfd::MessageLevel::Warning)
            .set_title(global_constants::APPLICATION_NAME)
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show()
            .await;

        Ok(())
    }
}
