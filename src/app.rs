use std::sync::Arc;

use iced::{Element, Task, Theme};

use crate::adapters::{
    DesktopMediaLibraryPermission, HttpTextExtractionService, RfdAlertPresenter, RfdImagePicker,
};
use crate::core::models::UserSettings;
use crate::core::orchestrators::app_orchestrator::{AppOrchestrator, OrchestratorMessage};

pub struct ExtractorApp {
    orchestrator: AppOrchestrator,
}

impl ExtractorApp {
    pub fn build() -> (Self, Task<OrchestratorMessage>) {
        log::info!("[APP] Initializing application");

        let settings = UserSettings::load().unwrap_or_else(|e| {
            log::warn!("[APP] Failed to load settings: {}, using defaults", e);
            UserSettings::default()
        });

        log::info!(
            "[APP] Extraction endpoint: {}",
            settings.extraction_endpoint_url
        );

        let extraction_service = Arc::new(HttpTextExtractionService::new(
            settings.extraction_endpoint_url.clone(),
        ));

        let orchestrator = AppOrchestrator::build(
            Arc::new(DesktopMediaLibraryPermission::new()),
            Arc::new(RfdImagePicker::new()),
            extraction_service,
            Arc::new(RfdAlertPresenter::new()),
            settings,
        );

        (Self { orchestrator }, Task::none())
    }

    pub fn handle_update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        self.orchestrator.update(message)
    }

    pub fn render_view(&self) -> Element<'_, OrchestratorMessage> {
        self.orchestrator.render_view()
    }

    pub fn theme(&self) -> Theme {
        self.orchestrator.theme()
    }
}
