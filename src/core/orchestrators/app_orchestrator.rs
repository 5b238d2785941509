use std::sync::Arc;

use iced::widget::{button, column, container, image, row, scrollable, text};
use iced::{Alignment, Background, Color, Element, Length, Task, Theme};

use crate::core::interfaces::adapters::{
    AlertPresenter, ImagePicker, MediaLibraryPermission, TextExtractionService,
};
use crate::core::models::{
    ExtractionSession, ImageLocation, PickOutcome, PickerOptions, UploadStart, UserAlert,
    UserSettings,
};
use crate::core::orchestrators::extraction_workflow;
use crate::global_constants;
use crate::presentation::app_theme;

pub struct AppOrchestrator {
    permission: Arc<dyn MediaLibraryPermission>,
    picker: Arc<dyn ImagePicker>,
    extraction_service: Arc<dyn TextExtractionService>,
    alert_presenter: Arc<dyn AlertPresenter>,
    picker_options: PickerOptions,
    session: ExtractionSession,
    preview_handle: Option<image::Handle>,
    settings: UserSettings,
}

#[derive(Debug, Clone)]
pub enum OrchestratorMessage {
    PickImage,
    PickCompleted(PickOutcome),
    ExtractText,
    ExtractionCompleted(Result<String, String>),
    CopyExtractedText,
    AlertDismissed,
}

impl AppOrchestrator {
    pub fn build(
        permission: Arc<dyn MediaLibraryPermission>,
        picker: Arc<dyn ImagePicker>,
        extraction_service: Arc<dyn TextExtractionService>,
        alert_presenter: Arc<dyn AlertPresenter>,
        settings: UserSettings,
    ) -> Self {
        Self {
            permission,
            picker,
            extraction_service,
            alert_presenter,
            picker_options: PickerOptions::default(),
            session: ExtractionSession::new(),
            preview_handle: None,
            settings,
        }
    }

    pub fn theme(&self) -> Theme {
        app_theme::get_theme(&self.settings.theme_mode)
    }

    pub fn update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        log::info!("[ORCHESTRATOR] Received message: {:?}", message);

        match message {
            OrchestratorMessage::PickImage => self.handle_pick_image(),
            OrchestratorMessage::PickCompleted(outcome) => self.handle_pick_completed(outcome),
            OrchestratorMessage::ExtractText => self.handle_extract_text(),
            OrchestratorMessage::ExtractionCompleted(result) => {
                self.handle_extraction_completed(result)
            }
            OrchestratorMessage::CopyExtractedText => self.handle_copy_extracted_text(),
            OrchestratorMessage::AlertDismissed => {
                log::debug!(
                    "[ORCHESTRATOR] Alert dismissed: {:?}",
                    self.session.last_alert()
                );
                Task::none()
            }
        }
    }

    fn handle_pick_image(&mut self) -> Task<OrchestratorMessage> {
        let permission = Arc::clone(&self.permission);
        let picker = Arc::clone(&self.picker);
        let options = self.picker_options.clone();

        Task::future(async move {
            let outcome = extraction_workflow::run_pick_image(permission, picker, options).await;
            OrchestratorMessage::PickCompleted(outcome)
        })
    }

    fn handle_pick_completed(&mut self, outcome: PickOutcome) -> Task<OrchestratorMessage> {
        let new_preview = match &outcome {
            PickOutcome::Selected(location) => Some(Self::build_preview_handle(location)),
            _ => None,
        };

        if let Some(alert) = self.session.apply_pick_outcome(outcome) {
            return self.present_alert(alert);
        }

        if let Some(preview) = new_preview {
            self.preview_handle = preview;
        }
        Task::none()
    }

    fn handle_extract_text(&mut self) -> Task<OrchestratorMessage> {
        match self.session.begin_upload() {
            UploadStart::Started(location) => {
                let extraction_service = Arc::clone(&self.extraction_service);

                Task::future(async move {
                    let result =
                        extraction_workflow::run_upload_image(extraction_service, location).await;
                    OrchestratorMessage::ExtractionCompleted(result)
                })
            }
            UploadStart::Rejected(alert) => self.present_alert(alert),
            UploadStart::AlreadyInFlight => Task::none(),
        }
    }

    fn handle_extraction_completed(
        &mut self,
        result: Result<String, String>,
    ) -> Task<OrchestratorMessage> {
        match self.session.finish_upload(result) {
            Some(alert) => self.present_alert(alert),
            None => Task::none(),
        }
    }

    fn handle_copy_extracted_text(&mut self) -> Task<OrchestratorMessage> {
        let extracted_text = self.session.extracted_text();
        if extracted_text.is_empty() {
            return Task::none();
        }

        if let Err(e) = arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(extracted_text))
        {
            log::error!("[ORCHESTRATOR] Failed to copy to clipboard: {}", e);
        } else {
            log::info!("[ORCHESTRATOR] Extracted text copied to clipboard");
        }
        Task::none()
    }

    fn present_alert(&self, alert: UserAlert) -> Task<OrchestratorMessage> {
        let alert_presenter = Arc::clone(&self.alert_presenter);

        Task::future(async move {
            if let Err(e) = alert_presenter.show_alert(alert.message()).await {
                log::error!("[ORCHESTRATOR] Failed to show alert {:?}: {}", alert, e);
            }
            OrchestratorMessage::AlertDismissed
        })
    }

    fn build_preview_handle(location: &ImageLocation) -> Option<image::Handle> {
        match location.to_file_path() {
            Ok(path) => Some(image::Handle::from_path(path)),
            Err(e) => {
                log::warn!("[ORCHESTRATOR] No preview for {}: {}", location, e);
                None
            }
        }
    }

    pub fn render_view(&self) -> Element<'_, OrchestratorMessage> {
        let theme = self.theme();

        let title = text(global_constants::APPLICATION_NAME).size(28);

        let pick_btn = button(
            row![text("🖼").size(20), text("Pick an Image").size(16)]
                .spacing(10)
                .align_y(Alignment::Center),
        )
        .padding([12, 32])
        .style(|theme, status| app_theme::primary_button_style(theme, status))
        .on_press(OrchestratorMessage::PickImage);

        let mut content = column![title, pick_btn]
            .spacing(20)
            .padding(32)
            .align_x(Alignment::Center);

        if let Some(location) = self.session.selected_image() {
            content = content.push(self.render_selection_section(location));
        }

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .style(move |_theme| {
                let palette = theme.palette();
                iced::widget::container::Style {
                    background: Some(Background::Color(palette.background)),
                    text_color: Some(palette.text),
                    ..Default::default()
                }
            })
            .into()
    }

    fn render_selection_section<'a>(
        &'a self,
        location: &'a ImageLocation,
    ) -> Element<'a, OrchestratorMessage> {
        let preview: Element<'a, OrchestratorMessage> = match &self.preview_handle {
            Some(handle) => image(handle.clone())
                .width(Length::Fixed(global_constants::PREVIEW_IMAGE_SIZE))
                .height(Length::Fixed(global_constants::PREVIEW_IMAGE_SIZE))
                .into(),
            None => text(location.display_name()).size(14).into(),
        };

        let action: Element<'a, OrchestratorMessage> = if self.session.is_loading() {
            self.render_loading_indicator()
        } else {
            button(text("Extract Text").size(16))
                .padding([10, 28])
                .style(|theme, status| app_theme::primary_button_style(theme, status))
                .on_press(OrchestratorMessage::ExtractText)
                .into()
        };

        let extracted_text = scrollable(
            text(self.session.extracted_text())
                .size(15)
                .width(Length::Fill)
                .center(),
        )
        .height(Length::Fill);

        let mut section = column![preview, action, extracted_text]
            .spacing(20)
            .width(Length::Fill)
            .align_x(Alignment::Center);

        if !self.session.extracted_text().is_empty() {
            section = section.push(
                button(text("📋 Copy Text").size(14))
                    .padding([8, 20])
                    .style(|theme, status| app_theme::secondary_button_style(theme, status))
                    .on_press(OrchestratorMessage::CopyExtractedText),
            );
        }

        section.into()
    }

    fn render_loading_indicator(&self) -> Element<'_, OrchestratorMessage> {
        let theme = self.theme();
        let warning_color = theme.palette().warning;

        row![
            text("○")
                .size(14)
                .style(move |_theme: &Theme| iced::widget::text::Style {
                    color: Some(warning_color),
                }),
            text("Extracting text...")
                .size(14)
                .style(|_theme: &Theme| iced::widget::text::Style {
                    color: Some(Color::from_rgba(0.6, 0.6, 0.6, 1.0)),
                }),
        ]
        .spacing(8)
        .align_y(Alignment::Center)
        .into()
    }
}
