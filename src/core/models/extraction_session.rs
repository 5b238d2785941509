use crate::core::models::ImageLocation;
use crate::global_constants;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAlert {
    PermissionRequired,
    NoImageSelected,
    SelectImageFirst,
    ExtractionFailed,
}

impl UserAlert {
    pub fn message(&self) -> &'static str {
        match self {
            UserAlert::PermissionRequired => global_constants::ALERT_PERMISSION_REQUIRED,
            UserAlert::NoImageSelected => global_constants::ALERT_NO_IMAGE_SELECTED,
            UserAlert::SelectImageFirst => global_constants::ALERT_SELECT_IMAGE_FIRST,
            UserAlert::ExtractionFailed => global_constants::ALERT_EXTRACTION_FAILED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    PermissionDenied,
    NothingSelected,
    Selected(ImageLocation),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadStart {
    Started(ImageLocation),
    Rejected(UserAlert),
    AlreadyInFlight,
}

/// The screen's state: selected image, extracted text and the loading flag.
#[derive(Debug, Default)]
pub struct ExtractionSession {
    selected_image: Option<ImageLocation>,
    extracted_text: String,
    is_loading: bool,
    last_alert: Option<UserAlert>,
}

impl ExtractionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_image(&self) -> Option<&ImageLocation> {
        self.selected_image.as_ref()
    }

    pub fn extracted_text(&self) -> &str {
        &self.extracted_text
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn last_alert(&self) -> Option<UserAlert> {
        self.last_alert
    }

    pub fn apply_pick_outcome(&mut self, outcome: PickOutcome) -> Option<UserAlert> {
        match outcome {
            PickOutcome::PermissionDenied => {
                log::warn!("[SESSION] Media library permission denied");
                self.raise(UserAlert::PermissionRequired)
            }
            PickOutcome::NothingSelected => {
                log::warn!("[SESSION] Picker returned no image");
                self.raise(UserAlert::NoImageSelected)
            }
            PickOutcome::Selected(location) => {
                log::info!("[SESSION] Image selected: {}", location);
                self.selected_image = Some(location);
                self.extracted_text.clear();
                None
            }
        }
    }

    pub fn begin_upload(&mut self) -> UploadStart {
        if self.is_loading {
            log::warn!("[SESSION] Upload already in flight, ignoring request");
            return UploadStart::AlreadyInFlight;
        }

        let Some(location) = self.selected_image.clone() else {
            log::warn!("[SESSION] Upload requested without a selected image");
            self.last_alert = Some(UserAlert::SelectImageFirst);
            return UploadStart::Rejected(UserAlert::SelectImageFirst);
        };

        log::info!("[SESSION] Starting upload of {}", location);
        self.is_loading = true;
        UploadStart::Started(location)
    }

    pub fn finish_upload(&mut self, result: Result<String, String>) -> Option<UserAlert> {
        self.is_loading = false;

        match result {
            Ok(text) => {
                log::info!(
                    "[SESSION] Extraction complete, {} characters received",
                    text.len()
                );
                self.extracted_text = text;
                None
            }
            Err(error) => {
                log::error!("[SESSION] Error uploading image: {}", error);
                self.raise(UserAlert::ExtractionFailed)
            }
        }
    }

    fn raise(&mut self, alert: UserAlert) -> Option<UserAlert> {
        self.last_alert = Some(alert);
        Some(alert)
    }
}
