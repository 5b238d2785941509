use std::sync::Arc;

use crate::core::interfaces::adapters::{ImagePicker, MediaLibraryPermission, TextExtractionService};
use crate::core::models::{ImageLocation, PickOutcome, PickerOptions};

pub async fn run_pick_image(
    permission: Arc<dyn MediaLibraryPermission>,
    picker: Arc<dyn ImagePicker>,
    options: PickerOptions,
) -> PickOutcome {
    log::info!("[WORKFLOW] Requesting media library permission");

    let permission_status = match permission.request_access().await {
        Ok(status) => status,
        Err(e) => {
            log::error!("[WORKFLOW] Permission request failed: {}", e);
            return PickOutcome::PermissionDenied;
        }
    };

    if !permission_status.is_granted() {
        return PickOutcome::PermissionDenied;
    }

    log::debug!("[WORKFLOW] Opening picker with {:?}", options);

    match picker.pick_image(&options).await {
        Ok(result) => match result.first_location() {
            Some(location) => PickOutcome::Selected(location),
            None => PickOutcome::NothingSelected,
        },
        Err(e) => {
            log::error!("[WORKFLOW] Picker failed: {}", e);
            PickOutcome::NothingSelected
        }
    }
}

pub async fn run_upload_image(
    extraction_service: Arc<dyn TextExtractionService>,
    location: ImageLocation,
) -> Result<String, String> {
    log::info!("[WORKFLOW] Uploading {} for text extraction", location);

    extraction_service
        .extract_text(&location)
        .await
        .map_err(|e| format!("{:#}", e))
}
