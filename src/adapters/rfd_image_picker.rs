use std::path::{Path, PathBuf};

use anyhow::Result;
use async_trait::async_trait;

use crate::core::interfaces::adapters::ImagePicker;
use crate::core::models::{PickedAsset, PickerMediaType, PickerOptions, PickerResult};
use crate::global_constants;

/// Native file dialog standing in for a photo library picker.
pub struct RfdImagePicker {
    starting_directory: Option<PathBuf>,
}

impl RfdImagePicker {
    pub fn new() -> Self {
        Self {
            starting_directory: dirs::picture_dir(),
        }
    }

    fn build_dialog(&self, options: &PickerOptions) -> rfd::AsyncFileDialog {
        let mut dialog = rfd::AsyncFileDialog::new().set_title("Pick an Image");

        if let Some(directory) = &self.starting_directory {
            dialog = dialog.set_directory(directory);
        }

        match options.media_type {
            PickerMediaType::Images => {
                dialog = dialog.add_filter("Images", global_constants::PICKER_IMAGE_EXTENSIONS);
            }
        }

        dialog
    }
}

fn picked_asset_from_path(path: &Path) -> PickedAsset {
    PickedAsset {
        location: path.to_string_lossy().into_owned(),
    }
}

#[async_trait]
impl ImagePicker for RfdImagePicker {
    async fn pick_image(&self, options: &PickerOptions) -> Result<PickerResult> {
        log::info!("[PICKER] Opening image picker");
        // The native dialog has no crop step and never recompresses, so
        // editing is skipped and every pick is delivered at full quality.
        log::debug!(
            "[PICKER] allows_editing={}, quality={}",
            options.allows_editing,
            options.quality
        );

        let Some(file_handle) = self.build_dialog(options).pick_file().await else {
            log::info!("[PICKER] Picker cancelled");
            return Ok(PickerResult::Cancelled);
        };

        let picked_path = file_handle.path();
        log::info!("[PICKER] Picked {:?}", picked_path);

        Ok(PickerResult::Picked(vec![picked_asset_from_path(picked_path)]))
    }
}
