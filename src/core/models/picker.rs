use crate::core::models::ImageLocation;
use crate::global_constants;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerMediaType {
    Images,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PickerOptions {
    pub media_type: PickerMediaType,
    pub allows_editing: bool,
    /// Compression quality in `0.0..=1.0`, where `1.0` keeps the original bytes.
    pub quality: f32,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            media_type: PickerMediaType::Images,
            allows_editing: true,
            quality: global_constants::PICKER_MAXIMUM_QUALITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedAsset {
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerResult {
    Cancelled,
    Picked(Vec<PickedAsset>),
}

impl PickerResult {
    /// First usable asset location, if the user picked anything.
    pub fn first_location(&self) -> Option<ImageLocation> {
        match self {
            PickerResult::Cancelled => None,
            PickerResult::Picked(assets) => assets
                .first()
                .and_then(|asset| ImageLocation::parse(&asset.location)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

impl PermissionStatus {
    pub fn is_granted(&self) -> bool {
        matches!(self, PermissionStatus::Granted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picker_options_default_requests_editable_full_quality_images() {
        let options = PickerOptions::default();

        assert_eq!(options.media_type, PickerMediaType::Images);
        assert!(options.allows_editing);
        assert_eq!(options.quality, 1.0);
    }

    #[test]
    fn test_first_location_is_none_when_cancelled() {
        assert!(PickerResult::Cancelled.first_location().is_none());
    }

    #[test]
    fn test_first_location_is_none_for_empty_asset_list() {
        assert!(PickerResult::Picked(vec![]).first_location().is_none());
    }

    #[test]
    fn test_first_location_is_none_when_first_asset_has_no_location() {
        let result = PickerResult::Picked(vec![
            PickedAsset {
                location: String::new(),
            },
            PickedAsset {
                location: "/tmp/second.png".to_string(),
            },
        ]);

        assert!(result.first_location().is_none());
    }

    #[test]
    fn test_first_location_returns_first_asset() {
        let result = PickerResult::Picked(vec![PickedAsset {
            location: "/tmp/first.png".to_string(),
        }]);

        assert_eq!(
            result.first_location().unwrap().as_str(),
            "/tmp/first.png"
        );
    }

    #[test]
    fn test_permission_status_is_granted() {
        assert!(PermissionStatus::Granted.is_granted());
        assert!(!PermissionStatus::Denied.is_granted());
    }
}
