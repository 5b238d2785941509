mod extraction_session;
mod image_location;
mod picker;
mod user_settings;

pub use extraction_session::{ExtractionSession, PickOutcome, UploadStart, UserAlert};
pub use image_location::ImageLocation;
pub use picker::{PermissionStatus, PickedAsset, PickerMediaType, PickerOptions, PickerResult};
pub use user_settings::{ThemeMode, UserSettings};
