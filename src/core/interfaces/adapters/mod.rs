mod alert_presenter;
mod image_picker;
mod media_library_permission;
mod text_extraction_service;

pub use alert_presenter::AlertPresenter;
pub use image_picker::ImagePicker;
pub use media_library_permission::MediaLibraryPermission;
pub use text_extraction_service::TextExtractionService;
