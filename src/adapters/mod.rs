mod desktop_media_library_permission;
mod http_text_extraction_service;
mod rfd_alert_presenter;
mod rfd_image_picker;

pub use desktop_media_library_permission::DesktopMediaLibraryPermission;
pub use http_text_extraction_service::HttpTextExtractionService;
pub use rfd_alert_presenter::RfdAlertPresenter;
pub use rfd_image_picker::RfdImagePicker;
