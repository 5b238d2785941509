pub const APPLICATION_NAME: &str = "Image Text Extractor";
pub const APPLICATION_CONFIG_DIR: &str = "image-text-extractor";

pub const DEFAULT_EXTRACTION_ENDPOINT_URL: &str = "http://127.0.0.1:5000/upload";
pub const UPLOAD_FIELD_NAME: &str = "image";
pub const UPLOAD_FILE_NAME: &str = "image.jpg";
pub const UPLOAD_FALLBACK_MIME_TYPE: &str = "image/jpeg";
pub const RESPONSE_TEXT_FIELD: &str = "extracted_text";

pub const PICKER_IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff", "heic",
];
pub const PICKER_MAXIMUM_QUALITY: f32 = 1.0;

pub const ALERT_PERMISSION_REQUIRED: &str = "Permission to access media library is required!";
pub const ALERT_NO_IMAGE_SELECTED: &str = "No image selected";
pub const ALERT_SELECT_IMAGE_FIRST: &str = "Please select an image first!";
pub const ALERT_EXTRACTION_FAILED: &str = "Failed to extract text. Please try again.";

pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const MAIN_WINDOW_WIDTH: f32 = 520.0;
pub const MAIN_WINDOW_HEIGHT: f32 = 720.0;
pub const PREVIEW_IMAGE_SIZE: f32 = 300.0;
