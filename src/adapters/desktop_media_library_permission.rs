use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::core::interfaces::adapters::MediaLibraryPermission;
use crate::core::models::PermissionStatus;

const LOG_TAG_PERMISSION: &str = "[PERMISSION]";

/// Treats the user's picture directory as the media library: access is
/// granted when the process may list it.
pub struct DesktopMediaLibraryPermission {
    library_directory: Option<PathBuf>,
}

impl DesktopMediaLibraryPermission {
    pub fn new() -> Self {
        Self::with_library_directory(dirs::picture_dir().or_else(dirs::home_dir))
    }

    pub fn with_library_directory(library_directory: Option<PathBuf>) -> Self {
        Self { library_directory }
    }
}

#[async_trait]
impl MediaLibraryPermission for DesktopMediaLibraryPermission {
    async fn request_access(&self) -> Result<PermissionStatus> {
        let Some(library_directory) = &self.library_directory else {
            log::info!(
                "{} No media library directory on this platform, granting access",
                LOG_TAG_PERMISSION
            );
            return Ok(PermissionStatus::Granted);
        };

        log::info!(
            "{} Checking media library access for {:?}",
            LOG_TAG_PERMISSION,
            library_directory
        );

        let listing = tokio::fs::read_dir(library_directory).await.map(|_| ());
        status_from_listing(library_directory, listing)
    }
}

/// Maps the outcome of listing the library directory to an access decision.
fn status_from_listing(
    library_directory: &Path,
    listing: io::Result<()>,
) -> Result<PermissionStatus> {
    match listing {
        Ok(()) => {
            log::info!("{} Media library access granted", LOG_TAG_PERMISSION);
            Ok(PermissionStatus::Granted)
        }
        Err(error) if error.kind() == ErrorKind::PermissionDenied => {
            log::warn!(
                "{} Media library access denied: {}",
                LOG_TAG_PERMISSION,
                error
            );
            Ok(PermissionStatus::Denied)
        }
        Err(error) if error.kind() == ErrorKind::NotFound => {
            log::info!(
                "{} Media library directory missing, granting access",
                LOG_TAG_PERMISSION
            );
            Ok(PermissionStatus::Granted)
        }
        Err(error) => Err(error).with_context(|| {
            format!("Failed to list media library at {:?}", library_directory)
        }),
    }
}
