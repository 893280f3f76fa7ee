use crate::config::SUPPORTED_IMAGE_EXTENSIONS;
use crate::error::{AppError, Result};
use std::path::Path;

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext_str| SUPPORTED_IMAGE_EXTENSIONS.contains(&ext_str.to_lowercase().as_str()))
        .unwrap_or(false)
}

pub fn ensure_supported_image(path: &Path) -> Result<()> {
    if is_supported_image(path) {
        Ok(())
    } else {
        Err(AppError::UnsupportedFile(path.to_path_buf()))
    }
}

/// File name shown under the upload buttons.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_check_ignores_case() {
        assert!(is_supported_image(Path::new("photo.PNG")));
        assert!(is_supported_image(Path::new("dir/shot.jpeg")));
        assert!(!is_supported_image(Path::new("readme.md")));
        assert!(!is_supported_image(Path::new("no_extension")));
    }

    #[test]
    fn unsupported_files_are_rejected() {
        let result = ensure_supported_image(Path::new("clip.mov"));
        assert!(matches!(result, Err(AppError::UnsupportedFile(p)) if p == Path::new("clip.mov")));
        assert!(ensure_supported_image(Path::new("clip.webp")).is_ok());
    }

    #[test]
    fn display_name_uses_file_name() {
        assert_eq!(display_name(Path::new("/tmp/images/dark.png")), "dark.png");
        assert_eq!(display_name(Path::new("/")), "/");
    }
}
