//! Profile image loading.

use std::path::Path;

use base64::Engine as _;
use profilekit_common::ProfileKitError;

/// Read an image file and encode it as standard, padded base64.
pub fn encode_image_file(path: &Path) -> Result<String, ProfileKitError> {
    let bytes = std::fs::read(path)?;
    if bytes.is_empty() {
        return Err(ProfileKitError::Other(format!(
            "profile image {} is empty",
            path.display()
        )));
    }
    Ok(base64::engine::general_purpose::STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avatar.bin");
        std::fs::write(&path, b"ABC").unwrap();

        assert_eq!(encode_image_file(&path).unwrap(), "QUJD");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = encode_image_file(&dir.path().join("absent.png")).unwrap_err();
        assert!(matches!(err, ProfileKitError::Io(_)));
    }

    #[test]
    fn empty_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");
        std::fs::write(&path, b"").unwrap();

        let err = encode_image_file(&path).unwrap_err();
        assert!(err.to_string().contains("is empty"));
    }
}
