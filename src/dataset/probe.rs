//! Image dimension probing.
//!
//! Only the file header is read; pixel data is never decoded. The format is
//! sniffed from the content, so extension case does not matter.

use std::path::Path;

use crate::error::ConvertError;

/// Returns `(width, height)` in pixels for the image at `path`.
///
/// # Errors
/// Returns an error if the file cannot be opened, its format is not
/// recognized, or a dimension does not fit in `u32`.
pub fn image_dimensions(path: &Path) -> Result<(u32, u32), ConvertError> {
    let size = imagesize::size(path).map_err(|source| ConvertError::ImageDimensionRead {
        path: path.to_path_buf(),
        source,
    })?;

    let width: u32 = size
        .width
        .try_into()
        .map_err(|_| ConvertError::ImageDimensionInvalid {
            path: path.to_path_buf(),
            message: format!("width {} does not fit in u32", size.width),
        })?;

    let height: u32 = size
        .height
        .try_into()
        .map_err(|_| ConvertError::ImageDimensionInvalid {
            path: path.to_path_buf(),
            message: format!("height {} does not fit in u32", size.height),
        })?;

    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn png_header(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = b"\x89PNG\r\n\x1a\n".to_vec();
        bytes.extend_from_slice(&13u32.to_be_bytes());
        bytes.extend_from_slice(b"IHDR");
        bytes.extend_from_slice(&width.to_be_bytes());
        bytes.extend_from_slice(&height.to_be_bytes());
        bytes.extend_from_slice(&[8, 2, 0, 0, 0]);
        bytes.extend_from_slice(&[0, 0, 0, 0]);
        bytes
    }

    #[test]
    fn test_png_dimensions_with_uppercase_extension() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("leaf.PNG");
        fs::write(&path, png_header(321, 123)).expect("write");

        assert_eq!(image_dimensions(&path).expect("probe"), (321, 123));
    }

    #[test]
    fn test_unrecognized_content_is_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("broken.jpg");
        fs::write(&path, b"definitely not an image").expect("write");

        let err = image_dimensions(&path).unwrap_err();
        assert!(matches!(err, ConvertError::ImageDimensionRead { .. }));
    }

    #[test]
    fn test_missing_file_is_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        assert!(image_dimensions(&temp.path().join("gone.png")).is_err());
    }
}
