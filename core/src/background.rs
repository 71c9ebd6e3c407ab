use crate::prelude::{MapError, MapResult};
use std::path::{Path, PathBuf};

/// Background image that decoded far enough to report its size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundImage {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl BackgroundImage {
    /// Opens the image and reads its header. Failures are reported to the
    /// user, but the map keeps working without a background.
    pub fn probe<P: AsRef<Path>>(path: P) -> MapResult<Self> {
        let path_ref = path.as_ref();
        let io_error = |source| MapError::Io {
            path: path_ref.to_path_buf(),
            source,
        };
        let reader = image::ImageReader::open(path_ref)
            .map_err(io_error)?
            .with_guessed_format()
            .map_err(io_error)?;
        let (width, height) = reader
            .into_dimensions()
            .map_err(|err| MapError::Background {
                path: path_ref.to_path_buf(),
                reason: err.to_string(),
            })?;
        log::info!(
            "Custom map image loaded successfully: {} ({}x{})",
            path_ref.display(),
            width,
            height
        );
        Ok(Self {
            path: path_ref.to_path_buf(),
            width,
            height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn probe_reads_png_dimensions() {
        let temp = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        image::RgbImage::new(4, 3).save(temp.path()).unwrap();
        let background = BackgroundImage::probe(temp.path()).unwrap();
        assert_eq!((background.width, background.height), (4, 3));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = BackgroundImage::probe("/nonexistent/img/1.jpeg").unwrap_err();
        assert!(matches!(err, MapError::Io { .. }));
    }

    #[test]
    fn garbage_bytes_are_background_error() {
        let mut temp = tempfile::Builder::new().suffix(".jpeg").tempfile().unwrap();
        temp.write_all(b"not really an image").unwrap();
        let err = BackgroundImage::probe(temp.path()).unwrap_err();
        assert!(matches!(err, MapError::Background { .. }));
    }
}
