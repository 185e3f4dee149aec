use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use rfd::FileDialog;
use url::Url;

use crate::store::PickedImage;

/// Image-picking facility. `None` means the user backed out of the dialog.
pub trait ImagePicker {
    fn pick_image(&self) -> Option<PickedImage>;
}

/// Native file-dialog picker. The payload is read and encoded up front so
/// the workflow never touches the filesystem again.
pub struct SystemImagePicker;

impl ImagePicker for SystemImagePicker {
    fn pick_image(&self) -> Option<PickedImage> {
        let path = FileDialog::new()
            .set_directory(".")
            .add_filter("Image files", &["png", "jpg", "jpeg", "webp", "bmp"])
            .pick_file()?;
        Some(picked_from_path(&path))
    }
}

/// Build a [`PickedImage`] from a file on disk. An unreadable file
/// degrades to a pick without payload rather than failing: the image can
/// still be shown, only extraction is off the table.
pub fn picked_from_path(path: &Path) -> PickedImage {
    let base64 = match fs::read(path) {
        Ok(bytes) => Some(STANDARD.encode(bytes)),
        Err(e) => {
            eprintln!("Failed to read {}: {}", path.display(), e);
            None
        }
    };
    PickedImage {
        uri: file_uri(path),
        base64,
    }
}

fn file_uri(path: &Path) -> String {
    path.canonicalize()
        .ok()
        .and_then(|abs| Url::from_file_path(&abs).ok())
        .map(|url| url.to_string())
        .unwrap_or_else(|| path.display().to_string())
}
