use std::path::PathBuf;

use fltk::dialog::{FileDialogType, NativeFileChooser};

const PROOF_FILTER: &str = "Images\t*.{png,jpg,jpeg,webp}\nPDF\t*.pdf";

/// Ask for a single proof-of-payment file. `None` when the picker is cancelled.
pub fn native_proof_dialog() -> Option<PathBuf> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseFile);
    nfc.set_title("Chọn ảnh chuyển khoản");
    nfc.set_filter(PROOF_FILTER);
    nfc.show(); // blocks until close
    let filename = nfc.filename();
    if filename.as_os_str().is_empty() {
        None
    } else {
        Some(filename)
    }
}
