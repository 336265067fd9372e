//! System clipboard via arboard.

use fortress_core::copy::ClipboardSink;
use fortress_core::{FortressError, FortressResult};

pub struct SystemClipboard(arboard::Clipboard);

impl SystemClipboard {
    pub fn open() -> FortressResult<Self> {
        arboard::Clipboard::new()
            .map(Self)
            .map_err(|e| FortressError::Clipboard(e.to_string()))
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> FortressResult<()> {
        self.0
            .set_text(text)
            .map_err(|e| FortressError::Clipboard(e.to_string()))
    }
}
