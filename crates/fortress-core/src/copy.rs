//! Copy-to-clipboard button feedback.

use std::time::Duration;

use crate::error::FortressResult;

pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "✓ Copied!";

/// Somewhere text can be copied to.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> FortressResult<()>;
}

/// Label state of one copy button.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CopyFeedback {
    #[default]
    Idle,
    Copied,
}

impl CopyFeedback {
    pub fn label(&self) -> &'static str {
        match self {
            CopyFeedback::Idle => COPY_LABEL,
            CopyFeedback::Copied => COPIED_LABEL,
        }
    }
}

/// Copy `text`, returning the feedback to show.
///
/// Failures are logged and leave the button as it was.
pub fn copy_text<C: ClipboardSink>(clipboard: &mut C, text: &str) -> CopyFeedback {
    match clipboard.write_text(text) {
        Ok(()) => CopyFeedback::Copied,
        Err(e) => {
            tracing::warn!("Failed to copy: {}", e);
            CopyFeedback::Idle
        }
    }
}

/// Show `feedback`, and if it is a confirmation, revert to idle after `hold`.
pub async fn show_feedback<F>(feedback: CopyFeedback, hold: Duration, mut show: F)
where
    F: FnMut(CopyFeedback),
{
    if feedback != CopyFeedback::Copied {
        return;
    }
    show(CopyFeedback::Copied);
    tokio::time::sleep(hold).await;
    show(CopyFeedback::Idle);
}
