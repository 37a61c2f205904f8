use copypasta::{ClipboardContext as CopyPastaClipboardContext, ClipboardProvider};

/// Manages access to the system clipboard.
pub struct Clipboard {
    context: CopyPastaClipboardContext,
}

impl Clipboard {
    /// Return a new clipboard, or `None` if the system clipboard is not available.
    pub fn new() -> Option<Self> {
        match CopyPastaClipboardContext::new() {
            Ok(context) => Some(Self { context }),
            #[allow(unused_variables)]
            Err(error) => {
                #[cfg(feature = "logging")]
                log::warn!("Failed to open the clipboard: {}", error);
                None
            }
        }
    }

    /// Set the contents of the clipboard.
    ///
    /// Failures are logged and otherwise ignored.
    pub fn copy(&mut self, contents: String) {
        #[cfg(feature = "logging")]
        log::debug!("Setting the clipboard contents to \"{}\"...", contents);

        match self.context.set_contents(contents.clone()) {
            Ok(()) => {}
            #[allow(unused_variables)]
            Err(error) => {
                #[cfg(feature = "logging")]
                log::warn!("Failed to set the clipboard contents: {}", error);
                return;
            }
        }

        // NOTE: Some X11 clipboards only keep the contents once they have been read back.
        // See https://github.com/alacritty/copypasta/issues/49
        #[allow(unused_variables)]
        let actual_contents = self.context.get_contents();

        #[cfg(feature = "logging")]
        match actual_contents {
            Ok(actual_contents) if actual_contents == contents => {
                log::debug!("Successfully set the clipboard contents.");
            }
            _ => log::warn!("Failed to set the clipboard contents."),
        }
    }
}
