use arboard::Clipboard;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard is not available: {0}")]
    Unavailable(String),
    #[error("failed to write clipboard text: {0}")]
    Write(String),
}

/// Write-only text clipboard.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Platform clipboard through arboard. The handle is opened on first write and
/// kept for the life of the value, since some platforms drop the contents when
/// the owning handle goes away.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<Clipboard>,
    wait_for_handover: bool,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// For processes that exit right after copying. On X11 and Wayland each
    /// write blocks until another client takes over the selection.
    pub fn waiting_for_handover() -> Self {
        Self {
            inner: None,
            wait_for_handover: true,
        }
    }

    fn handle(&mut self) -> Result<&mut Clipboard, ClipboardError> {
        if self.inner.is_none() {
            let clipboard =
                Clipboard::new().map_err(|error| ClipboardError::Unavailable(error.to_string()))?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("clipboard handle missing".to_string()))
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let wait = self.wait_for_handover;
        write_text(self.handle()?, text, wait)
            .map_err(|error| ClipboardError::Write(error.to_string()))
    }
}

#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
))]
fn write_text(clipboard: &mut Clipboard, text: &str, wait: bool) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    if !wait {
        return clipboard.set_text(text);
    }
    tracing::info!("waiting for another application to take the clipboard");
    clipboard.set().wait().text(text)
}

#[cfg(not(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
)))]
fn write_text(clipboard: &mut Clipboard, text: &str, _wait: bool) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}

/// In-memory clipboard used by tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub text: Option<String>,
    pub writes: usize,
    pub fail: bool,
}

#[cfg(test)]
impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Write("clipboard refused".to_string()));
        }
        self.text = Some(text.to_string());
        self.writes += 1;
        Ok(())
    }
}
