//! Clipboard capability
//!
//! Hosts plug in whatever mechanism their platform offers; callers only see
//! `copy_text`.

use std::sync::Mutex;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard is not available")]
    Unavailable,
    #[error("Clipboard rejected the copy: {0}")]
    Rejected(String),
}

pub trait Clipboard {
    fn copy_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Tries `primary` first and falls back to `fallback` when it fails.
#[derive(Debug)]
pub struct FallbackClipboard<P, F> {
    primary: P,
    fallback: F,
}

impl<P: Clipboard, F: Clipboard> FallbackClipboard<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: Clipboard, F: Clipboard> Clipboard for FallbackClipboard<P, F> {
    fn copy_text(&self, text: &str) -> Result<(), ClipboardError> {
        match self.primary.copy_text(text) {
            Ok(()) => Ok(()),
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Primary clipboard failed ({}), using fallback", _e);
                self.fallback.copy_text(text)
            }
        }
    }
}

/// Keeps the last copied text in memory.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn copy_text(&self, text: &str) -> Result<(), ClipboardError> {
        *self.contents.lock().unwrap_or_else(|e| e.into_inner()) = Some(text.to_string());
        Ok(())
    }
}

/// Copies `text`, logging instead of propagating failures.
pub fn copy_or_log<C: Clipboard + ?Sized>(clipboard: &C, text: &str) -> bool {
    match clipboard.copy_text(text) {
        Ok(()) => true,
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to copy password: {}", _e);
            false
        }
    }
}

/// Runs the copy on the blocking pool so the caller never waits on it.
///
/// The handle resolves to whether the copy succeeded.
#[cfg(feature = "async")]
pub fn copy_text_detached<C>(
    clipboard: std::sync::Arc<C>,
    text: String,
) -> tokio::task::JoinHandle<bool>
where
    C: Clipboard + Send + Sync + ?Sized + 'static,
{
    tokio::task::spawn_blocking(move || copy_or_log(clipboard.as_ref(), &text))
}
