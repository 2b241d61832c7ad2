use thiserror::Error;
use web_sys::window;

use crate::config::INTRO_SEEN_KEY;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("localStorage is not available")]
    Unavailable,
    #[error("failed to read {0} from localStorage")]
    Read(&'static str),
    #[error("failed to write {0} to localStorage")]
    Write(&'static str),
}

/// Where the "intro already shown" flag lives.
pub trait IntroStore {
    fn has_seen_intro(&self) -> Result<bool, StorageError>;
    fn mark_intro_seen(&self) -> Result<(), StorageError>;
}

/// The browser's localStorage.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage(&self) -> Result<web_sys::Storage, StorageError> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

impl IntroStore for BrowserStorage {
    fn has_seen_intro(&self) -> Result<bool, StorageError> {
        let value = self
            .storage()?
            .get_item(INTRO_SEEN_KEY)
            .map_err(|_| StorageError::Read(INTRO_SEEN_KEY))?;
        Ok(value.as_deref() == Some("true"))
    }

    fn mark_intro_seen(&self) -> Result<(), StorageError> {
        self.storage()?
            .set_item(INTRO_SEEN_KEY, "true")
            .map_err(|_| StorageError::Write(INTRO_SEEN_KEY))
    }
}
