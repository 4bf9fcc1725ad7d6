//! Interactive session - the state a password form works against.

use chrono::Local;
use rand::Rng;
use secrecy::{ExposeSecret, SecretString};

use crate::clipboard::{Clipboard, copy_or_log};
use crate::evaluator::evaluate_password_strength;
use crate::generator::{GenerateError, GenerationOptions, generate};
use crate::history::{History, HistoryEntry, export_file_name};
use crate::store::{HISTORY_KEY, KeyValueStore, StoreError, load_history, save_history};
use crate::types::StrengthResult;

#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Key the history is persisted under. Must be a plain name for `FileStore`.
    pub storage_key: String,
    /// Number of entries `recent_default` returns.
    pub display_limit: usize,
    pub default_options: GenerationOptions,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: HISTORY_KEY.to_string(),
            display_limit: 10,
            default_options: GenerationOptions::default(),
        }
    }
}

pub struct Session<S: KeyValueStore> {
    store: S,
    config: SessionConfig,
    options: GenerationOptions,
    current: Option<SecretString>,
    last_error: Option<GenerateError>,
    history: History,
}

impl<S: KeyValueStore> Session<S> {
    /// Opens a session, restoring history from `store`.
    ///
    /// # Errors
    ///
    /// Only when the store cannot be read. A malformed record is discarded.
    pub fn open(store: S, config: SessionConfig) -> Result<Self, StoreError> {
        let history = load_history(&store, &config.storage_key)?;
        Ok(Self {
            store,
            options: config.default_options.clone(),
            config,
            current: None,
            last_error: None,
            history,
        })
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut GenerationOptions {
        &mut self.options
    }

    /// Generates with the thread-local random source.
    pub fn generate(&mut self) -> Result<&SecretString, GenerateError> {
        self.generate_with(&mut rand::thread_rng())
    }

    /// Generates a password, scores it and records it in the history.
    ///
    /// On a validation error the current password is cleared and nothing is
    /// recorded.
    pub fn generate_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<&SecretString, GenerateError> {
        let password = match generate(&self.options, rng) {
            Ok(password) => password,
            Err(e) => {
                self.current = None;
                self.last_error = Some(e.clone());
                return Err(e);
            }
        };

        let strength = evaluate_password_strength(&password);

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Password generated: {} chars, {}",
            self.options.length,
            strength.label
        );

        let entry = HistoryEntry::new(
            SecretString::new(password.expose_secret().into()),
            strength.label,
        );
        self.history.append(entry);
        self.persist();

        self.last_error = None;
        Ok(self.current.insert(password))
    }

    pub fn current(&self) -> Option<&SecretString> {
        self.current.as_ref()
    }

    pub fn last_error(&self) -> Option<&GenerateError> {
        self.last_error.as_ref()
    }

    /// Scores the current password. Recomputed on every call.
    pub fn strength(&self) -> Option<StrengthResult> {
        self.current.as_ref().map(evaluate_password_strength)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn recent(&self, limit: usize) -> Vec<&HistoryEntry> {
        self.history.list(limit)
    }

    pub fn recent_default(&self) -> Vec<&HistoryEntry> {
        self.history.list(self.config.display_limit)
    }

    /// Deletes a history entry. Unknown ids are ignored.
    pub fn delete_entry(&mut self, id: &str) -> bool {
        let removed = self.history.delete(id);
        if removed {
            self.persist();
        }
        removed
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
        self.persist();
    }

    pub fn export(&self) -> String {
        self.history.export()
    }

    /// Export file name for today's local date.
    pub fn export_file_name(&self) -> String {
        export_file_name(Local::now().date_naive())
    }

    /// Copies the current password. Returns `false` if there is none or the
    /// clipboard failed.
    pub fn copy_password<C: Clipboard + ?Sized>(&self, clipboard: &C) -> bool {
        match &self.current {
            Some(password) => copy_or_log(clipboard, password.expose_secret()),
            None => false,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&self) {
        if let Err(_e) = save_history(&self.store, &self.config.storage_key, &self.history) {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to save password history: {}", _e);
        }
    }
}
