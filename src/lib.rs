//! Password generation library
//!
//! Generates random passwords from selectable character classes, scores
//! them with a heuristic strength table and entropy estimate, and keeps a
//! bounded history that can be persisted and exported.
//!
//! # Features
//!
//! - `async` (default): debounced evaluation with cancellation support and
//!   non-blocking clipboard copies
//! - `tracing`: Enables logging via tracing crate
//!
//! # Randomness
//!
//! [`generate_password`] uses `rand::thread_rng()`. Any `rand::Rng` can be
//! passed to [`generate`]; use a cryptographically secure one wherever the
//! passwords protect something real.
//!
//! # Example
//!
//! ```rust
//! use pwd_generator::{GenerationOptions, evaluate_password_strength, generate_password};
//!
//! let options = GenerationOptions::new(16);
//! let password = generate_password(&options).expect("valid options");
//!
//! let evaluation = evaluate_password_strength(&password);
//! println!("Score: {}/12", evaluation.score.value());
//! println!("Strength: {}", evaluation.label);
//! ```
//!
//! A [`Session`] ties generation, scoring and history together:
//!
//! ```rust
//! use pwd_generator::{MemoryStore, Session, SessionConfig};
//!
//! let mut session = Session::open(MemoryStore::new(), SessionConfig::default())
//!     .expect("Failed to open session");
//! session.generate().expect("default options are valid");
//! assert_eq!(session.history().len(), 1);
//! ```

mod charset;
mod clipboard;
mod evaluator;
mod generator;
mod history;
mod sections;
mod session;
mod store;
mod types;

// Public API
pub use charset::{CharClass, ClassPresence};
pub use clipboard::{Clipboard, ClipboardError, FallbackClipboard, MemoryClipboard, copy_or_log};
pub use evaluator::{estimate_entropy, evaluate_password_strength};
pub use generator::{GenerateError, GenerationOptions, LengthPolicy, generate, generate_password};
pub use history::{HISTORY_CAPACITY, History, HistoryEntry, export_file_name};
pub use session::{Session, SessionConfig};
pub use store::{
    FileStore, HISTORY_KEY, KeyValueStore, MemoryStore, StoreError, decode_history,
    encode_history, load_history, save_history,
};
pub use types::{MAX_SCORE, StrengthLabel, StrengthResult, StrengthScore};

#[cfg(feature = "async")]
pub use clipboard::copy_text_detached;

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_strength_tx;
