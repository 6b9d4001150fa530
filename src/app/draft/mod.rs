//! Customer-notice drafting helper
//!
//! Three free-text fields are turned into one prompt, sent to a text-generation
//! service through the [`TextGenerator`] seam, and the outcome is tracked by
//! [`DraftGenerator`] as a [`DraftResult`].

pub mod client;
pub mod error;
pub mod generator;
pub mod prompt;
pub mod schema;

pub use client::{GeminiClient, TextGenerator};
pub use error::{DraftError, DraftErrorKind};
pub use generator::{Clipboard, ClipboardError, DraftGenerator, DraftResult};
pub use prompt::{DraftField, DraftForm};
