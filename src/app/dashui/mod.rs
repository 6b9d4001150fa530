//! Desktop user interface for the deck.
//!
//! The root [`app::DeckApp`] owns the [`DeckState`](crate::app::state::DeckState)
//! and draws it each frame:
//!
//! - a top bar with the offer selector and the theme menu
//! - the section tabs of the active offer
//! - the single visible content block ([`content_view`])
//! - the drafting helper window ([`draft_window`])
//! - toasts and a status bar
//!
//! Nothing here holds business rules; every click is forwarded to the state
//! object and the next frame reflects the result.

pub mod app;
pub mod content_view;
pub mod draft_window;
pub mod menu;

pub use app::{DeckApp, ThemeChoice};
pub use draft_window::{DraftWindow, EguiClipboard};
