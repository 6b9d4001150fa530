//! Application modules
//!
//! - [`sections`] / [`content`]: which block of the deck is visible and what it says
//! - [`draft`]: the customer-notice drafting helper
//! - [`roi`]: the ROI worked example
//! - [`dashui`]: the egui front end

pub mod config;
pub mod content;
pub mod dashui;
pub mod draft;
pub mod notifications;
pub mod roi;
pub mod sections;
pub mod state;

pub use dashui::DeckApp;
