//! OfferDeck - Interactive Offer Presentation
//!
//! OfferDeck is a desktop presentation of the Marketparts service offers. It shows one
//! content section at a time behind a tab bar, computes the ROI worked example from its
//! inputs, and includes a drafting helper that asks an external text-generation service
//! to write customer notices about delayed parts.
//!
//! # Architecture Overview
//!
//! - **UI Layer** ([`app::dashui`]): egui-based window, header, tab bars and draft form
//! - **Navigation** ([`app::sections`]): the offer/section router and its invariants
//! - **Content** ([`app::content`], [`app::roi`]): static blocks and the ROI model
//! - **Drafting** ([`app::draft`]): prompt assembly, submission state machine and the
//!   text-generation client behind the [`app::draft::TextGenerator`] seam
//! - **Configuration** ([`app::config`]): TOML file plus environment, read at start-up
//!
//! The main application entry point is [`DeckApp`].

#![warn(clippy::all, rust_2018_idioms)]

// Include logging macros first
#[macro_use]
pub mod logging_macros;

pub mod app;
pub use app::DeckApp;
