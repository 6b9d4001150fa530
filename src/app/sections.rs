//! Offer and section navigation
//!
//! The deck shows exactly one content block at a time. [`ViewRouter`] owns the
//! active offer and the active section of the manufacturers offer; the UI only
//! produces values of the closed [`Section`] and [`Offer`] enums, so there is no
//! invalid-id path at runtime.

#![warn(clippy::all, rust_2018_idioms)]

use crate::log_debug;
use std::fmt;

/// Sections of the manufacturers offer, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Challenge,
    Solution,
    Benefits,
    Expectations,
    Pricing,
    Roi,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Challenge,
        Section::Solution,
        Section::Benefits,
        Section::Expectations,
        Section::Pricing,
        Section::Roi,
    ];

    /// Stable identifier used in logs
    pub fn id(self) -> &'static str {
        match self {
            Section::Challenge => "challenge",
            Section::Solution => "solution",
            Section::Benefits => "benefits",
            Section::Expectations => "expectations",
            Section::Pricing => "pricing",
            Section::Roi => "roi",
        }
    }

    /// Label shown on the navigation tab
    pub fn title(self) -> &'static str {
        match self {
            Section::Challenge => "The Challenge",
            Section::Solution => "Our Solution",
            Section::Benefits => "Your Benefits",
            Section::Expectations => "Your Role",
            Section::Pricing => "Pricing",
            Section::Roi => "ROI",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Top-level offers shown in the global header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Offer {
    #[default]
    Manufacturers,
    DataManagement,
}

impl Offer {
    pub const ALL: [Offer; 2] = [Offer::Manufacturers, Offer::DataManagement];

    pub fn id(self) -> &'static str {
        match self {
            Offer::Manufacturers => "manufacturers",
            Offer::DataManagement => "data_management",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Offer::Manufacturers => "Offer 1: Manufacturers",
            Offer::DataManagement => "Offer 2: Data Management",
        }
    }

    /// Whether this offer has its own section tab bar
    pub fn has_sections(self) -> bool {
        matches!(self, Offer::Manufacturers)
    }
}

impl fmt::Display for Offer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// What the central panel should currently draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Section(Section),
    DataManagement,
}

/// Holds the active offer and section for one UI session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewRouter {
    active_offer: Offer,
    active_section: Section,
}

impl ViewRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, section: Section) {
        if self.active_section != section {
            log_debug!("Section changed: {} -> {}", self.active_section, section);
        }
        self.active_section = section;
    }

    pub fn active_section(&self) -> Section {
        self.active_section
    }

    /// Switch offers. Coming back to the manufacturers offer starts again from
    /// the first section.
    pub fn select_offer(&mut self, offer: Offer) {
        if self.active_offer == offer {
            return;
        }
        log_debug!("Offer changed: {} -> {}", self.active_offer, offer);
        self.active_offer = offer;
        if offer == Offer::Manufacturers {
            self.active_section = Section::default();
        }
    }

    pub fn active_offer(&self) -> Offer {
        self.active_offer
    }

    pub fn current_view(&self) -> View {
        match self.active_offer {
            Offer::Manufacturers => View::Section(self.active_section),
            Offer::DataManagement => View::DataManagement,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_router_starts_on_challenge() {
        let router = ViewRouter::new();
        assert_eq!(router.active_section(), Section::Challenge);
        assert_eq!(router.active_offer(), Offer::Manufacturers);
    }

    #[test]
    fn test_select_every_section() {
        let mut router = ViewRouter::new();
        for section in Section::ALL {
            router.select(section);
            assert_eq!(router.active_section(), section);
            assert_eq!(router.current_view(), View::Section(section));
        }
    }

    #[test]
    fn test_select_same_section_twice_is_noop() {
        let mut router = ViewRouter::new();
        router.select(Section::Pricing);
        let before = router.clone();
        router.select(Section::Pricing);
        assert_eq!(router, before);
    }

    #[test]
    fn test_returning_to_manufacturers_resets_section() {
        let mut router = ViewRouter::new();
        router.select(Section::Roi);
        router.select_offer(Offer::DataManagement);
        assert_eq!(router.current_view(), View::DataManagement);

        router.select_offer(Offer::Manufacturers);
        assert_eq!(router.active_section(), Section::Challenge);
    }

    #[test]
    fn test_reselecting_active_offer_keeps_section() {
        let mut router = ViewRouter::new();
        router.select(Section::Benefits);
        router.select_offer(Offer::Manufacturers);
        assert_eq!(router.active_section(), Section::Benefits);
    }

    #[test]
    fn test_section_ids_are_unique() {
        let mut ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Section::ALL.len());
    }
}
