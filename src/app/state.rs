//! Session state owned by the root window

use super::draft::{DraftGenerator, TextGenerator};
use super::roi::{RoiBreakdown, RoiInputs};
use super::sections::ViewRouter;
use std::sync::Arc;

#[derive(Debug)]
pub struct DeckState {
    pub router: ViewRouter,
    pub drafts: DraftGenerator,
    pub roi_inputs: RoiInputs,
}

impl DeckState {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            router: ViewRouter::new(),
            drafts: DraftGenerator::new(generator),
            roi_inputs: RoiInputs::default(),
        }
    }

    pub fn roi(&self) -> RoiBreakdown {
        RoiBreakdown::compute(&self.roi_inputs)
    }
}
