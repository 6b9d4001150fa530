//! Draft form fields and the fixed prompt template

#![warn(clippy::all, rust_2018_idioms)]

pub const DEFAULT_PART: &str = "an unspecified part";
pub const DEFAULT_DELAY: &str = "unspecified";
pub const DEFAULT_SOLUTION: &str = "We are working to resolve this as quickly as possible.";

pub const OPENING_LINE: &str = "Dear Valued Customer,";
pub const CLOSING_LINE: &str = "Thank you for your understanding. Sincerely, Your Marketparts Team.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    PartDescription,
    Delay,
    ProposedSolution,
}

impl DraftField {
    pub const ALL: [DraftField; 3] = [
        DraftField::PartDescription,
        DraftField::Delay,
        DraftField::ProposedSolution,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DraftField::PartDescription => "Part (reference or description)",
            DraftField::Delay => "Expected delay",
            DraftField::ProposedSolution => "Proposed solution",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            DraftField::PartDescription => "e.g. Brake Pad ABC-123",
            DraftField::Delay => "e.g. 2-3 business days",
            DraftField::ProposedSolution => "e.g. Priority re-stock arranged",
        }
    }

    /// Phrase used in the prompt when the field is left blank
    pub fn default_phrase(self) -> &'static str {
        match self {
            DraftField::PartDescription => DEFAULT_PART,
            DraftField::Delay => DEFAULT_DELAY,
            DraftField::ProposedSolution => DEFAULT_SOLUTION,
        }
    }
}

/// Raw user input, stored exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftForm {
    pub part_description: String,
    pub delay: String,
    pub proposed_solution: String,
}

impl DraftForm {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::PartDescription => &self.part_description,
            DraftField::Delay => &self.delay,
            DraftField::ProposedSolution => &self.proposed_solution,
        }
    }

    pub fn get_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::PartDescription => &mut self.part_description,
            DraftField::Delay => &mut self.delay,
            DraftField::ProposedSolution => &mut self.proposed_solution,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    /// The value that goes into the prompt: the raw text, or the default phrase
    /// when nothing but whitespace was entered.
    pub fn prompt_value(&self, field: DraftField) -> &str {
        let value = self.get(field);
        if value.trim().is_empty() {
            field.default_phrase()
        } else {
            value
        }
    }

    pub fn build_prompt(&self) -> String {
        format!(
            "Write a short, professional and empathetic message to a customer about a delayed spare part.\n\
             Part concerned: {part}\n\
             Expected delay: {delay}\n\
             Proposed solution: {solution}\n\
             The message must start with \"{opening}\" and end with \"{closing}\"",
            part = self.prompt_value(DraftField::PartDescription),
            delay = self.prompt_value(DraftField::Delay),
            solution = self.prompt_value(DraftField::ProposedSolution),
            opening = OPENING_LINE,
            closing = CLOSING_LINE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_stores_value_verbatim() {
        let mut form = DraftForm::default();
        form.set(DraftField::Delay, "  two weeks \n");
        assert_eq!(form.delay, "  two weeks \n");
    }

    #[test]
    fn test_prompt_contains_fixed_lines() {
        let prompt = DraftForm::default().build_prompt();
        assert!(prompt.contains(OPENING_LINE));
        assert!(prompt.contains(CLOSING_LINE));
    }

    #[test]
    fn test_whitespace_only_field_uses_default() {
        let mut form = DraftForm::default();
        form.set(DraftField::PartDescription, "   ");
        assert_eq!(form.prompt_value(DraftField::PartDescription), DEFAULT_PART);
    }

    #[test]
    fn test_template_has_no_default_words_of_its_own() {
        let mut form = DraftForm::default();
        form.set(DraftField::PartDescription, "X");
        form.set(DraftField::Delay, "Y");
        form.set(DraftField::ProposedSolution, "Z");
        assert!(!form.build_prompt().contains("unspecified"));
    }
}
