use std::fmt;

use serde::{Deserialize, Serialize};

/// The seven pages of the booking wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum WizardStep {
    #[default]
    DateTime,
    GuestCount,
    SelectBoat,
    AddExtras,
    ContactInfo,
    Payment,
    Confirmation,
}

impl WizardStep {
    pub const COUNT: usize = 7;

    pub const ALL: [WizardStep; Self::COUNT] = [
        Self::DateTime,
        Self::GuestCount,
        Self::SelectBoat,
        Self::AddExtras,
        Self::ContactInfo,
        Self::Payment,
        Self::Confirmation,
    ];

    pub const FIRST: WizardStep = Self::DateTime;
    pub const LAST: WizardStep = Self::Confirmation;

    /// Zero-based ordinal.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::DateTime => "Date & Time",
            Self::GuestCount => "Guest Count",
            Self::SelectBoat => "Select Boat",
            Self::AddExtras => "Add Extras",
            Self::ContactInfo => "Contact Info",
            Self::Payment => "Payment",
            Self::Confirmation => "Confirmation",
        }
    }

    /// Heading shown at the top of the step body.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::DateTime => "When would you like to go?",
            Self::GuestCount => "How many guests?",
            Self::SelectBoat => "Select Boat",
            Self::AddExtras => "Add Extras",
            Self::ContactInfo => "Contact Information",
            Self::Payment => "Payment Method",
            Self::Confirmation => "Payment Confirmed!",
        }
    }

    /// The following step, or `None` on the last one.
    pub fn next(&self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// The preceding step, or `None` on the first one.
    pub fn previous(&self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn is_terminal(&self) -> bool {
        *self == Self::LAST
    }
}

impl fmt::Display for WizardStep {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Position of the wizard for the "Step N of 7" header and progress bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// One-based position.
    pub position: usize,
    pub total: usize,
}

impl Progress {
    pub fn of(step: WizardStep) -> Self {
        Self {
            position: step.index() + 1,
            total: WizardStep::COUNT,
        }
    }

    /// Filled share of the progress bar, in `(0, 1]`.
    pub fn fraction(&self) -> f32 {
        self.position as f32 / self.total as f32
    }

    pub fn label(&self) -> String {
        format!("Step {} of {}", self.position, self.total)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ordinals_follow_declaration_order() {
        for (i, step) in WizardStep::ALL.iter().enumerate() {
            assert_eq!(step.index(), i);
            assert_eq!(WizardStep::from_index(i), Some(*step));
        }
        assert_eq!(WizardStep::from_index(7), None);
    }

    #[test]
    fn next_and_previous_are_linear() {
        assert_eq!(WizardStep::DateTime.next(), Some(WizardStep::GuestCount));
        assert_eq!(WizardStep::Payment.next(), Some(WizardStep::Confirmation));
        assert_eq!(WizardStep::Confirmation.next(), None);
        assert_eq!(WizardStep::DateTime.previous(), None);
        assert_eq!(WizardStep::GuestCount.previous(), Some(WizardStep::DateTime));
    }

    #[test]
    fn only_confirmation_is_terminal() {
        let terminal: Vec<_> = WizardStep::ALL.into_iter().filter(WizardStep::is_terminal).collect();

        assert_eq!(terminal, vec![WizardStep::Confirmation]);
    }

    #[test]
    fn titles_match_progress_header() {
        let titles: Vec<_> = WizardStep::ALL.iter().map(WizardStep::title).collect();

        assert_eq!(
            titles,
            vec![
                "Date & Time",
                "Guest Count",
                "Select Boat",
                "Add Extras",
                "Contact Info",
                "Payment",
                "Confirmation",
            ]
        );
    }

    #[test]
    fn progress_reports_one_based_position() {
        let progress = Progress::of(WizardStep::SelectBoat);

        assert_eq!(progress.label(), "Step 3 of 7");
        assert_eq!(Progress::of(WizardStep::Confirmation).fraction(), 1.0);
    }
}
