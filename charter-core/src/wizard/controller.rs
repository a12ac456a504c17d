use tracing::{debug, info, warn};

use super::gate::{blocking_reason, can_proceed};
use super::step::{Progress, WizardStep};
use super::store::BookingStore;
use crate::models::{BookingSession, CalendarMonth, SessionUpdate, YachtId};

/// Outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The wizard moved to this step.
    Moved(WizardStep),
    /// The current step's gate is closed; the wizard stayed put.
    Blocked(WizardStep),
    /// Already on the first (for back) or last (for next) step.
    AtBoundary(WizardStep),
}

impl Transition {
    pub fn moved(&self) -> bool {
        matches!(self, Self::Moved(_))
    }
}

/// Linear seven-step booking flow over a single [`BookingStore`].
///
/// The wizard is the one owner of the session. Views receive it by reference
/// and write through [`BookingWizard::update`].
#[derive(Debug, Clone, Default)]
pub struct BookingWizard {
    store: BookingStore,
    step: WizardStep,
    open: bool,
}

impl BookingWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn session(&self) -> &BookingSession {
        self.store.session()
    }

    pub fn store(&self) -> &BookingStore {
        &self.store
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn progress(&self) -> Progress {
        Progress::of(self.step)
    }

    /// Gate for the current step.
    pub fn can_proceed(&self) -> bool {
        can_proceed(self.step, self.session())
    }

    pub fn blocking_reason(&self) -> Option<&'static str> {
        blocking_reason(self.step, self.session())
    }

    /// The terminal step renders no forward control.
    pub fn shows_forward_control(&self) -> bool {
        !self.step.is_terminal()
    }

    pub fn update(
        &mut self,
        update: SessionUpdate,
    ) {
        self.store.update(update);
    }

    /// Shows the wizard. A wizard that was closed starts over from defaults.
    pub fn open(&mut self) {
        if !self.open {
            info!("booking wizard opened");
        }
        self.open = true;
    }

    /// Advances one step when the current gate allows it.
    pub fn next(&mut self) -> Transition {
        let Some(target) = self.step.next() else {
            debug!(step = %self.step, "next ignored on terminal step");
            return Transition::AtBoundary(self.step);
        };

        if !self.can_proceed() {
            warn!(step = %self.step, "next blocked by step gate");
            return Transition::Blocked(self.step);
        }

        info!(from = %self.step, to = %target, "wizard advanced");
        self.step = target;
        Transition::Moved(target)
    }

    /// Goes back one step. Never gated.
    pub fn prev(&mut self) -> Transition {
        match self.step.previous() {
            Some(target) => {
                info!(from = %self.step, to = %target, "wizard went back");
                self.step = target;
                Transition::Moved(target)
            }
            None => Transition::AtBoundary(self.step),
        }
    }

    /// Discards the session and returns to the first step.
    pub fn close(&mut self) {
        if self.open {
            info!(step = %self.step, "booking wizard closed, session discarded");
        }
        self.open = false;
        self.step = WizardStep::FIRST;
        self.store.reset();
    }

    /// Fills in the preselections a step shows when first displayed.
    ///
    /// The date step picks `default_day` of the visible month (clamped to the
    /// month length) and the boat step picks the first yacht. Existing
    /// choices are never overridden.
    pub fn apply_step_defaults(
        &mut self,
        visible_month: &CalendarMonth,
        default_day: u32,
    ) {
        match self.step {
            WizardStep::DateTime if self.session().selected_date.is_none() => {
                let day = default_day.clamp(1, visible_month.days_in_month());
                if day != default_day {
                    warn!(
                        default_day,
                        day,
                        month = %visible_month,
                        "configured default day falls outside the month, clamping"
                    );
                }
                if let Some(date) = visible_month.date(day) {
                    debug!(%date, "preselecting default charter date");
                    self.update(SessionUpdate::new().selected_date(Some(date)));
                }
            }
            WizardStep::SelectBoat if self.session().selected_boat.is_none() => {
                let first = YachtId::ALL[0];
                debug!(boat = %first, "preselecting default yacht");
                self.update(SessionUpdate::new().selected_boat(Some(first)));
            }
            _ => {}
        }
    }
}
