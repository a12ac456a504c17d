use tracing::debug;

use crate::models::{BookingSession, SessionUpdate};

/// Owner of the booking session.
///
/// All writes go through [`BookingStore::update`], which merges a partial
/// session into the current one. Every write bumps the revision counter.
#[derive(Debug, Clone, Default)]
pub struct BookingStore {
    session: BookingSession,
    revision: u64,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &BookingSession {
        &self.session
    }

    /// Bumped by every update and reset.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces the provided top-level fields. Nested values are replaced
    /// whole; no validation happens here.
    pub fn update(
        &mut self,
        update: SessionUpdate,
    ) {
        debug!(?update, revision = self.revision + 1, "applying session update");
        self.session.apply(update);
        self.revision += 1;
    }

    /// Discards every selection.
    pub fn reset(&mut self) {
        self.session = BookingSession::default();
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::{ExtraId, GuestCount, PaymentMethod};

    #[test]
    fn update_bumps_revision() {
        let mut store = BookingStore::new();

        store.update(SessionUpdate::new().guest_count(GuestCount::from_raw(2)));
        store.update(SessionUpdate::new());

        assert_eq!(store.revision(), 2);
        assert_eq!(store.session().guest_count.raw(), 2);
    }

    #[test]
    fn read_merge_write_of_extras_keeps_earlier_toggles() {
        let mut store = BookingStore::new();

        let extras = store.session().extras.with(ExtraId::ChampagneService, true);
        store.update(SessionUpdate::new().extras(extras));
        let extras = store.session().extras.with(ExtraId::PrivateChef, true);
        store.update(SessionUpdate::new().extras(extras));

        let selected: Vec<_> = store.session().extras.selected().collect();
        assert_eq!(selected, vec![ExtraId::ChampagneService, ExtraId::PrivateChef]);
        assert_eq!(store.session().extras.len(), 5);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut store = BookingStore::new();
        store.update(SessionUpdate::new().payment_method(Some(PaymentMethod::CashApp)));

        store.reset();

        assert_eq!(store.session(), &BookingSession::default());
    }
}
