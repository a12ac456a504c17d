//! Charter price derivation.
//!
//! Totals are always recomputed from the session; nothing here is cached.
//!
//! | Item | Price |
//! |------|-------|
//! | Boat | catalog price of the selected yacht, or 0 |
//! | Extras | sum of the flat catalog price of every selected extra |
//! | Total | boat + extras |
//!
//! The per-hour unit on Jet Ski Rental is a display label only; the flat
//! price is added once regardless of charter length.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use charter_core::calculations::pricing::grand_total;
//! use charter_core::{BookingSession, ExtraId, ExtraSelections, SessionUpdate, YachtId};
//!
//! let mut session = BookingSession::default();
//! session.apply(
//!     SessionUpdate::new()
//!         .selected_boat(Some(YachtId::Serenity))
//!         .extras(
//!             ExtraSelections::default()
//!                 .with(ExtraId::ChampagneService, true)
//!                 .with(ExtraId::SnorkelingGear, true),
//!         ),
//! );
//!
//! assert_eq!(grand_total(&session), dec!(650));
//! ```

use rust_decimal::Decimal;
use serde::Serialize;

use crate::calculations::common::format_currency;
use crate::models::{BookingSession, Extra, ExtraId, ExtraSelections};

/// Sum of the prices of every selected extra.
pub fn extras_total(extras: &ExtraSelections) -> Decimal {
    extras.selected().map(|id| id.price()).sum()
}

/// Boat price (or zero with no boat) plus the extras subtotal.
pub fn grand_total(session: &BookingSession) -> Decimal {
    let boat = session.boat().map_or(Decimal::ZERO, |yacht| yacht.price);
    boat + extras_total(&session.extras)
}

/// Price label for an extra: `$100`, or `$150/hour` when it carries a unit.
pub fn extra_price_label(extra: &Extra) -> String {
    match extra.price_unit {
        Some(unit) => format!("{}/{unit}", format_currency(extra.price)),
        None => format_currency(extra.price),
    }
}

/// One row of an [`OrderSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderLine {
    pub label: String,
    pub amount: Decimal,
}

/// Itemised price breakdown shown on the payment and confirmation steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    /// `<yacht name> (<duration>)` with the yacht price, when a boat is chosen.
    pub boat: Option<OrderLine>,
    /// Selected extras in catalog order.
    pub extras: Vec<OrderLine>,
    pub extras_total: Decimal,
    pub total: Decimal,
}

impl OrderSummary {
    pub fn for_session(session: &BookingSession) -> Self {
        let boat = session.boat().map(|yacht| OrderLine {
            label: format!("{} ({})", yacht.name, session.duration),
            amount: yacht.price,
        });

        let extras = session
            .extras
            .selected()
            .map(|id: ExtraId| OrderLine {
                label: id.name().to_string(),
                amount: id.price(),
            })
            .collect();

        Self {
            boat,
            extras,
            extras_total: extras_total(&session.extras),
            total: grand_total(session),
        }
    }

    /// All rows, boat first.
    pub fn lines(&self) -> impl Iterator<Item = &OrderLine> {
        self.boat.iter().chain(self.extras.iter())
    }
}
