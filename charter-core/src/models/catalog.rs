//! Read-only reference data: the yachts, extras and payment methods a
//! booking selects from.
//!
//! Every catalog is a closed enumeration. Sessions store the identifier and
//! resolve the full record here, so a session can never reference a yacht or
//! extra that is not part of the catalog.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when parsing a catalog identifier or label.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown yacht '{0}'")]
    UnknownYacht(String),

    #[error("unknown extra '{0}'")]
    UnknownExtra(String),

    #[error("unknown payment method '{0}'")]
    UnknownPaymentMethod(String),
}

/// Whole currency units as a [`Decimal`], usable in `static` items.
const fn usd(amount: u32) -> Decimal {
    Decimal::from_parts(amount, 0, 0, false, 0)
}

// =============================================================================
// Yachts
// =============================================================================

/// A charter yacht.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Yacht {
    pub id: YachtId,
    pub name: &'static str,
    pub size: &'static str,
    /// Price per charter.
    pub price: Decimal,
    pub description: &'static str,
    /// Gallery images; the first one is the default display image.
    pub images: &'static [&'static str],
}

impl Yacht {
    /// The image shown before the user browses the gallery.
    pub fn cover_image(&self) -> &'static str {
        self.images.first().copied().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum YachtId {
    Serenity,
    AzureSpirit,
    WaveDancer,
}

impl YachtId {
    pub const ALL: [YachtId; 3] = [Self::Serenity, Self::AzureSpirit, Self::WaveDancer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Serenity => "serenity",
            Self::AzureSpirit => "azure-spirit",
            Self::WaveDancer => "wave-dancer",
        }
    }

    /// Resolves the identifier to its catalog record.
    pub fn yacht(&self) -> &'static Yacht {
        match self {
            Self::Serenity => &YACHTS[0],
            Self::AzureSpirit => &YACHTS[1],
            Self::WaveDancer => &YACHTS[2],
        }
    }
}

impl FromStr for YachtId {
    type Err = CatalogError;

    /// Accepts either the identifier (`wave-dancer`) or the display name
    /// (`Wave Dancer`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s || id.yacht().name == s)
            .ok_or_else(|| CatalogError::UnknownYacht(s.to_string()))
    }
}

impl fmt::Display for YachtId {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.yacht().name)
    }
}

static YACHTS: [Yacht; 3] = [
    Yacht {
        id: YachtId::Serenity,
        name: "The Serenity",
        size: "36 ft",
        price: usd(500),
        description: "Perfect for intimate gatherings with elegant interior",
        images: &[
            "https://images.unsplash.com/photo-1569263979104-865ab7cd8d13?fit=max&fm=jpg&q=80&w=1080",
            "https://images.unsplash.com/photo-1697207340462-c9eac5047014?fit=max&fm=jpg&q=80&w=1080",
            "https://images.unsplash.com/photo-1651902387099-787f4a62a3e3?fit=max&fm=jpg&q=80&w=1080",
        ],
    },
    Yacht {
        id: YachtId::AzureSpirit,
        name: "Azure Spirit",
        size: "45 ft",
        price: usd(950),
        description: "Spacious deck with modern amenities and style",
        images: &[
            "https://images.unsplash.com/photo-1630840754024-8e3817c5e623?fit=max&fm=jpg&q=80&w=1080",
            "https://images.unsplash.com/photo-1759165913870-1c6c0d889171?fit=max&fm=jpg&q=80&w=1080",
            "https://images.unsplash.com/photo-1744352029006-5c075b0a7572?fit=max&fm=jpg&q=80&w=1080",
        ],
    },
    Yacht {
        id: YachtId::WaveDancer,
        name: "Wave Dancer",
        size: "52 ft",
        price: usd(1200),
        description: "Luxury yacht with premium facilities and comfort",
        images: &[
            "https://images.unsplash.com/photo-1666710108359-a4d09ef5e22f?fit=max&fm=jpg&q=80&w=1080",
            "https://images.unsplash.com/photo-1728973702874-a1ecdbaffc16?fit=max&fm=jpg&q=80&w=1080",
            "https://images.unsplash.com/photo-1571456803038-80efbf5c9d6b?fit=max&fm=jpg&q=80&w=1080",
        ],
    },
];

/// All yachts in display order.
pub fn yachts() -> &'static [Yacht] {
    &YACHTS
}

// =============================================================================
// Extras
// =============================================================================

/// An optional add-on service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extra {
    pub id: ExtraId,
    /// Display name, also used as the selection key.
    pub name: &'static str,
    pub price: Decimal,
    pub description: &'static str,
    /// Unit shown next to the price (`$150/hour`). Informational only; totals
    /// always add the flat price.
    pub price_unit: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExtraId {
    ChampagneService,
    SnorkelingGear,
    PrivateChef,
    JetSkiRental,
    OnboardMasseuse,
}

impl ExtraId {
    pub const COUNT: usize = 5;

    pub const ALL: [ExtraId; Self::COUNT] = [
        Self::ChampagneService,
        Self::SnorkelingGear,
        Self::PrivateChef,
        Self::JetSkiRental,
        Self::OnboardMasseuse,
    ];

    /// Position of this extra in catalog order.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn extra(&self) -> &'static Extra {
        &EXTRAS[self.index()]
    }

    pub fn name(&self) -> &'static str {
        self.extra().name
    }

    pub fn price(&self) -> Decimal {
        self.extra().price
    }
}

impl FromStr for ExtraId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.name() == s)
            .ok_or_else(|| CatalogError::UnknownExtra(s.to_string()))
    }
}

impl fmt::Display for ExtraId {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.name())
    }
}

static EXTRAS: [Extra; ExtraId::COUNT] = [
    Extra {
        id: ExtraId::ChampagneService,
        name: "Champagne Service",
        price: usd(100),
        description: "Premium champagne service throughout your charter",
        price_unit: None,
    },
    Extra {
        id: ExtraId::SnorkelingGear,
        name: "Snorkeling Gear",
        price: usd(50),
        description: "Professional snorkeling equipment for all guests",
        price_unit: None,
    },
    Extra {
        id: ExtraId::PrivateChef,
        name: "Private Chef",
        price: usd(300),
        description: "Personal chef to prepare gourmet meals onboard",
        price_unit: None,
    },
    Extra {
        id: ExtraId::JetSkiRental,
        name: "Jet Ski Rental",
        price: usd(150),
        description: "High-performance jet ski rental per hour",
        price_unit: Some("hour"),
    },
    Extra {
        id: ExtraId::OnboardMasseuse,
        name: "On-board Masseuse",
        price: usd(250),
        description: "Professional massage therapy during your trip",
        price_unit: None,
    },
];

/// All extras in display order.
pub fn extras() -> &'static [Extra] {
    &EXTRAS
}

// =============================================================================
// Payment methods
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Zelle,
    Venmo,
    CashApp,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [Self::Card, Self::Zelle, Self::Venmo, Self::CashApp];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Zelle => "zelle",
            Self::Venmo => "venmo",
            Self::CashApp => "cashapp",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Card => "Credit/Debit Card",
            Self::Zelle => "Zelle",
            Self::Venmo => "Venmo",
            Self::CashApp => "Cash App",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Card => "Pay securely with your credit or debit card",
            Self::Zelle => "Quick bank-to-bank transfer",
            Self::Venmo => "Pay with your Venmo account",
            Self::CashApp => "Send payment via Cash App",
        }
    }

    /// Shown with a "Most Popular" badge.
    pub fn is_popular(&self) -> bool {
        matches!(self, Self::Card)
    }
}

impl FromStr for PaymentMethod {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.id() == s)
            .ok_or_else(|| CatalogError::UnknownPaymentMethod(s.to_string()))
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn yacht_ids_resolve_to_matching_records() {
        for id in YachtId::ALL {
            assert_eq!(id.yacht().id, id);
        }
        assert_eq!(yachts().len(), 3);
    }

    #[test]
    fn yacht_prices_match_catalog() {
        assert_eq!(YachtId::Serenity.yacht().price, dec!(500));
        assert_eq!(YachtId::AzureSpirit.yacht().price, dec!(950));
        assert_eq!(YachtId::WaveDancer.yacht().price, dec!(1200));
    }

    #[test]
    fn every_yacht_has_a_cover_image() {
        for yacht in yachts() {
            assert!(!yacht.images.is_empty());
            assert_eq!(yacht.cover_image(), yacht.images[0]);
        }
    }

    #[test]
    fn yacht_id_parses_from_id_or_name() {
        assert_eq!("azure-spirit".parse::<YachtId>(), Ok(YachtId::AzureSpirit));
        assert_eq!("The Serenity".parse::<YachtId>(), Ok(YachtId::Serenity));
        assert_eq!(
            "Black Pearl".parse::<YachtId>(),
            Err(CatalogError::UnknownYacht("Black Pearl".to_string()))
        );
    }

    #[test]
    fn extra_index_matches_catalog_position() {
        for (position, extra) in extras().iter().enumerate() {
            assert_eq!(extra.id.index(), position);
        }
    }

    #[test]
    fn extra_prices_match_fixed_table() {
        assert_eq!(ExtraId::ChampagneService.price(), dec!(100));
        assert_eq!(ExtraId::SnorkelingGear.price(), dec!(50));
        assert_eq!(ExtraId::PrivateChef.price(), dec!(300));
        assert_eq!(ExtraId::JetSkiRental.price(), dec!(150));
        assert_eq!(ExtraId::OnboardMasseuse.price(), dec!(250));
    }

    #[test]
    fn only_jet_ski_has_a_price_unit() {
        let with_unit: Vec<_> = extras()
            .iter()
            .filter(|e| e.price_unit.is_some())
            .map(|e| e.id)
            .collect();

        assert_eq!(with_unit, vec![ExtraId::JetSkiRental]);
    }

    #[test]
    fn extra_parses_from_name() {
        assert_eq!("On-board Masseuse".parse::<ExtraId>(), Ok(ExtraId::OnboardMasseuse));
        assert!("Helicopter".parse::<ExtraId>().is_err());
    }

    #[test]
    fn payment_method_round_trips_through_id() {
        for method in PaymentMethod::ALL {
            assert_eq!(method.id().parse::<PaymentMethod>(), Ok(method));
        }
        assert_eq!(
            "bitcoin".parse::<PaymentMethod>(),
            Err(CatalogError::UnknownPaymentMethod("bitcoin".to_string()))
        );
    }

    #[test]
    fn card_is_the_only_popular_method() {
        let popular: Vec<_> = PaymentMethod::ALL
            .into_iter()
            .filter(PaymentMethod::is_popular)
            .collect();

        assert_eq!(popular, vec![PaymentMethod::Card]);
    }
}
