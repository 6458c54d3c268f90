use derive_more::{Constructor, Deref, Display, From, Into};
use std::cmp::Ordering;
use strum::Display as StrumDisplay;

/// Fallback USD→AED peg used when the live rate has never been fetched or typed.
pub const FALLBACK_AED_RATE: f64 = 3.6725;

/// Denominator for 18-karat quotes: prices are quoted for 75%-pure metal and
/// divided by this to normalize to a 24K (pure) gram price.
pub const EIGHTEEN_KARAT_FINENESS: f64 = 0.75;

/// The purity ladder every breakdown is computed against, highest first.
pub const FIXED_PURITIES: [Purity; 8] = [
    Purity(0.75),
    Purity(0.725),
    Purity(0.70),
    Purity(0.68),
    Purity(0.675),
    Purity(0.65),
    Purity(0.60),
    Purity(0.55),
];

/// Value Object - a monetary amount in the local currency
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, Constructor)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - a mass in grams
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, Constructor)]
pub struct Weight(f64);

impl Weight {
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Value Object - fraction of pure metal by mass (0.75 = 18 karat)
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, Display, Constructor)]
#[display(fmt = "{}", _0)]
pub struct Purity(f64);

impl Purity {
    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    /// Nominal karat equivalent of this fraction.
    pub fn karat(&self) -> f64 {
        self.0 * 24.0
    }
}

/// Where the current conversion rate came from, shown next to the rate field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
pub enum RateStatus {
    #[strum(serialize = "Updating...")]
    Updating,

    #[strum(serialize = "Live")]
    Live,

    #[strum(serialize = "Offline (Est.)")]
    Offline,
}

impl RateStatus {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Updating => "status-updating",
            Self::Live => "status-live",
            Self::Offline => "status-offline",
        }
    }
}

/// Display tone for profit figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
pub enum ProfitTone {
    #[strum(serialize = "positive")]
    Positive,

    #[strum(serialize = "negative")]
    Negative,

    #[strum(serialize = "neutral")]
    Neutral,
}

impl ProfitTone {
    /// Strict tone: exactly zero stays neutral (single-purity margin view).
    pub fn from_profit(profit: f64) -> Self {
        if profit > 0.0 {
            Self::Positive
        } else if profit < 0.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    /// Breakdown rows treat break-even as a win.
    pub fn from_profit_breakeven_positive(profit: f64) -> Self {
        if profit >= 0.0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Positive => "tone-positive",
            Self::Negative => "tone-negative",
            Self::Neutral => "tone-neutral",
        }
    }
}
