pub mod formatting;
pub mod history;
pub mod services;
pub mod value_objects;

pub use history::{HistoryLog, HistoryRow};
pub use services::{
    BreakdownInputs, MarginBreakdown, MarginInputs, PricingService, PurityRow, SpotInputs,
};
pub use value_objects::{
    Price, ProfitTone, Purity, RateStatus, Weight, EIGHTEEN_KARAT_FINENESS, FALLBACK_AED_RATE,
    FIXED_PURITIES,
};
