use crate::domain::pricing::value_objects::{
    Price, ProfitTone, Purity, Weight, EIGHTEEN_KARAT_FINENESS, FIXED_PURITIES,
};

/// Raw spot-conversion inputs, `None` where the field is empty or non-numeric.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpotInputs {
    pub usd_per_ounce: Option<f64>,
    pub ounce_rate: Option<f64>,
    pub purity: Option<f64>,
    pub conversion_rate: f64,
}

/// Raw single-purity margin inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarginInputs {
    pub gold_price_18k: Option<f64>,
    pub item_weight: Option<f64>,
    pub making_cost: Option<f64>,
    pub stone_weight: Option<f64>,
    pub purity: Option<f64>,
}

/// Raw breakdown inputs; the manual purity is optional by design.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreakdownInputs {
    pub gold_price_18k: Option<f64>,
    pub item_weight: Option<f64>,
    pub making_cost: Option<f64>,
    pub stone_weight: Option<f64>,
    pub manual_purity: Option<f64>,
}

/// Full margin result for a single purity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarginBreakdown {
    pub pure_weight: Weight,
    pub pure_price: Price,
    pub sale_amount: Price,
    pub cost: Price,
    pub profit: Price,
    pub profit_percent: f64,
    pub tone: ProfitTone,
}

/// One row of the purity ladder, independent of every other row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PurityRow {
    pub purity: Purity,
    pub is_manual: bool,
    pub pure_weight: Weight,
    pub sale_amount: Price,
    pub profit: Price,
    pub profit_percent: f64,
    pub tone: ProfitTone,
}

/// Domain service holding the pricing formulas. Stateless; every method is a
/// pure function over its inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PricingService;

impl PricingService {
    pub fn new() -> Self {
        Self
    }

    /// Gram price at the given purity: `(usd / ounce) * rate * purity`.
    ///
    /// Any missing input or a zero ounce rate collapses to `0.0` - invalid
    /// input is displayed as a zero result, never surfaced as an error.
    pub fn gram_price(&self, inputs: &SpotInputs) -> Price {
        match (inputs.usd_per_ounce, inputs.ounce_rate, inputs.purity) {
            (Some(usd), Some(ounce), Some(purity)) if ounce != 0.0 => {
                Price::new((usd / ounce) * inputs.conversion_rate * purity)
            }
            _ => Price::new(0.0),
        }
    }

    /// Sale/cost/profit figures for one purity. `None` when any of the five
    /// inputs is missing or the purity is zero.
    pub fn margin(&self, inputs: &MarginInputs) -> Option<MarginBreakdown> {
        let gold_price = inputs.gold_price_18k?;
        let item_weight = inputs.item_weight?;
        let making_cost = inputs.making_cost?;
        let stone_weight = inputs.stone_weight?;
        let purity = inputs.purity?;
        if purity == 0.0 {
            return None;
        }

        let pure_weight = stone_weight * purity;
        let pure_price = gold_price / EIGHTEEN_KARAT_FINENESS;
        let sale_amount = pure_weight * pure_price;
        let cost = item_weight * gold_price + making_cost;
        let profit = sale_amount - cost;
        let profit_percent = Self::profit_percent(profit, sale_amount);

        Some(MarginBreakdown {
            pure_weight: Weight::new(pure_weight),
            pure_price: Price::new(pure_price),
            sale_amount: Price::new(sale_amount),
            cost: Price::new(cost),
            profit: Price::new(profit),
            profit_percent,
            tone: ProfitTone::from_profit(profit),
        })
    }

    /// One margin row per purity in the working set. `None` when the four
    /// shared inputs are incomplete; an absent manual purity is not an error,
    /// it just narrows the set to the fixed ladder.
    pub fn purity_breakdown(&self, inputs: &BreakdownInputs) -> Option<Vec<PurityRow>> {
        let gold_price = inputs.gold_price_18k?;
        let item_weight = inputs.item_weight?;
        let making_cost = inputs.making_cost?;
        let stone_weight = inputs.stone_weight?;

        // Cost and the 24K base price do not depend on the row purity.
        let cost = item_weight * gold_price + making_cost;
        let pure_price = gold_price / EIGHTEEN_KARAT_FINENESS;
        let manual = inputs.manual_purity.map(Purity::new);

        let rows = self
            .working_purities(inputs.manual_purity)
            .into_iter()
            .map(|purity| {
                let pure_weight = stone_weight * purity.value();
                let sale_amount = pure_weight * pure_price;
                let profit = sale_amount - cost;
                PurityRow {
                    purity,
                    is_manual: manual == Some(purity),
                    pure_weight: Weight::new(pure_weight),
                    sale_amount: Price::new(sale_amount),
                    profit: Price::new(profit),
                    profit_percent: Self::profit_percent(profit, sale_amount),
                    tone: ProfitTone::from_profit_breakeven_positive(profit),
                }
            })
            .collect();

        Some(rows)
    }

    /// The fixed ladder, with a positive manual purity prepended unless it
    /// duplicates a fixed value.
    pub fn working_purities(&self, manual: Option<f64>) -> Vec<Purity> {
        let mut purities: Vec<Purity> = FIXED_PURITIES.to_vec();
        if let Some(value) = manual {
            let candidate = Purity::new(value);
            if candidate.is_positive() && !purities.contains(&candidate) {
                purities.insert(0, candidate);
            }
        }
        purities
    }

    fn profit_percent(profit: f64, sale_amount: f64) -> f64 {
        if sale_amount != 0.0 {
            (profit / sale_amount) * 100.0
        } else {
            0.0
        }
    }
}
