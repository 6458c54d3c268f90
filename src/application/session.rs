use crate::domain::errors::AppError;
use crate::domain::logging::{get_logger, LogComponent};
use crate::domain::pricing::formatting::{format_amount, format_percent, format_rate, format_weight};
use crate::domain::pricing::{
    BreakdownInputs, HistoryLog, MarginInputs, Price, PricingService, ProfitTone, RateStatus,
    SpotInputs, FALLBACK_AED_RATE,
};

/// Raw text of the three spot-conversion fields, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpotFields {
    pub usd: String,
    pub ounce: String,
    pub purity: String,
}

/// Raw text of the single-purity margin fields. `gold_price` is the linked
/// field the propagator writes into until the user overrides it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarginFields {
    pub gold_price: String,
    pub item_weight: String,
    pub making_cost: String,
    pub stone_weight: String,
    pub purity: String,
}

/// Raw text of the purity-breakdown fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BreakdownFields {
    pub gold_price: String,
    pub item_weight: String,
    pub making_cost: String,
    pub stone_weight: String,
    pub manual_purity: String,
}

/// Render model for the margin panel: formatted output strings plus the tone
/// the profit figures are colored with.
#[derive(Debug, Clone, PartialEq)]
pub struct MarginView {
    pub pure_price: String,
    pub pure_weight: String,
    pub sale_amount: String,
    pub cost: String,
    pub profit: String,
    pub profit_percent: String,
    pub tone: ProfitTone,
}

impl MarginView {
    fn zeroed() -> Self {
        Self {
            pure_price: "0.00".to_string(),
            pure_weight: "0.000".to_string(),
            sale_amount: "0.00".to_string(),
            cost: "0.00".to_string(),
            profit: "0.00".to_string(),
            profit_percent: "0.00%".to_string(),
            tone: ProfitTone::Neutral,
        }
    }
}

/// Render model for one purity-ladder row.
#[derive(Debug, Clone, PartialEq)]
pub struct PurityRowView {
    pub purity: String,
    /// Marks the user-supplied purity that is not part of the fixed ladder.
    pub is_manual_extra: bool,
    pub pure_weight: String,
    pub profit_percent: String,
    pub tone: ProfitTone,
}

/// Snapshot of the spot panel at record time. Inputs keep their raw text,
/// the result keeps its displayed 4-decimal form.
#[derive(Debug, Clone, PartialEq)]
pub struct SpotHistoryEntry {
    pub time: String,
    pub usd: String,
    pub ounce: String,
    pub purity: String,
    pub rate: String,
    pub result: String,
}

/// Snapshot of the margin panel at record time.
#[derive(Debug, Clone, PartialEq)]
pub struct MarginHistoryEntry {
    pub time: String,
    pub weight: String,
    pub purity: String,
    pub sale_amount: String,
    pub cost: String,
    pub profit: String,
    pub profit_percent: String,
    pub tone: ProfitTone,
}

/// Session-scoped calculator state. All mutation flows through the methods
/// below; the presentation layer is a thin adapter over them.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorSession {
    /// Raw text of the conversion-rate field.
    pub rate_field: String,
    /// Parsed USD→AED rate currently in effect.
    pub conversion_rate: f64,
    pub rate_status: RateStatus,

    pub spot: SpotFields,
    /// Last spot result, cached for the price-link propagator.
    pub last_gram_price: Price,

    pub margin: MarginFields,
    pub breakdown: BreakdownFields,
    /// Once true the linked price field stops accepting automatic updates.
    /// Set on direct user input, never cleared for the session.
    pub margin_price_overridden: bool,
    pub breakdown_price_overridden: bool,

    pub spot_history: HistoryLog<SpotHistoryEntry>,
    pub margin_history: HistoryLog<MarginHistoryEntry>,

    service: PricingService,
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorSession {
    pub fn new() -> Self {
        Self {
            rate_field: String::new(),
            conversion_rate: FALLBACK_AED_RATE,
            rate_status: RateStatus::Updating,
            spot: SpotFields::default(),
            last_gram_price: Price::new(0.0),
            margin: MarginFields::default(),
            breakdown: BreakdownFields::default(),
            margin_price_overridden: false,
            breakdown_price_overridden: false,
            spot_history: HistoryLog::new(),
            margin_history: HistoryLog::new(),
            service: PricingService::new(),
        }
    }

    // --- Rate provider -----------------------------------------------------

    /// Marks the status line while a fetch is outstanding. Concurrent
    /// refreshes are independent; whichever outcome lands last wins.
    pub fn refresh_started(&mut self) {
        self.rate_status = RateStatus::Updating;
    }

    /// Applies a fetch outcome. Success overwrites the rate and propagates;
    /// failure falls back to the last-known or default rate and recomputes
    /// the spot result only.
    pub fn apply_rate_fetch(&mut self, outcome: Result<f64, AppError>) {
        match outcome {
            Ok(rate) => {
                self.conversion_rate = rate;
                self.rate_field = format_rate(rate);
                self.rate_status = RateStatus::Live;
                self.recompute_spot();
                self.propagate_gram_price();
            }
            Err(error) => {
                get_logger().warn(
                    LogComponent::Application("RateProvider"),
                    &format!("rate fetch failed, staying on estimate: {}", error),
                );
                self.rate_status = RateStatus::Offline;
                if self.rate_field.trim().is_empty() {
                    self.rate_field = format_rate(FALLBACK_AED_RATE);
                }
                if let Some(rate) = parse_field(&self.rate_field) {
                    self.conversion_rate = rate;
                }
                self.recompute_spot();
            }
        }
    }

    /// Manual edit of the rate field wins over anything fetched earlier and
    /// is only ever overwritten by an explicit refresh.
    pub fn edit_rate(&mut self, raw: &str) {
        self.rate_field = raw.to_string();
        if let Some(rate) = parse_field(raw) {
            self.conversion_rate = rate;
            self.recompute_spot();
            self.propagate_gram_price();
        }
    }

    // --- Spot panel (category 1) -------------------------------------------

    pub fn edit_spot_usd(&mut self, raw: &str) {
        self.spot.usd = raw.to_string();
        self.after_spot_edit();
    }

    pub fn edit_spot_ounce(&mut self, raw: &str) {
        self.spot.ounce = raw.to_string();
        self.after_spot_edit();
    }

    pub fn edit_spot_purity(&mut self, raw: &str) {
        self.spot.purity = raw.to_string();
        self.after_spot_edit();
    }

    fn after_spot_edit(&mut self) {
        self.recompute_spot();
        self.propagate_gram_price();
    }

    fn recompute_spot(&mut self) {
        let inputs = SpotInputs {
            usd_per_ounce: parse_field(&self.spot.usd),
            ounce_rate: parse_field(&self.spot.ounce),
            purity: parse_field(&self.spot.purity),
            conversion_rate: self.conversion_rate,
        };
        self.last_gram_price = self.service.gram_price(&inputs);
    }

    /// Displayed spot result, fixed 4-decimal form.
    pub fn spot_result_text(&self) -> String {
        format_rate(self.last_gram_price.value())
    }

    // --- Price link propagator ---------------------------------------------

    /// Pushes the cached spot result into each dependent gold-price field
    /// whose override flag is still false.
    fn propagate_gram_price(&mut self) {
        let price = format_rate(self.last_gram_price.value());
        if !self.margin_price_overridden {
            self.margin.gold_price = price.clone();
        }
        if !self.breakdown_price_overridden {
            self.breakdown.gold_price = price;
        }
    }

    // --- Margin panel (category 2) -----------------------------------------

    /// Direct input into the linked field freezes it for the session.
    pub fn edit_margin_gold_price(&mut self, raw: &str) {
        self.margin.gold_price = raw.to_string();
        self.margin_price_overridden = true;
    }

    pub fn edit_margin_item_weight(&mut self, raw: &str) {
        self.margin.item_weight = raw.to_string();
    }

    pub fn edit_margin_making_cost(&mut self, raw: &str) {
        self.margin.making_cost = raw.to_string();
    }

    pub fn edit_margin_stone_weight(&mut self, raw: &str) {
        self.margin.stone_weight = raw.to_string();
    }

    pub fn edit_margin_purity(&mut self, raw: &str) {
        self.margin.purity = raw.to_string();
    }

    /// Margin outputs are derived on every read, so each keystroke sees a
    /// fresh computation.
    pub fn margin_view(&self) -> MarginView {
        let inputs = MarginInputs {
            gold_price_18k: parse_field(&self.margin.gold_price),
            item_weight: parse_field(&self.margin.item_weight),
            making_cost: parse_field(&self.margin.making_cost),
            stone_weight: parse_field(&self.margin.stone_weight),
            purity: parse_field(&self.margin.purity),
        };

        match self.service.margin(&inputs) {
            Some(breakdown) => MarginView {
                pure_price: format_amount(breakdown.pure_price.value()),
                pure_weight: format_weight(breakdown.pure_weight.value()),
                sale_amount: format_amount(breakdown.sale_amount.value()),
                cost: format_amount(breakdown.cost.value()),
                profit: format_amount(breakdown.profit.value()),
                profit_percent: format_percent(breakdown.profit_percent),
                tone: breakdown.tone,
            },
            None => MarginView::zeroed(),
        }
    }

    // --- Breakdown panel (category 3) --------------------------------------

    pub fn edit_breakdown_gold_price(&mut self, raw: &str) {
        self.breakdown.gold_price = raw.to_string();
        self.breakdown_price_overridden = true;
    }

    pub fn edit_breakdown_item_weight(&mut self, raw: &str) {
        self.breakdown.item_weight = raw.to_string();
    }

    pub fn edit_breakdown_making_cost(&mut self, raw: &str) {
        self.breakdown.making_cost = raw.to_string();
    }

    pub fn edit_breakdown_stone_weight(&mut self, raw: &str) {
        self.breakdown.stone_weight = raw.to_string();
    }

    pub fn edit_breakdown_manual_purity(&mut self, raw: &str) {
        self.breakdown.manual_purity = raw.to_string();
    }

    /// Whole ladder rebuilt from scratch; `None` renders the placeholder.
    pub fn breakdown_view(&self) -> Option<Vec<PurityRowView>> {
        let inputs = BreakdownInputs {
            gold_price_18k: parse_field(&self.breakdown.gold_price),
            item_weight: parse_field(&self.breakdown.item_weight),
            making_cost: parse_field(&self.breakdown.making_cost),
            stone_weight: parse_field(&self.breakdown.stone_weight),
            manual_purity: parse_field(&self.breakdown.manual_purity),
        };

        let rows = self.service.purity_breakdown(&inputs)?;
        let fixed = crate::domain::pricing::FIXED_PURITIES;
        Some(
            rows.into_iter()
                .map(|row| PurityRowView {
                    purity: row.purity.to_string(),
                    is_manual_extra: row.is_manual && !fixed.contains(&row.purity),
                    pure_weight: format_weight(row.pure_weight.value()),
                    profit_percent: format_percent(row.profit_percent),
                    tone: row.tone,
                })
                .collect(),
        )
    }

    // --- History recorder --------------------------------------------------

    /// Records the spot panel. Requires non-empty USD and ounce fields;
    /// returns whether a row was added.
    pub fn record_spot(&mut self, clock_label: String) -> bool {
        if self.spot.usd.trim().is_empty() || self.spot.ounce.trim().is_empty() {
            return false;
        }
        let entry = SpotHistoryEntry {
            time: clock_label,
            usd: self.spot.usd.clone(),
            ounce: self.spot.ounce.clone(),
            purity: self.spot.purity.clone(),
            rate: self.rate_field.clone(),
            result: self.spot_result_text(),
        };
        self.spot_history.record(entry);
        true
    }

    /// Records the margin panel. Requires a non-empty item weight.
    pub fn record_margin(&mut self, clock_label: String) -> bool {
        if self.margin.item_weight.trim().is_empty() {
            return false;
        }
        let view = self.margin_view();
        let entry = MarginHistoryEntry {
            time: clock_label,
            weight: self.margin.item_weight.clone(),
            purity: self.margin.purity.clone(),
            sale_amount: view.sale_amount,
            cost: view.cost,
            profit: view.profit,
            profit_percent: view.profit_percent,
            tone: view.tone,
        };
        self.margin_history.record(entry);
        true
    }
}

/// Strict numeric parse of a form field: empty or non-numeric text is absent.
fn parse_field(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}
