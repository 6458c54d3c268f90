#![cfg(feature = "logic-only")]

use gold_pricing_wasm::application::CalculatorSession;
use gold_pricing_wasm::domain::pricing::{MarginInputs, PricingService};
use quickcheck_macros::quickcheck;

fn clamp_amount(value: f64) -> f64 {
    if value.is_finite() {
        value.abs() % 1.0e6
    } else {
        1.0
    }
}

fn clamp_purity(value: f64) -> f64 {
    if value.is_finite() {
        (value.abs() % 0.99) + 0.01
    } else {
        0.75
    }
}

#[quickcheck]
fn profit_is_exactly_sale_minus_cost(
    gold: f64,
    weight: f64,
    making: f64,
    stone: f64,
    purity: f64,
) -> bool {
    let svc = PricingService::new();
    let inputs = MarginInputs {
        gold_price_18k: Some(clamp_amount(gold)),
        item_weight: Some(clamp_amount(weight)),
        making_cost: Some(clamp_amount(making)),
        stone_weight: Some(clamp_amount(stone)),
        purity: Some(clamp_purity(purity)),
    };

    let b = svc.margin(&inputs).expect("clamped inputs are always valid");
    let identity = b.profit.value() == b.sale_amount.value() - b.cost.value();
    let no_division_blowup = b.sale_amount.value() != 0.0 || b.profit_percent == 0.0;
    identity && no_division_blowup
}

#[quickcheck]
fn breakdown_row_count_is_eight_or_nine(manual: f64) -> bool {
    let svc = PricingService::new();
    let count = svc.working_purities(Some(manual)).len();
    count == 8 || count == 9
}

#[quickcheck]
fn propagation_mirrors_spot_result_until_overridden(usd: u32, ounce: u32) -> bool {
    let mut session = CalculatorSession::new();
    session.edit_spot_usd(&usd.to_string());
    session.edit_spot_ounce(&ounce.to_string());
    session.edit_spot_purity("0.75");

    session.margin.gold_price == session.spot_result_text()
}
