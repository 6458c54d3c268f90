use gold_pricing_wasm::domain::pricing::{PricingService, SpotInputs};
use wasm_bindgen_test::*;

fn inputs(usd: f64, ounce: f64, purity: f64, rate: f64) -> SpotInputs {
    SpotInputs {
        usd_per_ounce: Some(usd),
        ounce_rate: Some(ounce),
        purity: Some(purity),
        conversion_rate: rate,
    }
}

#[wasm_bindgen_test(unsupported = test)]
fn gram_price_matches_formula() {
    let svc = PricingService::new();
    let result = svc.gram_price(&inputs(1950.0, 1950.0, 0.75, 3.6725));

    // (1950 / 1950) * 3.6725 * 0.75
    assert!((result.value() - 2.754_375).abs() < 1e-12);
}

#[wasm_bindgen_test(unsupported = test)]
fn zero_ounce_rate_collapses_to_zero() {
    let svc = PricingService::new();
    let result = svc.gram_price(&inputs(1950.0, 0.0, 0.75, 3.6725));
    assert_eq!(result.value(), 0.0);
}

#[wasm_bindgen_test(unsupported = test)]
fn missing_input_collapses_to_zero() {
    let svc = PricingService::new();
    let mut incomplete = inputs(1950.0, 1900.0, 0.75, 3.6725);
    incomplete.purity = None;

    assert_eq!(svc.gram_price(&incomplete).value(), 0.0);
}

#[wasm_bindgen_test(unsupported = test)]
fn gram_price_scales_linearly_with_rate() {
    let svc = PricingService::new();
    let base = svc.gram_price(&inputs(2000.0, 1900.0, 0.75, 3.6725)).value();
    let doubled = svc.gram_price(&inputs(2000.0, 1900.0, 0.75, 7.345)).value();

    assert!((doubled - base * 2.0).abs() < 1e-9);
}
