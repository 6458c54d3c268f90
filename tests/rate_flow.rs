use gold_pricing_wasm::application::CalculatorSession;
use gold_pricing_wasm::domain::errors::AppError;
use gold_pricing_wasm::domain::pricing::{RateStatus, FALLBACK_AED_RATE};
use wasm_bindgen_test::*;

fn fetch_error() -> AppError {
    AppError::RateFetch("HTTP error: 503".to_string())
}

#[wasm_bindgen_test(unsupported = test)]
fn successful_fetch_goes_live_and_propagates() {
    let mut session = CalculatorSession::new();
    session.edit_spot_usd("1950");
    session.edit_spot_ounce("1950");
    session.edit_spot_purity("0.75");

    session.refresh_started();
    assert_eq!(session.rate_status, RateStatus::Updating);

    session.apply_rate_fetch(Ok(4.0));

    assert_eq!(session.rate_status, RateStatus::Live);
    assert_eq!(session.conversion_rate, 4.0);
    assert_eq!(session.rate_field, "4.0000");
    assert_eq!(session.spot_result_text(), "3.0000");
    assert_eq!(session.margin.gold_price, "3.0000");
}

#[wasm_bindgen_test(unsupported = test)]
fn failure_with_no_prior_rate_falls_back() {
    let mut session = CalculatorSession::new();
    assert!(session.rate_field.is_empty());

    session.apply_rate_fetch(Err(fetch_error()));

    assert_eq!(session.rate_status, RateStatus::Offline);
    assert_eq!(session.conversion_rate, FALLBACK_AED_RATE);
    assert_eq!(session.rate_field, "3.6725");
}

#[wasm_bindgen_test(unsupported = test)]
fn failure_keeps_typed_rate_intact() {
    let mut session = CalculatorSession::new();
    session.edit_rate("9.9");

    session.apply_rate_fetch(Err(fetch_error()));

    assert_eq!(session.conversion_rate, 9.9);
    assert_eq!(session.rate_field, "9.9");
    assert_eq!(session.rate_status, RateStatus::Offline);
}

#[wasm_bindgen_test(unsupported = test)]
fn failure_recomputes_without_propagating() {
    let mut session = CalculatorSession::new();
    session.edit_spot_usd("1950");
    session.edit_spot_ounce("1950");
    session.edit_spot_purity("0.75");

    // Plant a sentinel the propagator would overwrite if it ran.
    session.margin.gold_price = "sentinel".to_string();
    session.breakdown.gold_price = "sentinel".to_string();

    session.apply_rate_fetch(Err(fetch_error()));
    assert_eq!(session.margin.gold_price, "sentinel");
    assert_eq!(session.breakdown.gold_price, "sentinel");

    session.apply_rate_fetch(Ok(4.0));
    assert_eq!(session.margin.gold_price, "3.0000");
}

#[wasm_bindgen_test(unsupported = test)]
fn manual_edit_wins_until_next_refresh() {
    let mut session = CalculatorSession::new();
    session.apply_rate_fetch(Ok(3.68));
    session.edit_rate("5.5");
    assert_eq!(session.conversion_rate, 5.5);

    // A failed refresh re-reads whatever is typed in the field.
    session.apply_rate_fetch(Err(fetch_error()));
    assert_eq!(session.conversion_rate, 5.5);

    // Only an explicit successful refresh overwrites it.
    session.apply_rate_fetch(Ok(3.69));
    assert_eq!(session.conversion_rate, 3.69);
    assert_eq!(session.rate_field, "3.6900");
}

#[wasm_bindgen_test(unsupported = test)]
fn last_resolved_outcome_wins() {
    let mut session = CalculatorSession::new();

    // Two overlapping refreshes resolving out of order.
    session.refresh_started();
    session.refresh_started();
    session.apply_rate_fetch(Ok(3.70));
    session.apply_rate_fetch(Err(fetch_error()));

    assert_eq!(session.rate_status, RateStatus::Offline);
    // The fetched value stays; failure never blanks a known rate.
    assert_eq!(session.conversion_rate, 3.70);
}
