use gold_pricing_wasm::application::CalculatorSession;
use gold_pricing_wasm::domain::pricing::ProfitTone;
use wasm_bindgen_test::*;

fn session_with_spot() -> CalculatorSession {
    let mut session = CalculatorSession::new();
    session.edit_spot_usd("1950");
    session.edit_spot_ounce("1950");
    session.edit_spot_purity("0.75");
    session
}

#[wasm_bindgen_test(unsupported = test)]
fn spot_record_requires_usd_and_ounce() {
    let mut session = CalculatorSession::new();
    assert!(!session.record_spot("10:15 AM".to_string()));

    session.edit_spot_usd("1950");
    assert!(!session.record_spot("10:15 AM".to_string()));

    session.edit_spot_ounce("1950");
    assert!(session.record_spot("10:15 AM".to_string()));
    assert_eq!(session.spot_history.len(), 1);
}

#[wasm_bindgen_test(unsupported = test)]
fn spot_snapshot_captures_displayed_values() {
    let mut session = session_with_spot();
    session.record_spot("10:15 AM".to_string());

    let entry = &session.spot_history.rows()[0].entry;
    assert_eq!(entry.time, "10:15 AM");
    assert_eq!(entry.usd, "1950");
    assert_eq!(entry.ounce, "1950");
    assert_eq!(entry.purity, "0.75");
    assert_eq!(entry.result, "2.7544");
}

#[wasm_bindgen_test(unsupported = test)]
fn snapshots_are_immutable_after_recording() {
    let mut session = session_with_spot();
    session.record_spot("10:15 AM".to_string());

    session.edit_spot_usd("2100");
    let entry = &session.spot_history.rows()[0].entry;
    assert_eq!(entry.usd, "1950");
    assert_eq!(entry.result, "2.7544");
}

#[wasm_bindgen_test(unsupported = test)]
fn newest_entry_comes_first() {
    let mut session = session_with_spot();
    session.record_spot("10:15 AM".to_string());
    session.edit_spot_usd("2100");
    session.record_spot("10:16 AM".to_string());

    let rows = session.spot_history.rows();
    assert_eq!(rows[0].entry.time, "10:16 AM");
    assert_eq!(rows[1].entry.time, "10:15 AM");
}

#[wasm_bindgen_test(unsupported = test)]
fn deleting_last_row_hides_the_section() {
    let mut session = session_with_spot();
    session.record_spot("10:15 AM".to_string());
    session.record_spot("10:16 AM".to_string());

    let first_id = session.spot_history.rows()[0].id;
    session.spot_history.delete(first_id);
    assert!(session.spot_history.is_visible());

    let last_id = session.spot_history.rows()[0].id;
    session.spot_history.delete(last_id);
    assert!(!session.spot_history.is_visible());
}

#[wasm_bindgen_test(unsupported = test)]
fn margin_record_requires_item_weight() {
    let mut session = CalculatorSession::new();
    assert!(!session.record_margin("11:00 AM".to_string()));

    session.edit_margin_gold_price("200");
    session.edit_margin_item_weight("5");
    session.edit_margin_making_cost("50");
    session.edit_margin_stone_weight("6");
    session.edit_margin_purity("0.75");

    assert!(session.record_margin("11:00 AM".to_string()));

    let entry = &session.margin_history.rows()[0].entry;
    assert_eq!(entry.weight, "5");
    assert_eq!(entry.sale_amount, "1,200.00");
    assert_eq!(entry.cost, "1,050.00");
    assert_eq!(entry.profit, "150.00");
    assert_eq!(entry.profit_percent, "12.50%");
    assert_eq!(entry.tone, ProfitTone::Positive);
}

#[wasm_bindgen_test(unsupported = test)]
fn the_two_logs_are_independent() {
    let mut session = session_with_spot();
    session.record_spot("10:15 AM".to_string());

    assert!(session.spot_history.is_visible());
    assert!(!session.margin_history.is_visible());
}
