use gold_pricing_wasm::domain::pricing::{MarginInputs, PricingService, ProfitTone};
use wasm_bindgen_test::*;

fn inputs(gold: f64, weight: f64, making: f64, stone: f64, purity: f64) -> MarginInputs {
    MarginInputs {
        gold_price_18k: Some(gold),
        item_weight: Some(weight),
        making_cost: Some(making),
        stone_weight: Some(stone),
        purity: Some(purity),
    }
}

#[wasm_bindgen_test(unsupported = test)]
fn margin_reference_example() {
    let svc = PricingService::new();
    let b = svc.margin(&inputs(200.0, 5.0, 50.0, 6.0, 0.75)).unwrap();

    assert!((b.pure_weight.value() - 4.5).abs() < 1e-12);
    assert!((b.pure_price.value() - 266.666_666_666_666_67).abs() < 1e-9);
    assert!((b.sale_amount.value() - 1200.0).abs() < 1e-9);
    assert!((b.cost.value() - 1050.0).abs() < 1e-12);
    assert!((b.profit.value() - 150.0).abs() < 1e-9);
    assert!((b.profit_percent - 12.5).abs() < 1e-9);
    assert_eq!(b.tone, ProfitTone::Positive);
}

#[wasm_bindgen_test(unsupported = test)]
fn zero_purity_is_invalid() {
    let svc = PricingService::new();
    assert!(svc.margin(&inputs(200.0, 5.0, 50.0, 6.0, 0.0)).is_none());
}

#[wasm_bindgen_test(unsupported = test)]
fn missing_field_is_invalid() {
    let svc = PricingService::new();
    let mut incomplete = inputs(200.0, 5.0, 50.0, 6.0, 0.75);
    incomplete.making_cost = None;
    assert!(svc.margin(&incomplete).is_none());
}

#[wasm_bindgen_test(unsupported = test)]
fn profit_identity_holds() {
    let svc = PricingService::new();
    let b = svc.margin(&inputs(187.3, 4.2, 35.0, 5.1, 0.68)).unwrap();
    assert_eq!(b.profit.value(), b.sale_amount.value() - b.cost.value());
}

#[wasm_bindgen_test(unsupported = test)]
fn zero_sale_amount_never_divides() {
    let svc = PricingService::new();
    // Zero stone weight zeroes the sale amount while cost stays positive.
    let b = svc.margin(&inputs(200.0, 5.0, 50.0, 0.0, 0.75)).unwrap();

    assert_eq!(b.sale_amount.value(), 0.0);
    assert_eq!(b.profit_percent, 0.0);
    assert_eq!(b.tone, ProfitTone::Negative);
}

#[wasm_bindgen_test(unsupported = test)]
fn loss_gets_negative_tone() {
    let svc = PricingService::new();
    // High making cost pushes the item underwater.
    let b = svc.margin(&inputs(200.0, 5.0, 500.0, 6.0, 0.75)).unwrap();

    assert!(b.profit.value() < 0.0);
    assert_eq!(b.tone, ProfitTone::Negative);
}
