use crate::domain::errors::{AppError, RateResult};
use crate::domain::logging::{get_logger, LogComponent};
use gloo::net::http::Request;
use serde::Deserialize;
use std::collections::HashMap;

/// Response shape of the open.er-api.com latest-rates endpoint. Anything
/// else, or a missing quote currency, is treated as a failed fetch.
#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    rates: HashMap<String, f64>,
}

/// HTTP client for the USD conversion-rate endpoint
#[derive(Clone)]
pub struct ExchangeRateClient {
    base_url: String,
    quote: String,
}

impl Default for ExchangeRateClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ExchangeRateClient {
    pub fn new() -> Self {
        Self {
            base_url: "https://open.er-api.com".to_string(),
            quote: "AED".to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn latest_rates_url(&self) -> String {
        format!("{}/v6/latest/USD", self.base_url)
    }

    /// Fetches the current USD→quote rate. A non-2xx status, a malformed
    /// payload, or a missing/non-positive quote entry all map to
    /// `AppError::RateFetch`; the caller decides how to fall back.
    pub async fn fetch_rate(&self) -> RateResult<f64> {
        let url = self.latest_rates_url();
        get_logger().info(
            LogComponent::Infrastructure("ExchangeRateClient"),
            &format!("📡 Fetching USD/{} rate from {}", self.quote, url),
        );

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| AppError::RateFetch(format!("request failed: {e:?}")))?;

        if !response.ok() {
            return Err(AppError::RateFetch(format!(
                "HTTP error: {} - {}",
                response.status(),
                response.status_text()
            )));
        }

        let payload: LatestRatesResponse = response
            .json()
            .await
            .map_err(|e| AppError::RateFetch(format!("malformed payload: {e:?}")))?;

        let rate = Self::extract_rate(&payload, &self.quote)?;

        get_logger().info(
            LogComponent::Infrastructure("ExchangeRateClient"),
            &format!("✅ Live USD/{} rate: {:.4}", self.quote, rate),
        );

        Ok(rate)
    }

    fn extract_rate(payload: &LatestRatesResponse, quote: &str) -> RateResult<f64> {
        let rate = payload
            .rates
            .get(quote)
            .copied()
            .ok_or_else(|| AppError::RateFetch(format!("{} missing from rates payload", quote)))?;

        if rate > 0.0 {
            Ok(rate)
        } else {
            Err(AppError::RateFetch(format!(
                "non-positive {} rate in payload: {}",
                quote, rate
            )))
        }
    }
}
