/// Only one failure kind exists in this system, and it is not fatal: invalid
/// form input never becomes an error, it degrades to zeroed/placeholder
/// output at the calculator boundary.
#[derive(Debug, Clone)]
pub enum AppError {
    /// Network error, non-2xx status, or malformed payload from the rate
    /// endpoint. Recovered by falling back to the last-known or default rate.
    RateFetch(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::RateFetch(msg) => write!(f, "Rate Fetch Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

pub type RateResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_display_names_the_failure() {
        let error = AppError::RateFetch("HTTP error: 503".to_string());
        assert_eq!(error.to_string(), "Rate Fetch Error: HTTP error: 503");
    }
}
