use std::collections::HashMap;

use fractic_server_error::ServerError;

use crate::errors::InvalidFxPayload;

/// Rate-endpoint response shape: `{ "rates": { "COP": 4000.0, ... } }`, all
/// rates relative to USD. Host datasource implementations deserialize the raw
/// body into this model and pull out the one rate they need.
#[derive(Debug, serde_derive::Deserialize)]
pub struct FxPayloadModel {
    pub rates: HashMap<String, f64>,
}

impl FxPayloadModel {
    pub fn from_json(body: &str) -> Result<Self, ServerError> {
        serde_json::from_str(body).map_err(|e| InvalidFxPayload::with_debug("malformed body", &e))
    }

    /// Rate for one ISO code, case-insensitive.
    pub fn rate_for(&self, code: &str) -> Option<f64> {
        let wanted = code.trim().to_uppercase();
        self.rates
            .iter()
            .find(|(k, _)| k.to_uppercase() == wanted)
            .map(|(_, v)| *v)
            .filter(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_rate_case_insensitively() {
        let payload = FxPayloadModel::from_json(r#"{ "rates": { "COP": 4000.0, "EUR": 0.9 } }"#)
            .unwrap();
        assert_eq!(payload.rate_for("cop"), Some(4000.0));
        assert_eq!(payload.rate_for("JPY"), None);
    }

    #[test]
    fn malformed_body_is_an_error() {
        assert!(FxPayloadModel::from_json("not json").is_err());
    }
}
