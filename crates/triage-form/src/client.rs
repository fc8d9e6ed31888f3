//! Prediction endpoint client
//!
//! Thin reqwest wrapper around the symptom-analysis backend. One POST per
//! submission, no retry, no status-code dispatch: anything that goes wrong
//! between building the request and parsing the JSON body collapses into
//! a single [`TransportError`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::fields::Field;

const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Any failure in sending or parsing the prediction exchange.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("error fetching data: {0}")]
    Exchange(#[from] reqwest::Error),

    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
}

/// Diagnosis payload returned by the backend. All keys are optional and
/// unknown shapes are tolerated; missing values render as a placeholder.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(rename = "Diagnosis", default, skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<String>,

    #[serde(rename = "Severity", default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,

    #[serde(rename = "Treatment_Plan", default, skip_serializing_if = "Option::is_none")]
    pub treatment_plan: Option<String>,
}

/// Placeholder shown for a missing response field.
pub const PLACEHOLDER: &str = "—";

impl Prediction {
    pub fn diagnosis_or_placeholder(&self) -> &str {
        self.diagnosis.as_deref().unwrap_or(PLACEHOLDER)
    }

    pub fn severity_or_placeholder(&self) -> &str {
        self.severity.as_deref().unwrap_or(PLACEHOLDER)
    }

    pub fn treatment_plan_or_placeholder(&self) -> &str {
        self.treatment_plan.as_deref().unwrap_or(PLACEHOLDER)
    }
}

/// HTTP client for the prediction backend.
pub struct PredictionClient {
    base_url: String,
    client: reqwest::Client,
}

impl PredictionClient {
    /// Build a client for the backend at `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST the ten-field map to `/predict` and parse the JSON body.
    ///
    /// The backend reports its own failures inside a 200 body, so the
    /// status code is not inspected here; a body that is not JSON at all
    /// surfaces as a transport error like any connection failure.
    pub async fn predict(
        &self,
        body: &serde_json::Map<String, Value>,
    ) -> Result<Prediction, TransportError> {
        let url = format!("{}/predict", self.base_url);
        tracing::debug!("POST {}", url);
        let response = self.client.post(&url).json(body).send().await?;
        let prediction = response.json::<Prediction>().await?;
        Ok(prediction)
    }

    /// GET `/health`; success is any 2xx status.
    pub async fn health(&self) -> Result<(), TransportError> {
        let url = format!("{}/health", self.base_url);
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status));
        }
        Ok(())
    }
}

/// Build the wire body: exactly the ten field keys, values as entered
/// (strings, possibly numeric-looking). Keys come out in form order;
/// serde_json's `preserve_order` feature keeps the map insertion-ordered.
pub(crate) fn wire_body(value_of: impl Fn(Field) -> String) -> serde_json::Map<String, Value> {
    Field::ALL
        .iter()
        .map(|field| (field.wire_name().to_string(), Value::String(value_of(*field))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let client = PredictionClient::new("http://localhost:5001/");
        assert_eq!(client.base_url(), "http://localhost:5001");
    }

    #[test]
    fn test_prediction_tolerates_unknown_and_missing_keys() {
        let raw = r#"{"error": "model exploded", "Diagnosis": "Flu"}"#;
        let prediction: Prediction = serde_json::from_str(raw).unwrap();
        assert_eq!(prediction.diagnosis.as_deref(), Some("Flu"));
        assert_eq!(prediction.severity, None);
        assert_eq!(prediction.severity_or_placeholder(), PLACEHOLDER);
    }

    #[test]
    fn test_wire_body_has_ten_keys_in_form_order() {
        let body = wire_body(|field| field.wire_name().to_lowercase());
        assert_eq!(body.len(), 10);
        // Insertion order must survive; a sorted map would put
        // Oxygen_Saturation_ ahead of the symptom fields.
        let keys: Vec<_> = body.keys().map(String::as_str).collect();
        let expected: Vec<_> = Field::ALL.iter().map(|f| f.wire_name()).collect();
        assert_eq!(keys, expected);
        assert_eq!(body["Symptom_1"], "symptom_1");
    }
}
