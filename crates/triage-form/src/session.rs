//! Form session controller
//!
//! Owns one submission's worth of state: raw values, validation errors,
//! touched flags, and the last outcome. Errors exist only while a field
//! fails; visibility is gated by the touched flag so an untouched form
//! never shows errors. The outcome is replaced wholesale by each completed
//! submission attempt and is never merged with prior state.

use std::collections::HashMap;

use crate::client::{wire_body, PredictionClient, Prediction};
use crate::fields::Field;
use crate::validation::{validate, FieldError};

/// Result of the last completed submission attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Parsed response from the prediction endpoint.
    Prediction(Prediction),
    /// The exchange failed somewhere; the detail is deliberately not kept.
    Failed,
}

/// What a call to [`FormSession::submit`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Submit {
    /// Validation failed; errors are surfaced and nothing hit the wire.
    Rejected,
    /// A request went out and the outcome was replaced.
    Completed,
    /// A previous submission is still in flight; nothing changed.
    InFlight,
}

/// One patient form session.
pub struct FormSession {
    values: HashMap<Field, String>,
    errors: HashMap<Field, FieldError>,
    touched: HashMap<Field, bool>,
    outcome: Option<Outcome>,
    in_flight: bool,
}

impl FormSession {
    /// Fresh session: every field empty, untouched, no errors, no outcome.
    pub fn new() -> Self {
        Self {
            values: Field::ALL.iter().map(|f| (*f, String::new())).collect(),
            errors: HashMap::new(),
            touched: Field::ALL.iter().map(|f| (*f, false)).collect(),
            outcome: None,
            in_flight: false,
        }
    }

    /// Current raw value of a field.
    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Set a field's raw value. If the field was already touched it is
    /// revalidated immediately; other fields are untouched in every sense.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
        if self.is_touched(field) {
            self.revalidate(field);
        }
    }

    /// Mark a field touched and revalidate it. Idempotent: touching the
    /// same unchanged value twice yields identical error state.
    pub fn touch_field(&mut self, field: Field) {
        self.touched.insert(field, true);
        self.revalidate(field);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.get(&field).copied().unwrap_or(false)
    }

    /// Current error for a field, whether or not it is visible yet.
    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Errors gated by touched state, in form order. A field that has
    /// never been touched shows nothing regardless of validity.
    pub fn visible_errors(&self) -> Vec<(Field, &FieldError)> {
        Field::ALL
            .iter()
            .filter(|f| self.is_touched(**f))
            .filter_map(|f| self.errors.get(f).map(|e| (*f, e)))
            .collect()
    }

    /// Last completed submission outcome, if any.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Submit the form.
    ///
    /// Refused while a previous request is in flight. Otherwise every
    /// field is marked touched and validated; any failure rejects the
    /// submission locally with no network call and leaves the previous
    /// outcome in place. A clean form issues exactly one POST and replaces
    /// the outcome with the parsed response, or with [`Outcome::Failed`]
    /// on any transport problem. This method itself never errors.
    pub async fn submit(&mut self, client: &PredictionClient) -> Submit {
        if self.in_flight {
            tracing::debug!("Submission refused: request already in flight");
            return Submit::InFlight;
        }

        for field in Field::ALL {
            self.touched.insert(field, true);
            self.revalidate(field);
        }
        if !self.errors.is_empty() {
            tracing::debug!("Submission rejected: {} field error(s)", self.errors.len());
            return Submit::Rejected;
        }

        let body = wire_body(|field| self.value(field).to_string());

        self.in_flight = true;
        let result = client.predict(&body).await;
        self.in_flight = false;

        self.outcome = Some(match result {
            Ok(prediction) => {
                tracing::info!("Prediction received");
                Outcome::Prediction(prediction)
            }
            Err(e) => {
                tracing::warn!("Prediction request failed: {}", e);
                Outcome::Failed
            }
        });
        Submit::Completed
    }

    /// Back to a blank form.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn revalidate(&mut self, field: Field) {
        match validate(field, self.value(field)) {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(e) => {
                self.errors.insert(field, e);
            }
        }
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldError;

    fn filled() -> FormSession {
        let mut session = FormSession::new();
        session.update_field(Field::Age, "30");
        session.update_field(Field::Gender, "Male");
        session.update_field(Field::Symptom1, "Fever");
        session.update_field(Field::HeartRate, "72");
        session.update_field(Field::BodyTemperature, "37");
        session.update_field(Field::OxygenSaturation, "98");
        session.update_field(Field::Systolic, "120");
        session.update_field(Field::Diastolic, "80");
        session
    }

    #[test]
    fn test_new_session_is_blank() {
        let session = FormSession::new();
        for field in Field::ALL {
            assert_eq!(session.value(field), "");
            assert!(!session.is_touched(field));
            assert!(session.error(field).is_none());
        }
        assert!(session.outcome().is_none());
    }

    #[test]
    fn test_update_before_touch_computes_no_error() {
        let mut session = FormSession::new();
        session.update_field(Field::HeartRate, "20");
        assert!(session.error(Field::HeartRate).is_none());
        assert!(session.visible_errors().is_empty());
    }

    #[test]
    fn test_touch_surfaces_error_and_correction_clears_it() {
        let mut session = FormSession::new();
        session.update_field(Field::HeartRate, "20");
        session.touch_field(Field::HeartRate);
        assert_eq!(
            session.error(Field::HeartRate),
            Some(&FieldError::BelowMinimum("Minimum 30 bpm"))
        );

        // Already touched, so an update revalidates immediately.
        session.update_field(Field::HeartRate, "72");
        assert!(session.error(Field::HeartRate).is_none());
        assert!(session.visible_errors().is_empty());
    }

    #[test]
    fn test_touch_is_idempotent() {
        let mut session = FormSession::new();
        session.touch_field(Field::Gender);
        let first: Vec<_> = session
            .visible_errors()
            .into_iter()
            .map(|(f, e)| (f, e.clone()))
            .collect();
        session.touch_field(Field::Gender);
        let second: Vec<_> = session
            .visible_errors()
            .into_iter()
            .map(|(f, e)| (f, e.clone()))
            .collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
    }

    #[test]
    fn test_untouched_field_error_stays_invisible() {
        let mut session = FormSession::new();
        session.touch_field(Field::Age);
        // Age is empty and touched; Gender is empty but untouched.
        let visible: Vec<_> = session.visible_errors().iter().map(|(f, _)| *f).collect();
        assert_eq!(visible, vec![Field::Age]);
    }

    #[test]
    fn test_rejected_submit_touches_everything_and_skips_network() {
        // Endpoint that cannot be reached; a rejected submit must not try.
        let client = PredictionClient::new("http://127.0.0.1:1");
        let mut session = FormSession::new();
        let status = tokio_test::block_on(session.submit(&client));
        assert_eq!(status, Submit::Rejected);
        for field in Field::ALL {
            assert!(session.is_touched(field));
        }
        // All eight required fields fail; the two optional symptoms do not.
        assert_eq!(session.visible_errors().len(), 8);
        // Previous outcome (none) is left in place.
        assert!(session.outcome().is_none());
    }

    #[test]
    fn test_single_bad_field_is_the_only_error() {
        let client = PredictionClient::new("http://127.0.0.1:1");
        let mut session = filled();
        session.update_field(Field::HeartRate, "20");
        let status = tokio_test::block_on(session.submit(&client));
        assert_eq!(status, Submit::Rejected);
        let errors = session.visible_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, Field::HeartRate);
        assert_eq!(errors[0].1, &FieldError::BelowMinimum("Minimum 30 bpm"));
    }

    #[test]
    fn test_submit_refused_while_in_flight() {
        let client = PredictionClient::new("http://127.0.0.1:1");
        let mut session = filled();
        session.in_flight = true;
        let status = tokio_test::block_on(session.submit(&client));
        assert_eq!(status, Submit::InFlight);
        // Refusal leaves state alone: nothing was touched.
        assert!(!session.is_touched(Field::Age));
    }

    #[test]
    fn test_reset_returns_to_blank() {
        let mut session = filled();
        session.touch_field(Field::Age);
        session.reset();
        assert_eq!(session.value(Field::Age), "");
        assert!(!session.is_touched(Field::Age));
        assert!(session.visible_errors().is_empty());
    }
}
