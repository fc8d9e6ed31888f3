//! Patient triage form client
//!
//! Client-side session for the symptom-analysis service: a fixed set of
//! ten patient fields, per-field validation with touched-state tracking,
//! and a single POST of the field map to the `/predict` endpoint.
//!
//! ## Usage
//!
//! ```no_run
//! use triage_form::{Field, FormSession, PredictionClient, Submit};
//!
//! # async fn run() {
//! let client = PredictionClient::new("http://localhost:5001");
//! let mut session = FormSession::new();
//! session.update_field(Field::Age, "30");
//! session.update_field(Field::Gender, "Male");
//! session.update_field(Field::Symptom1, "Fever");
//! // ... remaining vitals ...
//! match session.submit(&client).await {
//!     Submit::Completed => println!("{:?}", session.outcome()),
//!     Submit::Rejected => {
//!         for (field, error) in session.visible_errors() {
//!             eprintln!("{}: {}", field.wire_name(), error);
//!         }
//!     }
//!     Submit::InFlight => {}
//! }
//! # }
//! ```

pub mod client;
pub mod error;
pub mod fields;
pub mod session;
pub mod validation;

pub use client::{PredictionClient, Prediction, TransportError};
pub use error::{Result, TriageError};
pub use fields::{Field, FieldRule, GENDERS, SYMPTOMS};
pub use session::{FormSession, Outcome, Submit};
pub use validation::{validate, FieldError};
