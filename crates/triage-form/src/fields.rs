//! Field catalog
//!
//! The ten patient fields, their wire names, option lists, and the
//! per-field validation rules. All of this is fixed configuration: the
//! server expects exactly these JSON keys, trailing underscore included.

/// Symptom options offered for the three symptom fields. `None` is the
/// sentinel for "no further symptom".
pub const SYMPTOMS: &[&str] = &[
    "Fever",
    "Cough",
    "Fatigue",
    "Headache",
    "Body ache",
    "Shortness of breath",
    "Sore throat",
    "Runny nose",
    "None",
];

/// Gender options.
pub const GENDERS: &[&str] = &["Male", "Female", "Other"];

/// A patient form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Age,
    Gender,
    Symptom1,
    Symptom2,
    Symptom3,
    HeartRate,
    BodyTemperature,
    OxygenSaturation,
    Systolic,
    Diastolic,
}

/// Validation rule for a single field.
///
/// `required` carries the message shown when the field is empty; `None`
/// means the field is optional and never validated. `minimum` carries the
/// lower bound and the message shown when a numeric value falls below it.
#[derive(Clone, Copy, Debug)]
pub struct FieldRule {
    pub required: Option<&'static str>,
    pub minimum: Option<(f64, &'static str)>,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 10] = [
        Field::Age,
        Field::Gender,
        Field::Symptom1,
        Field::Symptom2,
        Field::Symptom3,
        Field::HeartRate,
        Field::BodyTemperature,
        Field::OxygenSaturation,
        Field::Systolic,
        Field::Diastolic,
    ];

    /// JSON key the prediction endpoint expects for this field.
    pub fn wire_name(self) -> &'static str {
        match self {
            Field::Age => "Age",
            Field::Gender => "Gender",
            Field::Symptom1 => "Symptom_1",
            Field::Symptom2 => "Symptom_2",
            Field::Symptom3 => "Symptom_3",
            Field::HeartRate => "Heart_Rate_bpm",
            Field::BodyTemperature => "Body_Temperature_C",
            // The trailing underscore is part of the server's contract.
            Field::OxygenSaturation => "Oxygen_Saturation_",
            Field::Systolic => "Systolic",
            Field::Diastolic => "Diastolic",
        }
    }

    /// Human label used in error messages and listings.
    pub fn label(self) -> &'static str {
        match self {
            Field::Age => "Age",
            Field::Gender => "Gender",
            Field::Symptom1 => "Primary symptom",
            Field::Symptom2 => "Secondary symptom",
            Field::Symptom3 => "Tertiary symptom",
            Field::HeartRate => "Heart rate",
            Field::BodyTemperature => "Body temperature",
            Field::OxygenSaturation => "Oxygen level",
            Field::Systolic => "Systolic",
            Field::Diastolic => "Diastolic",
        }
    }

    /// Validation rule for this field. No cross-field rules exist; in
    /// particular Systolic is never checked against Diastolic.
    pub fn rule(self) -> FieldRule {
        match self {
            Field::Age => FieldRule {
                required: Some("Age is required"),
                minimum: Some((0.0, "Age must be 0 or more")),
            },
            Field::Gender => FieldRule {
                required: Some("Gender is required"),
                minimum: None,
            },
            Field::Symptom1 => FieldRule {
                required: Some("Primary symptom is required"),
                minimum: None,
            },
            Field::Symptom2 | Field::Symptom3 => FieldRule {
                required: None,
                minimum: None,
            },
            Field::HeartRate => FieldRule {
                required: Some("Heart rate is required"),
                minimum: Some((30.0, "Minimum 30 bpm")),
            },
            Field::BodyTemperature => FieldRule {
                required: Some("Body temperature is required"),
                minimum: Some((10.0, "Minimum 10°C")),
            },
            Field::OxygenSaturation => FieldRule {
                required: Some("Oxygen level is required"),
                minimum: Some((80.0, "Minimum 80%")),
            },
            Field::Systolic => FieldRule {
                required: Some("Systolic is required"),
                minimum: Some((50.0, "Minimum 50 mmHg")),
            },
            Field::Diastolic => FieldRule {
                required: Some("Diastolic is required"),
                minimum: Some((40.0, "Minimum 40 mmHg")),
            },
        }
    }

    /// Option list for choice fields, if any.
    pub fn options(self) -> Option<&'static [&'static str]> {
        match self {
            Field::Gender => Some(GENDERS),
            Field::Symptom1 | Field::Symptom2 | Field::Symptom3 => Some(SYMPTOMS),
            _ => None,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}
