//! Output formatting

use clap::ValueEnum;
use colored::Colorize;

use triage_form::{Field, FieldError, Outcome};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn print_outcome(&self, outcome: &Outcome) {
        match self {
            OutputFormat::Json => println!("{}", render_json(outcome)),
            OutputFormat::Text => print!("{}", render_text(outcome)),
        }
    }
}

pub fn render_text(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Prediction(p) => format!(
            "{}       {}\n{}        {}\n{}  {}\n",
            "Diagnosis:".bold(),
            p.diagnosis_or_placeholder(),
            "Severity:".bold(),
            p.severity_or_placeholder(),
            "Treatment plan:".bold(),
            p.treatment_plan_or_placeholder(),
        ),
        Outcome::Failed => format!("{}\n", "Error fetching data".red()),
    }
}

pub fn render_json(outcome: &Outcome) -> String {
    let value = match outcome {
        Outcome::Prediction(p) => serde_json::json!({
            "Diagnosis": p.diagnosis_or_placeholder(),
            "Severity": p.severity_or_placeholder(),
            "Treatment_Plan": p.treatment_plan_or_placeholder(),
        }),
        Outcome::Failed => serde_json::json!({ "error": "Error fetching data" }),
    };
    serde_json::to_string_pretty(&value).unwrap_or_default()
}

/// Print validation failures in form order, red, one per line.
pub fn print_errors(errors: &[(Field, &FieldError)]) {
    eprintln!("{}", "Submission blocked by validation:".red().bold());
    for (field, error) in errors {
        eprintln!("  {}: {}", field.wire_name(), error.to_string().red());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_form::Prediction;

    #[test]
    fn test_missing_response_fields_render_placeholder() {
        colored::control::set_override(false);
        let outcome = Outcome::Prediction(Prediction {
            diagnosis: Some("Healthy".into()),
            severity: None,
            treatment_plan: Some("No treatment needed".into()),
        });
        let text = render_text(&outcome);
        assert!(text.contains("Healthy"));
        assert!(text.contains("—"));
        assert!(text.contains("No treatment needed"));
    }

    #[test]
    fn test_failed_outcome_renders_generic_error() {
        colored::control::set_override(false);
        assert_eq!(render_text(&Outcome::Failed), "Error fetching data\n");
        let json = render_json(&Outcome::Failed);
        assert!(json.contains("Error fetching data"));
    }
}
