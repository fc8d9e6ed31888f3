//! Triage CLI
//!
//! Command-line client for the symptom-analysis prediction service.
//!
//! # Usage
//!
//! ```bash
//! triage submit --age 30 --gender Male --symptom-1 Fever \
//!     --heart-rate 72 --body-temperature 37 --oxygen-saturation 98 \
//!     --systolic 120 --diastolic 80
//! triage fields
//! triage health
//! triage config set api_url http://localhost:5001
//! ```

use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use triage_form::{Field, FormSession, PredictionClient, Submit, TriageError};

mod config;
mod output;

use config::Config;

#[derive(Parser)]
#[command(name = "triage")]
#[command(version = "0.1.0")]
#[command(about = "Patient vitals client for the triage prediction service", long_about = None)]
struct Cli {
    /// Prediction API base URL
    #[arg(long, env = "TRIAGE_API_URL")]
    api_url: Option<String>,

    /// Output format
    #[arg(long, short, default_value = "text")]
    format: output::OutputFormat,

    /// Profile name from config file
    #[arg(long, short)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit patient vitals and symptoms for analysis
    Submit(SubmitArgs),
    /// List form fields, constraints, and option lists
    Fields,
    /// Check that the prediction API is reachable
    Health,
    /// Configure CLI
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// One flag per form field. Flags left out stay empty, so the session's
/// own validation reports what is missing instead of clap.
#[derive(Args)]
struct SubmitArgs {
    /// Patient age in years
    #[arg(long, default_value = "")]
    age: String,

    /// Gender (Male, Female, Other)
    #[arg(long, default_value = "")]
    gender: String,

    /// Primary symptom
    #[arg(long = "symptom-1", default_value = "")]
    symptom_1: String,

    /// Secondary symptom (optional)
    #[arg(long = "symptom-2", default_value = "")]
    symptom_2: String,

    /// Tertiary symptom (optional)
    #[arg(long = "symptom-3", default_value = "")]
    symptom_3: String,

    /// Heart rate in bpm
    #[arg(long = "heart-rate", default_value = "")]
    heart_rate: String,

    /// Body temperature in °C
    #[arg(long = "body-temperature", default_value = "")]
    body_temperature: String,

    /// Oxygen saturation in %
    #[arg(long = "oxygen-saturation", default_value = "")]
    oxygen_saturation: String,

    /// Systolic blood pressure in mmHg
    #[arg(long, default_value = "")]
    systolic: String,

    /// Diastolic blood pressure in mmHg
    #[arg(long, default_value = "")]
    diastolic: String,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Set configuration value
    Set { key: String, value: String },
    /// Get configuration value
    Get { key: String },
    /// List all configuration
    List,
    /// Initialize configuration
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let file_config = Config::load(cli.profile.as_deref()).unwrap_or_default();
    let api_url = cli
        .api_url
        .or(file_config.api_url)
        .unwrap_or_else(|| config::DEFAULT_API_URL.to_string());

    let result = match cli.command {
        Commands::Submit(args) => submit(args, &api_url, cli.format).await,
        Commands::Fields => {
            print_fields();
            Ok(())
        }
        Commands::Health => health(&api_url).await,
        Commands::Config { action } => handle_config(action),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn submit(
    args: SubmitArgs,
    api_url: &str,
    format: output::OutputFormat,
) -> Result<(), TriageError> {
    let client = PredictionClient::new(api_url);
    let mut session = FormSession::new();
    session.update_field(Field::Age, args.age);
    session.update_field(Field::Gender, args.gender);
    session.update_field(Field::Symptom1, args.symptom_1);
    session.update_field(Field::Symptom2, args.symptom_2);
    session.update_field(Field::Symptom3, args.symptom_3);
    session.update_field(Field::HeartRate, args.heart_rate);
    session.update_field(Field::BodyTemperature, args.body_temperature);
    session.update_field(Field::OxygenSaturation, args.oxygen_saturation);
    session.update_field(Field::Systolic, args.systolic);
    session.update_field(Field::Diastolic, args.diastolic);

    match session.submit(&client).await {
        Submit::Rejected => {
            output::print_errors(&session.visible_errors());
            std::process::exit(1);
        }
        Submit::InFlight => {}
        Submit::Completed => {
            if let Some(outcome) = session.outcome() {
                format.print_outcome(outcome);
            }
        }
    }
    Ok(())
}

fn print_fields() {
    for field in Field::ALL {
        let rule = field.rule();
        let mut notes = Vec::new();
        match rule.required {
            Some(_) => notes.push("required".to_string()),
            None => notes.push("optional".to_string()),
        }
        if let Some((minimum, _)) = rule.minimum {
            notes.push(format!("minimum {}", minimum));
        }
        if let Some(options) = field.options() {
            notes.push(format!("one of: {}", options.join(", ")));
        }
        println!(
            "{:<22} {:<20} {}",
            field.wire_name().bold(),
            field.label(),
            notes.join(", ")
        );
    }
}

async fn health(api_url: &str) -> Result<(), TriageError> {
    let client = PredictionClient::new(api_url);
    client.health().await?;
    println!("{} {}", "OK".green().bold(), api_url);
    Ok(())
}

fn handle_config(action: ConfigCommands) -> Result<(), TriageError> {
    match action {
        ConfigCommands::Init => {
            let config = Config::default();
            config.save()?;
            println!("Configuration initialized at ~/.triage/config.toml");
        }
        ConfigCommands::Set { key, value } => {
            let mut config = Config::load(None).unwrap_or_default();
            match key.as_str() {
                "api_url" => config.api_url = Some(value),
                _ => return Err(TriageError::Config(format!("Unknown config key: {}", key))),
            }
            config.save()?;
            println!("Set {} successfully", key);
        }
        ConfigCommands::Get { key } => {
            let config = Config::load(None).unwrap_or_default();
            let value = match key.as_str() {
                "api_url" => config.api_url,
                _ => return Err(TriageError::Config(format!("Unknown config key: {}", key))),
            };
            println!("{}: {}", key, value.unwrap_or_else(|| "(not set)".into()));
        }
        ConfigCommands::List => {
            let config = Config::load(None).unwrap_or_default();
            println!(
                "api_url: {}",
                config.api_url.unwrap_or_else(|| "(not set)".into())
            );
        }
    }
    Ok(())
}
