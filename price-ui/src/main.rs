use std::{io, path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};

use price_core::{PredictorConfig, predictor::config::env_endpoint};
use price_http::HttpPredictor;
use price_ui::{
    FormController, logging,
    models::Field,
    render,
    session::Session,
    settings::Settings,
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Car price estimator.
///
/// Collects vehicle details and asks a prediction service for the car's
/// price. The endpoint is taken from `--endpoint`, then `CAR_PRICE_API_URL`,
/// then the settings file, and defaults to http://127.0.0.1:5000/predict.
#[derive(Debug, Parser)]
#[command(name = "car-price", version, about, long_about = None)]
struct Cli {
    /// Prediction endpoint URL.
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// TOML settings file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `price_http=debug`.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Submit one prediction from the given values and print the outcome.
    Predict(PredictArgs),
    /// Fill in the form interactively (the default).
    Form,
}

/// Omitted values keep the form's defaults (current year, 0 km, Petrol).
#[derive(Debug, Args)]
struct PredictArgs {
    /// Manufacturer, e.g. Hyundai.
    #[arg(long)]
    company: Option<String>,

    /// Manufacturing year.
    #[arg(long)]
    year: Option<String>,

    /// Kilometers driven.
    #[arg(long, visible_alias = "km")]
    km_driven: Option<String>,

    /// Petrol, Diesel, CNG or Electric.
    #[arg(long)]
    fuel: Option<String>,
}

// ─── startup ─────────────────────────────────────────────────────────────────

async fn predict_once(
    predictor: &HttpPredictor,
    args: PredictArgs,
) -> Result<ExitCode> {
    let mut controller = FormController::new();
    let values = [
        (Field::Company, args.company),
        (Field::Year, args.year),
        (Field::KmDriven, args.km_driven),
        (Field::Fuel, args.fuel),
    ];
    for (field, value) in values {
        if let Some(value) = value {
            controller.update_field(field, value);
        }
    }

    if let Err(rejected) = controller.submit(predictor).await {
        eprintln!("{rejected}");
        return Ok(ExitCode::from(2));
    }

    println!("{}", render::render_status(&controller));
    if controller.outcome().is_failure() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

async fn run_form(predictor: &HttpPredictor) -> Result<ExitCode> {
    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let mut session = Session::new(FormController::new(), predictor, io::stdout());
    session
        .run(input)
        .await
        .context("interactive form failed")?;
    Ok(ExitCode::SUCCESS)
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load(path).context("failed to load settings")?,
        None => Settings::default(),
    };
    logging::init_logging(cli.log_level.as_deref(), &settings.logging)?;

    let config = PredictorConfig::resolve(cli.endpoint, env_endpoint(), settings.endpoint);
    info!(endpoint = %config.endpoint, "prediction endpoint resolved");
    let predictor = HttpPredictor::new(config);

    match cli.command {
        Some(Command::Predict(args)) => {
            debug!("running one-shot prediction");
            predict_once(&predictor, args).await
        }
        Some(Command::Form) | None => run_form(&predictor).await,
    }
}
