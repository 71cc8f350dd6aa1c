use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use credit_line_engine::engine;
use credit_line_engine::error::{EngineError, EngineResult};
use credit_line_engine::intake::{DecisionRequest, RequestLoader};
use credit_line_engine::models::DecisionResult;
use credit_line_engine::telemetry;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(
    name = "credit-line",
    about = "Recommend a credit line from payroll category, gender and first employment date",
    version
)]
struct Cli {
    /// Log level/filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = telemetry::DEFAULT_LOG_LEVEL)]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a single applicant
    Evaluate(EvaluateArgs),
    /// Evaluate every request in a YAML or JSON file
    Batch(BatchArgs),
}

#[derive(Args, Debug)]
struct EvaluateArgs {
    /// Payroll category (A, B, C or D)
    #[arg(long)]
    category: String,
    /// Gender (m or f)
    #[arg(long)]
    gender: String,
    /// First employment date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    first_employment: NaiveDate,
    /// Evaluation date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    as_of: Option<NaiveDate>,
    /// Print the full result, including the audit trace, as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// Path to the request file
    #[arg(long)]
    file: PathBuf,
    /// Evaluation date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    as_of: Option<NaiveDate>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct BatchLine<'a> {
    id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<DecisionResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = telemetry::init(&cli.log_level) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    let outcome = match cli.command {
        Command::Evaluate(args) => run_evaluate(args),
        Command::Batch(args) => run_batch(args),
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!(error = %err, "credit-line failed");
            ExitCode::FAILURE
        }
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Evaluates one decision, logging the outcome and elapsed time.
fn timed_evaluate(
    id: &str,
    category: &str,
    gender: &str,
    first_employment: NaiveDate,
    as_of: NaiveDate,
) -> EngineResult<DecisionResult> {
    let correlation_id = Uuid::new_v4();
    let start_time = Instant::now();

    let outcome = engine::evaluate(category, gender, first_employment, as_of);
    let duration_us = start_time.elapsed().as_micros();

    match &outcome {
        Ok(result) => info!(
            correlation_id = %correlation_id,
            id,
            tenure_bucket = result.tenure_bucket.key(),
            optimal_line = %result.optimal_line,
            duration_us,
            "Decision completed"
        ),
        Err(err) => warn!(
            correlation_id = %correlation_id,
            id,
            error = %err,
            duration_us,
            "Decision failed"
        ),
    }

    outcome
}

fn run_evaluate(args: EvaluateArgs) -> Result<bool, CliError> {
    let as_of = args.as_of.unwrap_or_else(today);
    let result = timed_evaluate(
        "cli",
        &args.category,
        &args.gender,
        args.first_employment,
        as_of,
    )?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("Gender:           {}", args.gender);
        println!("First employment: {}", args.first_employment);
        println!("Payroll category: {}", args.category);
        println!("Months working:   {}", result.tenure_bucket);
        println!("Minimum amount:   {}", result.minimum_amount);
        println!("Maximum amount:   {}", result.maximum_amount);
        println!("Optimal line:     {}", result.rounded_line());
    }

    Ok(true)
}

fn run_batch(args: BatchArgs) -> Result<bool, CliError> {
    let as_of = args.as_of.unwrap_or_else(today);
    let requests = RequestLoader::load(&args.file)?.into_requests();
    info!(
        path = %args.file.display(),
        count = requests.len(),
        %as_of,
        "Loaded decision requests"
    );

    let mut failures = 0usize;
    for request in &requests {
        let line = evaluate_request(request, as_of);
        if line.error.is_some() {
            failures += 1;
        }
        println!("{}", serde_json::to_string(&line)?);
    }

    info!(total = requests.len(), failures, "Batch finished");
    Ok(failures == 0)
}

fn evaluate_request(request: &DecisionRequest, as_of: NaiveDate) -> BatchLine<'_> {
    match timed_evaluate(
        &request.id,
        &request.payroll_category,
        &request.gender,
        request.first_employment_date,
        as_of,
    ) {
        Ok(result) => BatchLine {
            id: &request.id,
            result: Some(result),
            error: None,
        },
        Err(err) => BatchLine {
            id: &request.id,
            result: None,
            error: Some(err.to_string()),
        },
    }
}
