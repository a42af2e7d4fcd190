mod logging;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use datadrift_generate::registry;
use datadrift_handler::{
    GenerationRequest, Handler, HandlerOptions, LocalStore, ObjectStore, S3Store, UploadError,
};
use thiserror::Error;

use logging::init_logging;

#[derive(Debug, Error)]
enum CliError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
    #[error("object store error: {0}")]
    Store(#[from] UploadError),
}

#[derive(Parser, Debug)]
#[command(name = "datadrift", version, about = "Synthetic CSV generator with data errors and schema drift")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate one dataset from a JSON payload and upload it.
    Run(RunArgs),
    /// List registered dataset types and their canonical columns.
    Datasets,
    /// Print the JSON Schema of the invocation payload.
    Schema,
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Payload file; `-` or omitted reads stdin.
    #[arg(value_name = "PAYLOAD")]
    payload: Option<PathBuf>,
    /// Directory for the transient CSV artifact.
    #[arg(long)]
    work_dir: Option<PathBuf>,
    /// Store objects under this directory instead of S3.
    #[arg(long, value_name = "DIR")]
    local_store: Option<PathBuf>,
    /// Emit logs as JSON.
    #[arg(long, default_value_t = false)]
    log_json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Run(args) => run(args),
        Command::Datasets => list_datasets().map(|_| true),
        Command::Schema => print_schema().map(|_| true),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: RunArgs) -> Result<bool, CliError> {
    init_logging(args.log_json).map_err(CliError::Logging)?;

    let payload = read_payload(args.payload.as_deref())?;
    let mut options = HandlerOptions::default();
    if let Some(work_dir) = args.work_dir {
        fs::create_dir_all(&work_dir)?;
        options.work_dir = work_dir;
    }

    let store: Box<dyn ObjectStore> = match args.local_store {
        Some(root) => Box::new(LocalStore::new(root)),
        None => Box::new(S3Store::from_env()?),
    };

    let response = Handler::new(store, options).handle_str(&payload);
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(response.is_ok())
}

fn read_payload(path: Option<&std::path::Path>) -> Result<String, CliError> {
    match path {
        Some(path) if path.as_os_str() != "-" => Ok(fs::read_to_string(path)?),
        _ => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn list_datasets() -> Result<(), CliError> {
    for definition in registry().definitions() {
        println!("{}: {}", definition.name, definition.canonical_fields.join(", "));
    }
    Ok(())
}

fn print_schema() -> Result<(), CliError> {
    let schema = schemars::schema_for!(GenerationRequest);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
