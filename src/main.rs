// js8path-data command line
// Exports the schema definitions and filters report files

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::Value;

use js8path_data::{ensure_key, ReceptionReport, ReportConfig, Result, SchemaDefs, Validator};

#[derive(Parser, Debug)]
#[command(name = "js8path-data", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the schema definitions as JSON.
    Schema {
        /// Output path (stdout when omitted).
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Drop invalid reports from a JSON report list.
    Filter {
        /// Input report list JSON.
        #[arg(long = "in")]
        in_path: PathBuf,

        /// Output path (stdout when omitted).
        #[arg(long)]
        out: Option<PathBuf>,

        /// Add band and key fields to every kept report.
        #[arg(long)]
        keys: bool,

        /// Band/key options JSON.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("js8path_data=info"),
    )
    .init();

    let cli = Cli::parse();
    match run(cli.cmd) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cmd: Command) -> Result<()> {
    match cmd {
        Command::Schema { out } => {
            let defs = SchemaDefs::standard();
            match out {
                Some(path) => defs.export_to_file(&path),
                None => write_output(None, &defs.to_json_pretty()?),
            }
        }
        Command::Filter {
            in_path,
            out,
            keys,
            config,
        } => {
            let reports: Vec<Value> = serde_json::from_str(&fs::read_to_string(&in_path)?)?;
            let total = reports.len();
            log::info!("Read {} reports from {}", total, in_path.display());

            let validator = Validator::new()?;
            let mut kept = validator.filter_valid_reports(reports)?;
            log::info!("{} of {} reports are valid", kept.len(), total);

            if keys {
                let opts = match config {
                    Some(path) => ReportConfig::from_json_file(&path)?,
                    None => ReportConfig::default(),
                }
                .into_options();
                kept = kept
                    .into_iter()
                    .map(|value| -> Result<Value> {
                        let report = ReceptionReport::from_value(value)?;
                        Ok(ensure_key(report, &opts).to_value()?)
                    })
                    .collect::<Result<Vec<_>>>()?;
            }

            write_output(out.as_deref(), &serde_json::to_string_pretty(&kept)?)
        }
    }
}

fn write_output(path: Option<&Path>, json: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, json)?;
            log::info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
