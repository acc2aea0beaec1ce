mod case;
mod error;
mod output;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use fv_core::units::seconds;
use fv_core::Vector;
use fv_schemes::{CourantField, SchemeRegistry};
use tracing::info;

use crate::case::CaseFile;
use crate::error::CliResult;
use crate::output::{BlendReport, FieldRecord, StepRecord};

#[derive(Parser)]
#[command(name = "fv-cli")]
#[command(about = "Finite-volume interpolation scheme driver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the registered interpolation scheme names
    Schemes,
    /// Build a case and construct its scheme
    Check {
        /// Path to the case YAML file
        case_path: PathBuf,
    },
    /// Evaluate the scheme of a case over a number of time steps,
    /// writing the Courant number, blending factor and face values of each step
    Blend {
        /// Path to the case YAML file
        case_path: PathBuf,
        /// Output JSON file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Number of time steps to evaluate
        #[arg(long, default_value_t = 1)]
        steps: usize,
    },
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Schemes => cmd_schemes(),
        Commands::Check { case_path } => cmd_check(&case_path),
        Commands::Blend {
            case_path,
            output,
            steps,
        } => cmd_blend(&case_path, output.as_deref(), steps),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn cmd_schemes() -> CliResult<()> {
    let scalars = SchemeRegistry::<f64>::standard();
    let vectors = SchemeRegistry::<Vector>::standard();
    println!("Interpolation schemes:");
    for name in scalars.names() {
        let vector = if vectors.contains(name) { "scalar, vector" } else { "scalar" };
        println!("  {name} ({vector})");
    }
    Ok(())
}

fn cmd_check(case_path: &Path) -> CliResult<()> {
    println!("Checking case: {}", case_path.display());
    let case = CaseFile::load(case_path)?.build()?;
    let scheme = case.scheme(&SchemeRegistry::standard())?;

    println!("✓ Scheme for {} constructed", case.scheme_key);
    println!("  Type:      {}", scheme.name());
    println!("  Corrected: {}", scheme.corrected());
    println!("  Blended:   {}", scheme.as_blended().is_some());
    Ok(())
}

fn cmd_blend(case_path: &Path, output: Option<&Path>, steps: usize) -> CliResult<()> {
    let case = CaseFile::load(case_path)?.build()?;
    let scheme = case.scheme(&SchemeRegistry::standard())?;
    let time = case.ctx.mesh().time();

    let mut records = Vec::with_capacity(steps.max(1));
    for step in 0..steps.max(1) {
        if step > 0 {
            case.advance()?;
        }
        let mut fields = Vec::new();
        if let Some(blended) = scheme.as_blended() {
            match blended.blending_criterion()? {
                Some(CourantField::Cell(co)) => {
                    if let Some((lo, hi)) = co.cmpt_bounds() {
                        info!(step = time.time_index(), delta_t = time.delta_t_value(), co_min = lo, co_max = hi, "cell Courant number");
                    }
                    fields.push(FieldRecord::from_vol(&co));
                }
                Some(CourantField::Face(co)) => {
                    if let Some((lo, hi)) = co.min_max() {
                        info!(step = time.time_index(), delta_t = time.delta_t_value(), co_min = lo, co_max = hi, "face Courant number");
                    }
                    fields.push(FieldRecord::from_surface(&co));
                }
                None => {}
            }
            let bf = blended.blending_factor(&case.field)?;
            if let Some((lo, hi)) = bf.min_max() {
                info!(step = time.time_index(), bf_min = lo, bf_max = hi, "blending factor");
            }
            fields.push(FieldRecord::from_surface(&bf));
        }
        fields.push(FieldRecord::from_surface(&scheme.interpolate(&case.field)?));

        records.push(StepRecord {
            time_index: time.time_index(),
            time: seconds(time.value()),
            delta_t: time.delta_t_value(),
            fields,
        });
    }

    let report = BlendReport {
        scheme: scheme.name().to_string(),
        steps: records,
    };
    report.write(output)?;
    if let Some(path) = output {
        println!("✓ Wrote {} steps to {}", report.steps.len(), path.display());
    }
    Ok(())
}
