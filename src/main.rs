use clap::{Parser, Subcommand};
use fitcrop::imaging::{AnchorMode, RustBackend, TargetSize, fit_crop_file};
use fitcrop::{batch, config, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fitcrop")]
#[command(about = "Resize and crop images to exact pixel dimensions")]
#[command(long_about = "\
Resize and crop images to exact pixel dimensions

Images are scaled uniformly until both dimensions cover the target, then
cropped to the exact size at an anchor. The aspect mismatch is absorbed by
cropping, never by stretching. Output is written next to the input as
name_{width}x{height}.ext; the input file is never modified.

Single file:

  fitcrop photo.jpg 640 400            # center crop (default)
  fitcrop photo.jpg 1280 800 topleft   # keep the top-left region

Batch:

  fitcrop gen-config > jobs.toml       # start from a documented job list
  fitcrop check jobs.toml              # validate the list without processing
  fitcrop batch jobs.toml              # process every job in order

Batch mode reports each item and always exits 0; per-item failures are
visible in the report, not the exit code.")]
#[command(version)]
#[command(subcommand_negates_reqs = true, args_conflicts_with_subcommands = true)]
struct Cli {
    /// Input image path
    #[arg(value_name = "INPUT", required = true)]
    input: Option<PathBuf>,

    /// Target width in pixels
    #[arg(value_name = "WIDTH", required = true, value_parser = clap::value_parser!(u32).range(1..))]
    width: Option<u32>,

    /// Target height in pixels
    #[arg(value_name = "HEIGHT", required = true, value_parser = clap::value_parser!(u32).range(1..))]
    height: Option<u32>,

    /// Crop anchor: topleft or center
    #[arg(value_name = "ANCHOR", default_value_t = AnchorMode::Center)]
    anchor: AnchorMode,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Process every job in a TOML job list
    Batch {
        /// Path to the job list file
        #[arg(value_name = "CONFIG")]
        config: PathBuf,
    },
    /// Validate a job list and report missing inputs without processing
    Check {
        /// Path to the job list file
        #[arg(value_name = "CONFIG")]
        config: PathBuf,
    },
    /// Print a stock jobs.toml with all options documented
    GenConfig,
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Batch { config }) => {
            let jobs = config::load_config(&config)?.into_jobs();
            let backend = RustBackend::new();
            let outcomes = batch::run_batch(&backend, &jobs);
            output::print_batch_report(&outcomes);
        }
        Some(Command::Check { config }) => {
            let jobs = config::load_config(&config)?.into_jobs();
            let checked: Vec<_> = jobs
                .into_iter()
                .map(|job| {
                    let exists = job.input.exists();
                    (job, exists)
                })
                .collect();
            output::print_check_report(&checked);
        }
        Some(Command::GenConfig) => {
            print!("{}", config::stock_config_toml());
        }
        None => {
            // Positionals are enforced by clap when no subcommand is given
            let (Some(input), Some(width), Some(height)) = (cli.input, cli.width, cli.height)
            else {
                unreachable!("clap requires single-file positionals");
            };
            let backend = RustBackend::new();
            let outcome =
                fit_crop_file(&backend, &input, TargetSize::new(width, height), cli.anchor)?;
            output::print_single_outcome(&input, &outcome);
        }
    }

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
