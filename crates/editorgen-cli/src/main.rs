//! editorgen CLI - Unity custom inspector generator
//!
//! Commands:
//! - `editorgen generate` - Generate an editor from a type description
//! - `editorgen check` - Validate a type description without writing anything

use clap::{Parser, Subcommand};
use editorgen_core::GenerationError;
use editorgen_logging::{LogCallback, LogCallbackManager, LogLevel, init_logging};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

mod description;
mod generate;

#[derive(Parser)]
#[command(name = "editorgen")]
#[command(author, version, about = "Generate Unity custom inspector editors", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an editor for the described type
    Generate {
        /// Path to the type description (.toml or .json)
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory (default: current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Explicit output file, overrides --output
        #[arg(long, conflicts_with = "output")]
        file: Option<PathBuf>,

        /// Print the generated source instead of writing it
        #[arg(long)]
        stdout: bool,
    },

    /// Validate a type description and report what would be generated
    Check {
        /// Path to the type description (.toml or .json)
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    });

    let (callback, warnings) = warning_counter();
    LogCallbackManager::global().set_callback(Some(callback));

    let result = run(cli.command);

    let warnings = warnings.load(Ordering::SeqCst);
    if warnings > 0 {
        eprintln!("{warnings} warning(s) emitted");
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Generate {
            input,
            output,
            file,
            stdout,
        } => {
            generate::run(&generate::GenerateOptions {
                input,
                output,
                file,
                stdout,
            })?;
        }
        Commands::Check { input } => {
            description::check(&input)?;
        }
    }

    Ok(())
}

/// Diagnostics callback counting events at `WARN` and above
fn warning_counter() -> (LogCallback, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&count);
    let callback: LogCallback = Arc::new(move |level, _target, _message| {
        if level >= LogLevel::Warn {
            seen.fetch_add(1, Ordering::SeqCst);
        }
    });
    (callback, count)
}

/// Generation errors exit with their own code, everything else with 1
fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<GenerationError>()
        .and_then(|err| u8::try_from(err.error_code()).ok())
        .unwrap_or(1)
}
