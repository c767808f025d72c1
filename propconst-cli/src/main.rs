//! `propconst` command line entry point.
//!
//! Exit codes:
//! - 0: success
//! - 1: generation reported errors, or the command failed
//! - 2: invalid arguments (reported by clap)

use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use propconst::GeneratorConfig;
use propconst_cli::{
    generate::{self, GenerateArgs},
    inspect::{describe_names, describe_resource},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate constant classes for all resources in a directory.
    Generate(GenerateArgs),

    /// Show the names derived from property keys.
    Names {
        /// Keys to convert
        #[arg(required = true)]
        keys: Vec<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show where the class for a resource path would be generated.
    Resolve {
        /// Resource path relative to the resource directory
        path: String,

        /// Package of the generated classes
        #[arg(short, long)]
        namespace: String,

        /// Ignore subdirectories when building the package
        #[arg(long)]
        flatten: bool,

        /// Appended to the class name
        #[arg(long, default_value = "")]
        suffix: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "info",
        (false, 1) => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("warn,propconst={level},propconst_cli={level}"))
    });
    // Already initialized is fine.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

fn run(commands: Commands) -> Result<(), String> {
    match commands {
        Commands::Generate(args) => {
            let json = args.json;
            let report = generate::run(args)?;
            if json {
                println!("{}", report.to_json().map_err(|e| e.to_string())?);
            } else if !report.generated.is_empty() {
                println!("Generated {} class(es)", report.generated.len());
            }
            report.into_result().map(|_| ()).map_err(|e| e.to_string())
        }
        Commands::Names { keys, json } => {
            print!("{}", describe_names(&keys, json)?);
            if json {
                println!();
            }
            Ok(())
        }
        Commands::Resolve {
            path,
            namespace,
            flatten,
            suffix,
            json,
        } => {
            let config = GeneratorConfig::new(namespace)
                .with_flatten(flatten)
                .with_name_suffix(suffix);
            print!("{}", describe_resource(&path, &config, json)?);
            if json {
                println!();
            }
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose, args.quiet);

    match run(args.commands) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
