use std::io::Write as _;
use std::process::ExitCode;
use std::time::Instant;

use clap::{ArgGroup, Parser};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[cfg(target_env = "msvc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use cir::options::CirOptions;

#[derive(Parser, Debug)]
#[command(
    name = "cir",
    about = "cir: language-agnostic code intermediate representation and deterministic UML generation",
    version,
    group = ArgGroup::new("inputs").required(true).args(["files", "dirs"])
)]
struct Cli {
    /// Individual files to parse (repeatable)
    #[arg(
        short = 'f',
        long = "file",
        value_name = "FILE",
        num_args = 1..,
        action = clap::ArgAction::Append,
        conflicts_with = "dirs"
    )]
    files: Vec<String>,

    /// Directories to scan recursively (repeatable)
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        num_args = 1..,
        action = clap::ArgAction::Append,
        conflicts_with = "files"
    )]
    dirs: Vec<String>,

    /// Language override: 'java' or 'python' (default: detect from extension/content)
    #[arg(long = "lang", value_name = "LANG")]
    lang: Option<String>,

    /// Diagram type to emit: class|package|sequence|component
    #[arg(long = "diagram", value_name = "KIND", default_value = "class")]
    diagram: String,

    /// Output file path (writes to file instead of stdout)
    #[arg(short = 'o', long = "out", value_name = "FILE")]
    output: Option<String>,
}

fn run(args: Cli) -> ExitCode {
    let total_start = Instant::now();

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let opts = CirOptions {
        files: args.files,
        dirs: args.dirs,
        lang: args.lang,
        diagram: args.diagram,
        output: args.output.clone(),
    };

    let mut exit_code = ExitCode::SUCCESS;

    match cir::run(&opts) {
        Ok(output) => {
            for err in &output.parse_errors {
                eprintln!("parse error in {}: {}", err.file, err.error);
            }

            if !output.ok {
                exit_code = ExitCode::FAILURE;
                for msg in &output.validation_errors {
                    eprintln!("validation error: {msg}");
                }
            }

            if let Some(path) = &args.output {
                if let Err(err) = std::fs::write(path, &output.plantuml) {
                    eprintln!("failed to write output to {path}: {err}");
                    exit_code = ExitCode::FAILURE;
                } else {
                    tracing::info!("output written to: {path}");
                }
            } else {
                let mut stdout = std::io::stdout();
                let _ = stdout.write_all(output.plantuml.as_bytes());
            }
        }
        Err(err) => {
            eprintln!("Error: {err}");
            tracing::error!("{err}");
            exit_code = ExitCode::FAILURE;
        }
    }

    let total_secs = total_start.elapsed().as_secs_f64();
    tracing::info!("Total time: {total_secs:.2}s");
    eprintln!("Total time: {total_secs:.2}s");
    exit_code
}

fn main() -> ExitCode {
    let args = Cli::parse();
    run(args)
}
