//! emojicon CLI - replace emojis in an HTML file with Bootstrap Icons

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use emojicon::{ReplacementTable, RewriteOptions, WriteMode};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// HTML file to rewrite
    #[arg(default_value = emojicon::DEFAULT_PATH)]
    path: PathBuf,

    /// Write to a temporary file and rename it over the target
    #[arg(long)]
    atomic: bool,

    /// Report what would be replaced without writing
    #[arg(long)]
    dry_run: bool,

    /// Log each stage to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn rewrite_options(&self) -> RewriteOptions {
        RewriteOptions {
            write_mode: if self.atomic {
                WriteMode::Atomic
            } else {
                WriteMode::InPlace
            },
            dry_run: self.dry_run,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_target(false)
        .init();

    let table = ReplacementTable::bootstrap();
    match emojicon::rewrite_file(&args.path, &table, &args.rewrite_options()) {
        Ok(report) if args.dry_run => {
            println!("{}: {report} (dry run)", args.path.display());
            ExitCode::SUCCESS
        }
        Ok(_) => {
            println!("{}", emojicon::SUCCESS_MESSAGE);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("emojicon: {e}");
            ExitCode::FAILURE
        }
    }
}
