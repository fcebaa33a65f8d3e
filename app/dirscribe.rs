//! Command-line interface for dirscribe.
//!
//! This binary wraps the dirscribe library: it runs the pre-flight advisory
//! checks, writes the structure-and-content report, and prints the
//! end-of-run summary.

use clap::{Parser, ValueEnum};
use dirscribe::{
    DEFAULT_OUTPUT_NAME, DirscribeBuilder, DirscribeOptions, advisory, dirscribe, output,
};
use std::path::PathBuf;
use std::process::exit;
use std::time::Instant;

/// dirscribe — directory structure and content reporter
#[derive(Parser)]
#[command(name = "dirscribe", version, about, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Report file path
    #[arg(short, long, default_value = DEFAULT_OUTPUT_NAME)]
    output: PathBuf,

    /// Console summary format
    #[arg(long, value_enum, default_value_t = SummaryArg::Text)]
    summary: SummaryArg,

    /// Pretty output (indented JSON summary)
    #[arg(short, long)]
    pretty: bool,

    /// Skip the git LFS advisory check
    #[arg(long)]
    no_lfs_check: bool,

    /// Suppress the summary and confirmation lines
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum SummaryArg {
    Text,
    Json,
}

impl From<SummaryArg> for output::SummaryFormat {
    fn from(arg: SummaryArg) -> Self {
        match arg {
            SummaryArg::Text => output::SummaryFormat::Text,
            SummaryArg::Json => output::SummaryFormat::Json,
        }
    }
}

impl Cli {
    fn into_options(self) -> (DirscribeOptions, SummaryArg, bool, bool, bool) {
        let options = DirscribeBuilder::new(self.root).output(self.output).build();
        (
            options,
            self.summary,
            self.pretty,
            self.no_lfs_check,
            self.quiet,
        )
    }
}

fn main() {
    // Default to 'info' for this crate unless RUST_LOG overrides it.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dirscribe=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let (options, summary, pretty, no_lfs_check, quiet) = cli.into_options();

    advisory::check_os();
    if !no_lfs_check {
        advise_large_files();
    }

    run(options, summary, pretty, quiet);
}

/// Warns on stderr when large files would need git LFS and it is missing.
fn advise_large_files() {
    if advisory::git_lfs_installed() {
        tracing::info!("git LFS is installed, large files will be handled");
    } else {
        eprintln!("Warning: Git LFS is not installed, large files may not be handled correctly.");
        eprintln!("Install Git LFS to ensure large files are processed correctly.");
    }
}

fn run(options: DirscribeOptions, summary: SummaryArg, pretty: bool, quiet: bool) {
    let started = Instant::now();
    let stats = match dirscribe(&options) {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };
    if quiet {
        return;
    }
    let rendered = output::format_summary(&stats, started.elapsed(), summary.into(), pretty);
    match summary {
        SummaryArg::Text => {
            print!("{}", rendered);
            println!(
                "File structure and content written to: {}",
                options.output.display()
            );
        }
        SummaryArg::Json => println!("{}", rendered),
    }
}
