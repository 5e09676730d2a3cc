//! CLI entry point for treesnap

use std::env;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use treesnap::output::{self, ReportFormatter};
use treesnap::{ExclusionSet, TreeWalker};

/// When to colorize the console report.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Detect from the environment and terminal
    #[default]
    Auto,
    /// Force colors on
    Always,
    /// Force colors off
    Never,
}

/// Resolve a color mode against the environment.
///
/// Auto honors NO_COLOR (https://no-color.org/) and FORCE_COLOR, treats
/// TERM=dumb as colorless, and otherwise colors only when stdout is a
/// terminal.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            if env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if env::var_os("TERM").is_some_and(|t| t == "dumb") {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "treesnap")]
#[command(about = "Directory tree snapshots as text, JSON, and YAML")]
#[command(version)]
struct Args {
    /// Directory to scan
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Folder names to exclude, comma-separated; append + to a name to
    /// exclude only the folder's contents (can be used multiple times)
    #[arg(short = 'x', long = "exclude", value_name = "NAMES")]
    exclude: Vec<String>,

    /// Directory the report files are written into
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        default_value = "output"
    )]
    output_dir: PathBuf,

    /// Path of the bundled archive
    #[arg(
        long = "archive",
        value_name = "FILE",
        default_value = "directory_tree_output.tar.gz"
    )]
    archive: PathBuf,

    /// Skip writing the bundled archive
    #[arg(long = "no-archive", conflicts_with = "archive")]
    no_archive: bool,

    /// Print the report to stdout after writing the files
    #[arg(short = 'p', long = "print")]
    print: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = Args::parse();

    let walker = TreeWalker::new(ExclusionSet::parse(&args.exclude));
    let result = walker.walk(&args.path).unwrap_or_else(|e| {
        eprintln!("treesnap: {}", e);
        process::exit(1);
    });

    let formatter = ReportFormatter::new(should_use_color(args.color));
    let report = formatter.format(&result);
    let json = output::to_json(&result.root).unwrap_or_else(|e| {
        eprintln!("treesnap: {}", e);
        process::exit(1);
    });
    let yaml = output::to_yaml(&result.root).unwrap_or_else(|e| {
        eprintln!("treesnap: {}", e);
        process::exit(1);
    });

    if let Err(e) = output::write_outputs(&args.output_dir, &report, &json, &yaml) {
        eprintln!("treesnap: error writing output: {}", e);
        process::exit(1);
    }
    println!("Output saved to: {}", args.output_dir.display());

    if !args.no_archive {
        if let Err(e) = output::bundle(&args.archive, &args.output_dir) {
            eprintln!("treesnap: error writing archive: {}", e);
            process::exit(1);
        }
        println!("Bundled as: {}", args.archive.display());
    }

    if args.print {
        println!();
        if let Err(e) = formatter.print(&result) {
            eprintln!("treesnap: {}", e);
            process::exit(1);
        }
    }
}
