//! Command-line front end for the generate binary.
//! Maps raw process arguments onto the options record and produces the
//! usage/diagnostic surface for malformed invocations.

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

use crate::options::{CssEngine, Options, ViewEngine};

/// Raw command-line arguments for `generate [options] [dir]`.
#[derive(Parser, Debug)]
#[command(
    name = "generate",
    about = "Generates an Express application skeleton",
    disable_version_flag = true
)]
pub struct Args {
    /// Destination directory for the generated application
    #[arg(value_name = "DIR", default_value = ".")]
    pub destination: PathBuf,

    /// Add ejs view engine support (same as --view ejs)
    #[arg(short, long)]
    pub ejs: bool,

    /// Select a view engine (defaults to ejs)
    #[arg(short = 'v', long, value_name = "ENGINE", value_enum)]
    pub view: Option<ViewEngine>,

    /// Generate without a view engine (serves a static landing page)
    #[arg(long)]
    pub no_view: bool,

    /// Select a stylesheet engine (plain CSS when omitted)
    #[arg(short = 'c', long, value_name = "ENGINE", value_enum)]
    pub css: Option<CssEngine>,

    /// Write a .gitignore into the generated project
    #[arg(long)]
    pub git: bool,

    /// Skip the confirmation prompt for a non-empty destination
    #[arg(short, long)]
    pub force: bool,

    /// Print the version and exit
    #[arg(long)]
    pub version: bool,
}

impl Args {
    /// Resolves the raw flags into the options record. `--no-view` wins
    /// over `--ejs` and `--view`; the view engine defaults to ejs.
    pub fn into_options(self) -> Options {
        let view = if self.no_view {
            None
        } else if self.ejs {
            Some(ViewEngine::Ejs)
        } else {
            Some(self.view.unwrap_or_default())
        };

        Options {
            destination: self.destination,
            view,
            css: self.css.unwrap_or_default(),
            force: self.force,
            git: self.git,
        }
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 0 after help or version output
/// * With status code 1 for unknown options or missing option arguments,
///   printing usage on stdout and the diagnostic on stderr
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) if args.version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            std::process::exit(0);
        }
        Ok(args) => args,
        Err(e) => handle_parse_error(e),
    }
}

fn handle_parse_error(e: clap::Error) -> ! {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = e.print();
            std::process::exit(0);
        }
        ErrorKind::UnknownArgument => {
            print_usage();
            eprintln!("error: unknown option '{}'", error_context(&e, ContextKind::InvalidArg));
            std::process::exit(1);
        }
        ErrorKind::InvalidValue | ErrorKind::NoEquals => {
            let option = error_context(&e, ContextKind::InvalidArg);
            let value = error_context(&e, ContextKind::InvalidValue);
            print_usage();
            if value.is_empty() {
                eprintln!("error: option '{}' argument missing", option);
            } else {
                eprintln!("error: option '{}' got an invalid value '{}'", option, value);
            }
            std::process::exit(1);
        }
        _ => {
            let _ = e.print();
            std::process::exit(1);
        }
    }
}

// Usage goes to stdout; the diagnostic follows on stderr.
fn print_usage() {
    let _ = Args::command().print_help();
}

fn error_context(e: &clap::Error, kind: ContextKind) -> String {
    match e.get(kind) {
        Some(ContextValue::String(value)) => value.clone(),
        _ => String::new(),
    }
}
