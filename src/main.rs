mod app;
mod command;
mod config;
mod consts;
mod display;
mod game;
mod util;
mod warning;
use crate::app::App;
use crate::config::Config;
use crate::warning::Warning;
use anyhow::Context;
use lexopt::{Arg, Parser};
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    match try_main() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("gridsnake: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn try_main() -> anyhow::Result<ExitCode> {
    let Some(args) = Args::parse().context("failed to parse command-line arguments")? else {
        return Ok(ExitCode::SUCCESS);
    };
    let (config, warning) = load_config(args.config_path);
    let terminal = ratatui::init();
    let r = App::new(&config, warning).run(terminal);
    ratatui::restore();
    Ok(io_exit(r))
}

/// Parsed command-line arguments.  `Args::parse()` returns `None` when
/// a help or version request was already handled.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Args {
    config_path: Option<PathBuf>,
}

impl Args {
    fn parse() -> Result<Option<Args>, lexopt::Error> {
        let mut args = Args::default();
        let mut parser = Parser::from_env();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config_path = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => {
                    println!("Usage: gridsnake [-c|--config <PATH>]");
                    println!();
                    println!("Options:");
                    println!("  -c, --config <PATH>  Read configuration from <PATH>");
                    println!("  -h, --help           Display this help message and exit");
                    println!("  -V, --version        Show the program version and exit");
                    return Ok(None);
                }
                Arg::Short('V') | Arg::Long("version") => {
                    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                    return Ok(None);
                }
                other => return Err(other.unexpected()),
            }
        }
        Ok(Some(args))
    }
}

/// Load configuration, degrading to the defaults plus a warning pop-up
/// if the file cannot be used.  A missing file at the default location
/// is not an error; a missing file named with `--config` is.
fn load_config(path: Option<PathBuf>) -> (Config, Option<Warning>) {
    let (path, allow_missing) = match path {
        Some(p) => (p, false),
        None => match Config::default_path() {
            Ok(p) => (p, true),
            Err(e) => return (Config::default(), Some(Warning::from(e))),
        },
    };
    match Config::load(&path, allow_missing) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(Warning::from(e))),
    }
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
