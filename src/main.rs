//! json-highlight - render JSON as highlighted HTML or terminal text

use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use json_highlight::config::{Config, OutputMode};
use json_highlight::error::{HighlightError, Result};
use json_highlight::page::render_page;
use json_highlight::terminal::highlight_to_terminal;
use json_highlight::{highlight, StyleSheets};

/// Parsed command line
#[derive(Debug, Default)]
struct Options {
    output: Option<OutputMode>,
    config: Option<PathBuf>,
    input: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let options = match parse_args(&args)? {
        Some(options) => options,
        None => return Ok(()),
    };

    let config = match &options.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let theme = config.theme()?;
    let mode = match options.output {
        Some(mode) => mode,
        None => config.output_mode()?,
    };
    log::debug!("output mode {:?}", mode);

    let input = read_input(options.input.as_deref())?;

    let output = match mode {
        OutputMode::Html => highlight(&input),
        OutputMode::Page => {
            let mut sheets = StyleSheets::new();
            theme.install(&mut sheets);
            render_page(&highlight(&input), &sheets)
        }
        OutputMode::Ansi => highlight_to_terminal(&input, &theme)?,
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(())
}

/// Parse arguments; `None` means help or version was printed
fn parse_args(args: &[String]) -> Result<Option<Options>> {
    let mut options = Options::default();
    let mut input_given = false;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(None);
            }
            "--version" | "-V" => {
                print_version();
                return Ok(None);
            }
            "--html" => options.output = Some(OutputMode::Html),
            "--page" => options.output = Some(OutputMode::Page),
            "--ansi" => options.output = Some(OutputMode::Ansi),
            "--config" | "-c" => {
                let path = iter.next().ok_or_else(|| {
                    HighlightError::Message(format!("{} requires a path", arg))
                })?;
                options.config = Some(PathBuf::from(path));
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(HighlightError::Message(format!("Unknown option: {}", other)));
            }
            file => {
                if input_given {
                    return Err(HighlightError::Message(format!(
                        "Unexpected extra argument: {}",
                        file
                    )));
                }
                input_given = true;
                // `-` means stdin
                options.input = (file != "-").then(|| PathBuf::from(file));
            }
        }
    }

    Ok(Some(options))
}

/// Read the whole input file, or stdin when no file is given
fn read_input(path: Option<&std::path::Path>) -> Result<String> {
    match path {
        Some(path) => {
            log::debug!("reading {}", path.display());
            Ok(fs::read_to_string(path)?)
        }
        None => {
            log::debug!("reading stdin");
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

fn print_usage() {
    println!("json-highlight {} - color-annotated JSON for HTML and terminals", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: json-highlight [OPTIONS] [FILE]");
    println!();
    println!("Reads JSON from FILE, or from stdin when FILE is absent or '-'.");
    println!();
    println!("Options:");
    println!("  -h, --help           Show this help message");
    println!("  -V, --version        Show version information");
    println!("      --html           Write an HTML fragment (default)");
    println!("      --page           Write a standalone HTML page with its stylesheet");
    println!("      --ansi           Write ANSI-colored text for a terminal");
    println!("  -c, --config PATH    Read settings from PATH instead of ~/.json-highlight.toml");
    println!();
    println!("Set RUST_LOG=debug for diagnostic output.");
}

fn print_version() {
    println!("json-highlight {}", env!("CARGO_PKG_VERSION"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_output_and_file() {
        let options = parse_args(&args(&["--page", "data.json"])).unwrap().unwrap();
        assert_eq!(options.output, Some(OutputMode::Page));
        assert_eq!(options.input, Some(PathBuf::from("data.json")));
        assert!(options.config.is_none());
    }

    #[test]
    fn test_parse_config_path() {
        let options = parse_args(&args(&["-c", "theme.toml", "-"])).unwrap().unwrap();
        assert_eq!(options.config, Some(PathBuf::from("theme.toml")));
        assert!(options.input.is_none());
        assert!(options.output.is_none());
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&["--config"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
        assert!(parse_args(&args(&["a.json", "b.json"])).is_err());
        assert!(parse_args(&args(&["a.json", "-"])).is_err());
        assert!(parse_args(&args(&["-", "a.json"])).is_err());
        assert!(parse_args(&args(&["-", "-"])).is_err());
    }

    #[test]
    fn test_last_output_flag_wins() {
        let options = parse_args(&args(&["--ansi", "--html"])).unwrap().unwrap();
        assert_eq!(options.output, Some(OutputMode::Html));
    }
}
