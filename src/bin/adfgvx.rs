//! ADFGVX Command Line Interface
//!
//! Encrypts a text, then decrypts the result, logging both lines.
//!
//! Usage:
//!   adfgvx [-k KEY] [TEXT]
//!   adfgvx --version
//!   adfgvx --help
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::env;
use std::io::Write;
use std::process;

use adfgvx::{Adfgvx, AdfgvxError, DEFAULT_KEY};
use log::{error, info};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Plaintext used when no text argument is given.
const DEFAULT_TEXT: &str = "attack at 12am";

/// Print version information.
fn print_version() {
    println!("adfgvx {VERSION}");
}

/// Print help message with usage information.
fn print_help(prog_name: &str) {
    println!("ADFGVX field cipher (v{VERSION})");
    println!("================================\n");
    println!("Usage:");
    println!("  {prog_name} [-k KEY] [TEXT]\n");
    println!("Options:");
    println!("  -k, --key KEY  Transposition key (default: {DEFAULT_KEY})");
    println!("  -h, --help     Show this help message");
    println!("  -v, --version  Show version information\n");
    println!("Arguments:");
    println!("  TEXT           Text to encrypt (default: \"{DEFAULT_TEXT}\")\n");
    println!("Environment:");
    println!("  RUST_LOG       Log filter (default: info)\n");
    println!("Examples:");
    println!("  {prog_name}");
    println!("  {prog_name} \"defend the east wall\"");
    println!("  {prog_name} -k GERMAN \"defend the east wall\"");
}

/// Rewrite an RFC 3339 UTC timestamp (`2026-10-18T11:12:13Z`) as
/// `dd.MM.yyyy-HH:mm`. Anything unexpected is returned unchanged.
fn log_timestamp(rfc3339: &str) -> String {
    match (
        rfc3339.get(0..4),
        rfc3339.get(5..7),
        rfc3339.get(8..10),
        rfc3339.get(11..16),
    ) {
        (Some(year), Some(month), Some(day), Some(time)) => {
            format!("{day}.{month}.{year}-{time}")
        }
        _ => rfc3339.to_string(),
    }
}

/// Install the logger: `[dd.MM.yyyy-HH:mm] LEVEL   message` (UTC).
fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let stamp = log_timestamp(&buf.timestamp_seconds().to_string());
            writeln!(buf, "[{}] {:<7} {}", stamp, record.level(), record.args())
        })
        .init();
}

/// Parsed command line.
struct Options {
    key: Option<String>,
    text: Option<String>,
}

/// What the command line asks for.
enum Command {
    Run(Options),
    Help,
    Version,
}

/// Parse arguments after the program name.
fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut options = Options {
        key: None,
        text: None,
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-v" | "--version" => return Ok(Command::Version),
            "-k" | "--key" => match iter.next() {
                Some(key) => options.key = Some(key.clone()),
                None => return Err(format!("{arg} requires a value")),
            },
            s if s.starts_with('-') && s.len() > 1 => {
                return Err(format!("unknown option '{s}'"));
            }
            _ => {
                if options.text.is_some() {
                    return Err(format!("unexpected argument '{arg}'"));
                }
                options.text = Some(arg.clone());
            }
        }
    }

    Ok(Command::Run(options))
}

/// Encrypt then decrypt, logging both results.
fn run(options: &Options) -> Result<(), AdfgvxError> {
    let cipher = match &options.key {
        Some(key) => Adfgvx::with_key(key)?,
        None => Adfgvx::new(),
    };
    let text = options.text.as_deref().unwrap_or(DEFAULT_TEXT);

    let encrypted = cipher.encrypt(text)?;
    info!("encrypted text : {encrypted}");
    let decrypted = cipher.decrypt(&encrypted)?;
    info!("decrypted text : {decrypted}");
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let prog_name = args.first().map_or("adfgvx", String::as_str);

    let command = match parse_args(args.get(1..).unwrap_or_default()) {
        Ok(command) => command,
        Err(msg) => {
            eprintln!("Error: {msg}\n");
            print_help(prog_name);
            process::exit(1);
        }
    };

    match command {
        Command::Help => print_help(prog_name),
        Command::Version => print_version(),
        Command::Run(options) => {
            init_logger();
            if let Err(e) = run(&options) {
                error!("{e}");
                process::exit(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_no_args() {
        match parse_args(&[]) {
            Ok(Command::Run(o)) => {
                assert!(o.key.is_none());
                assert!(o.text.is_none());
            }
            _ => panic!("expected Run"),
        }
    }

    #[test]
    fn test_parse_key_and_text() {
        match parse_args(&args(&["-k", "GERMAN", "hello world"])) {
            Ok(Command::Run(o)) => {
                assert_eq!(o.key.as_deref(), Some("GERMAN"));
                assert_eq!(o.text.as_deref(), Some("hello world"));
            }
            _ => panic!("expected Run"),
        }
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&["--key"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
        assert!(parse_args(&args(&["one", "two"])).is_err());
    }

    #[test]
    fn test_parse_help_and_version() {
        assert!(matches!(parse_args(&args(&["-h"])), Ok(Command::Help)));
        assert!(matches!(
            parse_args(&args(&["--version"])),
            Ok(Command::Version)
        ));
    }

    #[test]
    fn test_log_timestamp_format() {
        assert_eq!(log_timestamp("2026-10-18T11:12:13Z"), "18.10.2026-11:12");
        assert_eq!(log_timestamp("2018-08-30T09:05:00Z"), "30.08.2018-09:05");
        assert_eq!(log_timestamp("bogus"), "bogus");
    }

    #[test]
    fn test_run_default() {
        let options = Options {
            key: None,
            text: None,
        };
        assert!(run(&options).is_ok());
    }

    #[test]
    fn test_run_reports_errors() {
        let options = Options {
            key: Some(String::new()),
            text: None,
        };
        assert_eq!(run(&options), Err(AdfgvxError::InvalidKey));

        let options = Options {
            key: None,
            text: Some("  ".to_string()),
        };
        assert_eq!(run(&options), Err(AdfgvxError::EmptyInput));
    }
}
