//! mldr - run a demo screen and print what it draws
//!
//! Usage: mldr [DEMO] [--clicks N] [--config PATH] [--width W] [--height H]

use std::path::PathBuf;
use std::process::ExitCode;

use mldr::demo::{run_demo, MenuEntry, Viewport};
use mldr::domain::DomainError;
use mldr::log;
use mldr::shared::config::AppConfig;

const USAGE: &str = "Usage: mldr [DEMO] [--clicks N] [--config PATH] [--width W] [--height H]";

/// Parsed command line
#[derive(Debug, Default)]
struct Args {
    entry: Option<MenuEntry>,
    clicks: u32,
    config_path: Option<PathBuf>,
    viewport: Viewport,
    help: bool,
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, DomainError> {
    let value =
        value.ok_or_else(|| DomainError::InvalidArgument(format!("{} needs a value", flag)))?;
    value
        .parse()
        .map_err(|_| DomainError::InvalidArgument(format!("{} {}: not a number", flag, value)))
}

/// Viewport extents must be finite and non-negative
fn parse_extent(flag: &str, value: Option<String>) -> Result<f32, DomainError> {
    let extent: f32 = parse_number(flag, value)?;
    if !extent.is_finite() || extent < 0.0 {
        return Err(DomainError::InvalidArgument(format!(
            "{} {}: expected a non-negative size",
            flag, extent
        )));
    }
    Ok(extent)
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, DomainError> {
    let mut parsed = Args::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--clicks" | "-c" => parsed.clicks = parse_number(&arg, args.next())?,
            "--width" => parsed.viewport.width = parse_extent(&arg, args.next())?,
            "--height" => parsed.viewport.height = parse_extent(&arg, args.next())?,
            "--config" => {
                let path = args.next().ok_or_else(|| {
                    DomainError::InvalidArgument("--config needs a path".to_string())
                })?;
                parsed.config_path = Some(PathBuf::from(path));
            }
            "--help" | "-h" => parsed.help = true,
            flag if flag.starts_with('-') => {
                return Err(DomainError::InvalidArgument(format!("unknown flag {}", flag)));
            }
            name => parsed.entry = Some(name.parse()?),
        }
    }

    Ok(parsed)
}

fn run() -> Result<(), DomainError> {
    let args = parse_args(std::env::args().skip(1))?;

    if args.help {
        println!("{}", USAGE);
        let names: Vec<&str> = MenuEntry::ALL.iter().map(|entry| entry.name()).collect();
        println!("Demos: {}", names.join(", "));
        return Ok(());
    }

    let config = match &args.config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };

    let entry = args.entry.unwrap_or(MenuEntry::Drawn);
    let run = run_demo(entry, args.clicks, args.viewport, &config)?;

    for toast in &run.toasts {
        eprintln!("toast: {}", toast.0);
    }
    println!("{}", serde_json::to_string_pretty(&run.ops)?);
    Ok(())
}

fn main() -> ExitCode {
    log::init();
    mldr::log!("main() starting");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            mldr::log!("Error: {}", e);
            eprintln!("mldr: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args, DomainError> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_defaults() {
        let parsed = args(&[]).unwrap();
        assert!(parsed.entry.is_none());
        assert_eq!(parsed.clicks, 0);
        assert_eq!(parsed.viewport, Viewport::default());
    }

    #[test]
    fn test_parse_full_command_line() {
        let parsed = args(&["measured", "--clicks", "3", "--config", "x.toml", "--width", "200"])
            .unwrap();
        assert_eq!(parsed.entry, Some(MenuEntry::Measured));
        assert_eq!(parsed.clicks, 3);
        assert_eq!(parsed.config_path, Some(PathBuf::from("x.toml")));
        assert_eq!(parsed.viewport.width, 200.0);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(args(&["--clicks"]), Err(DomainError::InvalidArgument(_))));
        assert!(matches!(args(&["--clicks", "many"]), Err(DomainError::InvalidArgument(_))));
        assert!(matches!(args(&["--verbose"]), Err(DomainError::InvalidArgument(_))));
        assert!(matches!(args(&["spinner"]), Err(DomainError::UnknownDemo(_))));
    }

    #[test]
    fn test_parse_rejects_unusable_viewport() {
        for bad in [["--width", "-1"], ["--height", "NaN"], ["--width", "inf"]] {
            assert!(
                matches!(args(&bad), Err(DomainError::InvalidArgument(_))),
                "{:?} accepted",
                bad
            );
        }

        let parsed = args(&["--width", "0", "--height", "480.5"]).unwrap();
        assert_eq!(parsed.viewport.width, 0.0);
        assert_eq!(parsed.viewport.height, 480.5);
    }
}
