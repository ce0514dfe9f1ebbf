use std::fs;
use std::process::ExitCode;

use log::LevelFilter;

use chess_advisor::cli;
use chess_advisor::engine::EngineConfig;

struct Args {
    verbosity: u8,
    config_path: Option<String>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        verbosity: 0,
        config_path: None,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-v" | "--verbose" => args.verbosity += 1,
            "-vv" => args.verbosity += 2,
            "--config" => {
                args.config_path = Some(iter.next().ok_or("--config needs a file path")?);
            }
            other => return Err(format!("unknown argument '{other}'")),
        }
    }
    Ok(args)
}

fn load_config(path: Option<&str>) -> Result<EngineConfig, String> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };
    let json = fs::read_to_string(path).map_err(|e| format!("{path}: {e}"))?;
    EngineConfig::from_json_str(&json).map_err(|e| format!("{path}: {e}"))
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("usage: chess_advisor [-v|--verbose]... [--config <file.json>]");
            return ExitCode::FAILURE;
        }
    };

    let level = match args.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // env_logger writes to stderr, so log lines never mix with console output
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();

    let config = match load_config(args.config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match cli::run_stdio(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
