//! safename - CLI entry point.

use std::io::{self, BufRead};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use safename::{
    cli::Args,
    config::{validate_config, Config},
    error::{exit_codes, Error, Result},
    names::NameKind,
    output::{print_error, print_name, print_record, Record},
    sanitize::decode_discarding_invalid,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::InvalidInput(_) => ExitCode::from(exit_codes::INVALID_INPUT as u8),
                Error::Config(_) | Error::ConfigValidation { .. } | Error::TomlParse(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    // Load configuration
    let mut config = if args.config.exists() {
        Config::load(&args.config)?
    } else {
        tracing::debug!(
            "Configuration file not found: {}, using defaults",
            args.config.display()
        );
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);
    validate_config(&config)?;

    let kind = NameKind::from(args.kind);
    let options = config.options_for(kind);
    tracing::debug!("Producing {} names with {:?}", kind, options);

    let inputs = if args.inputs.is_empty() {
        read_stdin_lines()?
    } else {
        args.inputs.clone()
    };

    let mut failed = 0usize;
    for input in &inputs {
        let result = kind.apply(input, &options);

        if args.json {
            print_record(&Record::from_result(input, &result))?;
        }

        match result {
            Ok(name) => {
                if !args.json {
                    print_name(&name);
                }
            }
            Err(e) => {
                if !args.json {
                    print_error(&format!("{}", e));
                }
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(Error::InvalidInput(format!(
            "{} of {} input(s) rejected",
            failed,
            inputs.len()
        )));
    }

    Ok(())
}

/// Read one input per line from stdin, dropping invalid UTF-8.
fn read_stdin_lines() -> Result<Vec<String>> {
    let stdin = io::stdin();
    let mut inputs = Vec::new();

    for line in stdin.lock().split(b'\n') {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        inputs.push(decode_discarding_invalid(&line));
    }

    Ok(inputs)
}
