use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use astlint::cli::{Cli, Commands};
use astlint::config::{Config, CONFIG_FILE_NAME};
use astlint::engine;

// Exit codes: 0 pass, 1 violations found, 2 the engine could not run
// (bad config, duplicate rule ids, interrupted run).
const EXIT_VIOLATIONS: u8 = 1;
const EXIT_FATAL: u8 = 2;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("astlint=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run_command(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_FATAL)
        }
    }
}

fn run_command(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Check {
            path,
            format,
            config,
            fail_on,
        } => {
            let project_root = path.canonicalize().unwrap_or(path);
            let mut cfg = Config::load(config.as_deref(), &project_root)?;
            if let Some(fail_on) = fail_on {
                cfg.fail_on = fail_on;
            }

            let registry = astlint::rules::build_registry(&cfg)?;
            let files = engine::scanner::scan(&project_root, &cfg);
            let result = engine::run(&project_root, &files, &registry, &cfg);

            let output_format = format.unwrap_or(cfg.format);
            print!(
                "{}",
                astlint::cli::output::render(&result, &project_root, output_format)
            );

            if !result.complete {
                return Ok(ExitCode::from(EXIT_FATAL));
            }
            if !result.pass {
                return Ok(ExitCode::from(EXIT_VIOLATIONS));
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Init => {
            let path = std::env::current_dir()?.join(CONFIG_FILE_NAME);
            if path.exists() {
                eprintln!("{CONFIG_FILE_NAME} already exists");
                return Ok(ExitCode::from(EXIT_FATAL));
            }
            std::fs::write(&path, Config::default_toml())?;
            println!("Created {CONFIG_FILE_NAME}");
            Ok(ExitCode::SUCCESS)
        }
        Commands::Explain { rule: None } => {
            println!("{}", astlint::cli::explain::list_rules());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Explain { rule: Some(rule) } => {
            match astlint::cli::explain::explain(&rule) {
                Some(text) => {
                    println!("{text}");
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    eprintln!("Unknown rule: {rule}\n");
                    eprintln!("{}", astlint::cli::explain::list_rules());
                    Ok(ExitCode::from(EXIT_FATAL))
                }
            }
        }
    }
}
