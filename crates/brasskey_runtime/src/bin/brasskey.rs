//! Brasskey CLI entry point.

use brasskey_runtime::{Repl, Session};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    script: Option<PathBuf>,
    commands: Vec<String>,
    seed: Option<u64>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    show_diagnostics: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--diagnostics" => config.show_diagnostics = true,
            "-c" | "--command" => {
                i += 1;
                if i >= args.len() {
                    return Err("--command requires a value".into());
                }
                config.commands.push(args[i].clone());
            }
            "--seed" => {
                i += 1;
                if i >= args.len() {
                    return Err("--seed requires a value".into());
                }
                config.seed = Some(
                    args[i]
                        .parse()
                        .map_err(|_| format!("invalid --seed value: {}", args[i]))?,
                );
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => {
                if config.script.is_some() {
                    return Err("only one script file may be given".into());
                }
                config.script = Some(PathBuf::from(path));
            }
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("brasskey {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let Some(script) = &config.script else {
        return Err("no script file given (try --help)".into());
    };
    let source = fs::read_to_string(script)
        .map_err(|e| format!("failed to read {}: {e}", script.display()))?;

    let mut session = Session::from_script(&source, config.seed.unwrap_or(0))?;

    if config.show_diagnostics {
        for diagnostic in session.drain_diagnostics() {
            eprintln!("warning: {diagnostic}");
        }
    }

    for command in &config.commands {
        println!("> {command}");
        println!("{}", session.command(command));
    }

    if config.batch_mode || !config.commands.is_empty() {
        return Ok(());
    }

    let mut repl = Repl::new(session)?;
    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "brasskey - Scripted scene and action interpreter

USAGE:
    brasskey [OPTIONS] SCRIPT

ARGUMENTS:
    SCRIPT    The adventure script to load

OPTIONS:
    -h, --help           Print help information
    -V, --version        Print version information
    -b, --batch          Load the script and exit (no prompt)
    -c, --command CMD    Run a command and print its response (repeatable)
    --seed N             Seed for deflection messages (default 0)
    --diagnostics        Print script anomalies to stderr after loading

EXAMPLES:
    brasskey manor.script                    Play interactively
    brasskey -c 'open door' manor.script     Run one command and exit
    brasskey --seed 7 manor.script           Fixed deflection sequence"
    );
}
