//! Command-line argument parsing and help for rang.
//!
//! This module handles all CLI flag parsing used for config initialization and help.
//!
//! When invoked with no args/flags (rang), rang simply launches the TUI

use crate::app::Keymap;
use crate::config::Config;

#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    RunApp,
    Exit,
}

/// Flags understood on the command line.
#[derive(Debug, PartialEq, Eq)]
enum Flag {
    Version,
    Help,
    Keybinds,
    Init,
}

pub fn handle_args() -> CliAction {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match parse_flag(&args) {
        Ok(None) => CliAction::RunApp,
        Ok(Some(Flag::Version)) => {
            print_version();
            CliAction::Exit
        }
        Ok(Some(Flag::Help)) => {
            print_help();
            CliAction::Exit
        }
        Ok(Some(Flag::Keybinds)) => {
            print_keybinds();
            CliAction::Exit
        }
        Ok(Some(Flag::Init)) => {
            let config_path = Config::default_path();
            match Config::generate_default(&config_path) {
                Ok(()) => println!("Default config written to {}", config_path.display()),
                Err(e) => eprintln!("Error: {}", e),
            }
            CliAction::Exit
        }
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!("Try --help for available options");
            CliAction::Exit
        }
    }
}

fn parse_flag(args: &[String]) -> Result<Option<Flag>, String> {
    match args {
        [] => Ok(None),
        [arg] => match arg.as_str() {
            "--version" | "-v" => Ok(Some(Flag::Version)),
            "-h" | "--help" => Ok(Some(Flag::Help)),
            "--keybinds" | "--keybind" | "--key" => Ok(Some(Flag::Keybinds)),
            "--init" => Ok(Some(Flag::Init)),
            other => Err(format!("Unknown argument: {}", other)),
        },
        _ => Err("Error: rang accepts only one argument at a time.".to_string()),
    }
}

fn print_version() {
    println!("rang {}", env!("CARGO_PKG_VERSION"));
}

fn print_help() {
    println!(
        r#"rang - A two-pane terminal file browser

USAGE:
  rang [OPTION]

Opens in the current working directory.

OPTIONS:
      --init              Generate the default configuration file
      --keybinds          Display the active keybinds
  -h, --help              Print help information
  -v, --version           Display the current installed version of rang

ENVIRONMENT:
  RANG_CONFIG             Override the default config path
"#
    );
}

fn print_keybinds() {
    let (config, _) = Config::load();

    println!("\n=========================\n Key Bindings\n=========================");
    for (label, keys) in Keymap::describe(&config) {
        println!("  {:<24}  {}", label, keys);
    }
    println!(
        r#"
  Syntax Reference:
    Modifiers: <c-x> (Ctrl), <m-x>/<a-x> (Alt/Meta), <s-x> (Shift)
    Standard:  ctrl+x, alt+x, shift+x, meta+x
    Special:   "space", "back", "enter", "esc", "tab", "f1".."f12"
"#
    );
}
