//! bGeigie Nano configuration simulator for desktop.
//!
//! Resolves the configuration table the way the firmware does at boot and
//! prints it, so a settings file can be checked before it goes on the SD card.
//!
//! ```text
//! simulator                 # compiled-in table
//! simulator SAFECAST.TXT    # table with settings-file overrides
//! ```

mod report;

use std::process::ExitCode;
use std::{env, fs};

use nano_common::{ProMini, Settings};

use crate::report::write_report;

fn main() -> ExitCode {
    let settings = match env::args().nth(1) {
        Some(path) => {
            let text = match fs::read_to_string(&path) {
                Ok(text) => text,
                Err(e) => {
                    eprintln!("{path}: {e}");
                    return ExitCode::FAILURE;
                }
            };
            match Settings::parse(&text) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("{path}: {e}");
                    return ExitCode::FAILURE;
                }
            }
        }
        None => Settings::default(),
    };

    let requested = settings.flags;
    let config = match settings.build_for::<ProMini>() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut out = String::new();
    if write_report::<ProMini>(&mut out, &config, &requested).is_err() {
        return ExitCode::FAILURE;
    }
    print!("{out}");
    ExitCode::SUCCESS
}
