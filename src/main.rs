#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use crate::core::system::System;
use std::process::ExitCode;

mod core;
mod r#macro;
mod model;
mod ui;
mod utils;

fn main() -> ExitCode {
    let system = match System::initialize() {
        Ok(system) => system,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let outcome = system.run();
    if let Err(err) = &outcome {
        err.log();
    }
    system.terminate();

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
