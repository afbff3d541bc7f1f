//! Twentyfour terminal application.
//!
//! This is the main entry point for playing the 24 game in a terminal.

use std::{
    io::{self, BufRead as _},
    process::ExitCode,
    sync::mpsc,
    thread,
};

use clap::Parser as _;
use twentyfour_app::{
    app::App,
    config::{AppConfig, Args},
};

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let config = match AppConfig::from_args(Args::parse()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(2);
        }
    };
    log::info!(
        "starting twentyfour {}, config={config:?}",
        env!("CARGO_PKG_VERSION")
    );

    let app = match App::new(&config) {
        Ok(app) => app,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    let mut stdout = io::stdout().lock();
    match app.run(&rx, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
