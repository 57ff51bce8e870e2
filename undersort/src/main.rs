// src/main.rs
use clap::Parser;
use env_logger::Env;
use std::process::ExitCode;

use undersort::{Args, ConsoleLogger, execute};

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let args = Args::parse();
    ExitCode::from(execute(&args, &ConsoleLogger))
}
