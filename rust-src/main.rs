//! fitpulse CLI
//!
//! Daily fitness metrics with trailing-week summaries.

mod aggregation;
mod cli;
mod commands;
mod config;
mod data;
mod error;
mod models;
mod storage;


fn init_logging() {
    let filter = std::env::var("FITPULSE_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());

    let env_filter = tracing_subscriber::EnvFilter::try_new(filter)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
}


fn main() {
    init_logging();

    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
