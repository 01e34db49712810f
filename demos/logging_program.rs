//! Logging Example
//!
//! Log effects emit their events when they run, in program order.
//! Set RUST_LOG=debug to see the task events.

use std::time::Duration;

use eddy::prelude::*;
use tracing_subscriber::EnvFilter;

fn task(name: &'static str, delay: Duration) -> BoxedEffect<(), String, ()> {
    sleep(delay)
        .and_then(move |_| log_debug(format!("{} done", name)))
        .boxed()
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let program = log::<String, ()>("start")
        .and_then(|_| task("task1", Duration::from_secs(2)))
        .and_then(|_| task("task2", Duration::from_secs(1)))
        .and_then(|_| log("done"));

    if let Err(error) = program.run_standalone().await {
        eprintln!("program failed: {}", error);
    }
}
