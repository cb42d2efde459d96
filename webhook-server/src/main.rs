//! CrystalPay webhook HTTP entrypoint.
//!
//! Serves `POST <webhook_path>` for CrystalPay payment notifications. Each
//! paid invoice is logged and re-read from the API to confirm its state.
//!
//! Environment:
//! - `.env` values loaded at startup
//! - `CONFIG` points at the JSON config file
//! - `HOST`, `PORT` control binding address
//! - `RUST_LOG` sets the log filter

mod config;
mod confirm;
mod run;
mod sig_down;
mod telemetry;

use std::process;

use crate::run::run;

#[tokio::main]
async fn main() {
    let result = run().await;
    if let Err(e) = result {
        println!("{e}");
        process::exit(1)
    }
}
