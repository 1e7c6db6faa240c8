//! Lotto Picker Service Entry Point
//!
//! Loads configuration and starts the HTTP server.

use lotto_picker::run;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run().await
}
