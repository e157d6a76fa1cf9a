use std::sync::Arc;

use dexboard::config::{load_config, print_schema};
use dexboard::startup::run;
use dexboard::utils::logger::init_logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::args().skip(1).any(|arg| arg == "--schema") {
        print_schema()?;
        return Ok(());
    }

    let config = load_config();
    init_logging(&config.logging)?;

    run(Arc::new(config)).await
}
