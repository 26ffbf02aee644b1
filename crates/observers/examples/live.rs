//! Interactive vibrating string.
//!
//! # Usage
//!
//! ```text
//! cargo run --example live --features plot
//! cargo run --example live --features plot -- twang.toml
//! ```
//!
//! The optional argument is a TOML file of startup settings. Any setting left
//! out keeps its default, for example:
//!
//! ```toml
//! resolution = 200
//! damping = 1.5
//!
//! [pluck]
//! position = 0.05
//! ```

use std::error::Error;

use twang_core::{Config, SimulationEngine};
use twang_observers::LiveView;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let config = match std::env::args().nth(1) {
        Some(path) => toml::from_str::<Config>(&std::fs::read_to_string(path)?)?,
        None => Config::default(),
    };
    config.validate()?;

    let engine = SimulationEngine::from_config(&config)?;
    tracing::info!(resolution = config.resolution, "starting live view");

    LiveView::new(engine).with_pluck(config.pluck).show()?;
    Ok(())
}
