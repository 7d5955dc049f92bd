//! Command implementations

mod check;
mod config_cmd;
mod kinds;
mod make;
mod moderate;
mod source;

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use plugreq::config::Config;

pub use check::check;
pub use config_cmd::config_cmd;
pub use kinds::kinds;
pub use make::make;
pub use moderate::{ModerateArgs, moderate};
pub use source::source;

/// Read a command input: a file path, or `-` for stdin
pub fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text).context("failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(input).with_context(|| format!("failed to read {input}"))
}

/// Load config from an explicit path or the default location
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    path.map_or_else(Config::load, Config::load_from)
}

/// Run a future on a single-threaded runtime
pub fn block_on<F: Future>(future: F) -> anyhow::Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start runtime")?;
    Ok(runtime.block_on(future))
}
