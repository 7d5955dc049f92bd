//! Show or initialize the configuration

use std::path::Path;
use std::process::ExitCode;

use plugreq::config::Config;
use plugreq::output::{OperationResult, OutputMode};

/// Show the effective config, or write the defaults with `init`
pub fn config_cmd(
    config: &Config,
    path: Option<&Path>,
    init: bool,
    mode: OutputMode,
) -> anyhow::Result<ExitCode> {
    let path = path.map_or_else(Config::config_path, Path::to_path_buf);

    if init {
        if path.exists() {
            anyhow::bail!("config already exists at {}", path.display());
        }
        Config::default().save_to(&path)?;
        OperationResult {
            success: true,
            message: format!("Created {}", path.display()),
        }
        .render(mode);
        return Ok(ExitCode::SUCCESS);
    }

    match mode {
        OutputMode::Human => {
            println!("# {}", path.display());
            print!("{}", toml::to_string_pretty(config)?);
        },
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(config)?),
    }
    Ok(ExitCode::SUCCESS)
}
