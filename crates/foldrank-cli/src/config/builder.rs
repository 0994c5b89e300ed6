use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::OrderArgs;
use crate::error::{CliError, Result};
use foldrank::engine::config as core_config;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Merges CLI arguments, the optional TOML config file, and built-in defaults, in that
/// order of precedence.
pub fn build_config(args: &OrderArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let mut file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let service_file = file_config.service.take().unwrap_or_default();

    let copies = args
        .copies
        .or(file_config.copies)
        .unwrap_or(defaults.copies);
    let cache_dir = args
        .pdb_dir
        .clone()
        .or(file_config.cache_dir)
        .unwrap_or_else(|| PathBuf::from(&defaults.cache_dir));
    let offline = args.offline || file_config.offline.unwrap_or(false);
    let endpoint = args
        .endpoint
        .clone()
        .or(service_file.endpoint)
        .unwrap_or(defaults.endpoint);
    let timeout_secs = args
        .timeout
        .or(service_file.timeout_secs)
        .unwrap_or(defaults.timeout_secs);

    debug!(
        "Resolved configuration: copies={}, cache_dir={:?}, offline={}, endpoint={}, timeout={}s",
        copies, &cache_dir, offline, &endpoint, timeout_secs
    );

    let core_config = core_config::RankingConfigBuilder::new()
        .copies(copies)
        .cache_dir(cache_dir)
        .offline(offline)
        .endpoint(endpoint)
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        input_path: args.input.clone(),
        output_base: args.output.clone(),
        core_config,
    })
}
