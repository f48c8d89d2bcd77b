//! Load operation - configuration and model from disk.

use std::path::Path;

use wrapgen_codegen::EngineConfig;
use wrapgen_ir::Api;
use wrapgen_manifest::{CONFIG_FILENAME, Config, ModelDescription, Result};

/// Everything one engine run needs.
#[derive(Debug)]
pub struct Inputs {
    pub api: Api,
    pub config: EngineConfig,
}

/// Load the model at `model_path` and the configuration.
///
/// Without an explicit `config_path`, `wrapgen.toml` is read from the
/// current directory when it exists; otherwise defaults apply.
pub fn load(model_path: &Path, config_path: Option<&Path>) -> Result<Inputs> {
    let config = match config_path {
        Some(path) => Config::from_file(path)?,
        None if Path::new(CONFIG_FILENAME).exists() => Config::from_file(CONFIG_FILENAME)?,
        None => Config::default(),
    };
    let model = ModelDescription::from_file(model_path)?;

    tracing::debug!(
        model = %model_path.display(),
        namespaces = model.namespaces.len(),
        "loaded model"
    );

    Ok(Inputs {
        api: model.lower(),
        config: config.engine_config(),
    })
}
