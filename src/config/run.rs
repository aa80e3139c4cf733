use crate::io::read_json_file;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub report_json: Option<PathBuf>,
    pub xplets_json: Option<PathBuf>,
}

/// Inputs and outputs of one `reco_demo` run.
#[derive(Clone, Debug, Deserialize)]
pub struct RunConfig {
    pub geometry: PathBuf,
    pub hits: PathBuf,
    pub config: PathBuf,
    #[serde(default)]
    pub output: OutputConfig,
}

pub fn load_run_config(path: &Path) -> Result<RunConfig, String> {
    read_json_file(path)
}
