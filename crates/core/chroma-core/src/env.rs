use crate::error::{AppError, AppResult};
use std::path::PathBuf;

/// Environment variable to override the default Chroma data directory.
const ENV_DATA_DIR: &str = "CHROMA_HOME";

/// Returns the base directory for Chroma data.
///
/// Checks for `CHROMA_HOME` first; falls back to `~/.chroma`. Avoids
/// panicking in environments without a home directory.
pub fn get_base_dir() -> AppResult<PathBuf> {
    if let Ok(env_path) = std::env::var(ENV_DATA_DIR) {
        let path = PathBuf::from(env_path);
        if !path.is_absolute() {
            return Err(AppError::Config(format!(
                "Environment variable {} must be an absolute path, got: {:?}",
                ENV_DATA_DIR, path
            )));
        }
        return Ok(path);
    }

    match dirs::home_dir() {
        Some(home) => Ok(home.join(".chroma")),
        None => Err(AppError::Config(
            "Cannot determine home directory. Please set CHROMA_HOME environment variable."
                .to_string(),
        )),
    }
}
