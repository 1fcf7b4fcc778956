use std::path::{Path, PathBuf};

const ENV_DATA_DIR: &str = "CONTENTFLOW_DATA_DIR";

pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

pub fn data_dir_from_env() -> Option<PathBuf> {
    std::env::var(ENV_DATA_DIR)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// An explicit path wins, then the environment, then the platform data dir.
pub fn resolve_data_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Some(path) = data_dir_from_env() {
        return path;
    }
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("contentflow")
}
