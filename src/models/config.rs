use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserConfig {
    /// Root directory for generated puzzle folders; the current working
    /// directory when unset.
    #[serde(default)]
    pub root: Option<PathBuf>,
}

impl UserConfig {
    pub fn root_dir(&self) -> PathBuf {
        match &self.root {
            Some(root) => root.clone(),
            None => env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("advent").join("config.json"))
}

pub fn load_config() -> UserConfig {
    let path = match get_config_path() {
        Some(path) => path,
        None => return UserConfig::default(),
    };
    if !path.exists() {
        return UserConfig::default();
    }

    match fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
        Err(_) => UserConfig::default(),
    }
}
