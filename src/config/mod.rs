use std::env;
use std::path::PathBuf;

use crate::storage::DEFAULT_STORE_FILE;

/// Environment variable that overrides the store file location.
pub const STORE_FILE_ENV: &str = "EXPENSE_CORE_FILE";
/// Environment variable that switches the CLI into script mode.
pub const SCRIPT_MODE_ENV: &str = "EXPENSE_CORE_CLI_SCRIPT";

/// Runtime settings, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub store_file: PathBuf,
    pub script_mode: bool,
}

impl Settings {
    pub fn from_env() -> Self {
        let store_file = env::var_os(STORE_FILE_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE));
        let script_mode = env::var_os(SCRIPT_MODE_ENV).is_some();
        Self {
            store_file,
            script_mode,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            store_file: PathBuf::from(DEFAULT_STORE_FILE),
            script_mode: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_working_directory_store() {
        let settings = Settings::default();
        assert_eq!(settings.store_file, PathBuf::from("expenses.json"));
        assert!(!settings.script_mode);
    }
}
