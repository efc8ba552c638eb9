use std::path::PathBuf;
use std::time::Duration;

/// Process configuration, assembled once at startup and handed to adapters
/// at construction. Nothing reads the environment after this point.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub tools: ToolSettings,
    pub storage: StorageSettings,
    pub verification: VerificationSettings,
    pub static_assets: StaticAssetSettings,
}

impl Settings {
    /// Reads the environment, then lets the first CLI argument override the
    /// static asset root.
    pub fn from_env() -> Self {
        let mut settings = Self {
            server: ServerSettings::default(),
            tools: ToolSettings::default(),
            storage: StorageSettings::default(),
            verification: VerificationSettings::default(),
            static_assets: StaticAssetSettings::default(),
        };

        if let Some(root) = std::env::args().nth(1) {
            settings.static_assets.root = PathBuf::from(root);
        }

        settings
    }
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8085),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ToolSettings {
    pub tesseract_bin: PathBuf,
    pub convert_bin: PathBuf,
    pub timeout_secs: u64,
}

impl ToolSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            tesseract_bin: std::env::var("TESSERACT_BIN")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("/usr/local/bin/tesseract")),
            convert_bin: std::env::var("CONVERT_BIN")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("/usr/local/bin/convert")),
            timeout_secs: std::env::var("TOOL_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub temp_dir: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            temp_dir: std::env::var("SCAN_TEMP_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| std::env::temp_dir()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct VerificationSettings {
    pub marker: String,
}

impl Default for VerificationSettings {
    fn default() -> Self {
        Self {
            marker: std::env::var("VERIFY_MARKER").unwrap_or_else(|_| "Send".to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StaticAssetSettings {
    pub root: PathBuf,
}

impl Default for StaticAssetSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }
}
