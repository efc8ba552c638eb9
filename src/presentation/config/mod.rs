mod settings;

pub use settings::{
    ServerSettings, Settings, StaticAssetSettings, StorageSettings, ToolSettings,
    VerificationSettings,
};
