mod settings;

pub use settings::{
    AcquisitionSettings, DiarizationSettings, PoolSettings, ServerSettings, Settings,
    SettingsError, TranscriptionProviderSetting, TranscriptionSettings,
};
