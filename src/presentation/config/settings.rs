use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Runtime configuration, assembled from environment variables once
/// at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub pool: PoolSettings,
    pub acquisition: AcquisitionSettings,
    pub diarization: DiarizationSettings,
    pub transcription: TranscriptionSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub size: usize,
    pub lease_timeout: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct AcquisitionSettings {
    pub ytdlp_binary: PathBuf,
    pub downloads_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct DiarizationSettings {
    pub endpoint: String,
    pub auth_token: String,
    pub min_speakers: usize,
    pub max_speakers: usize,
    pub save_rttm: bool,
    pub rttm_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct TranscriptionSettings {
    pub provider: TranscriptionProviderSetting,
    pub model: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptionProviderSetting {
    Local,
    OpenAi,
}

impl TryFrom<String> for TranscriptionProviderSetting {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "openai" => Ok(Self::OpenAi),
            other => Err(format!(
                "Invalid transcription provider: {}. Expected: local or openai",
                other
            )),
        }
    }
}

impl Settings {
    /// Reads every setting from the environment. The diarization
    /// token has no default: startup fails immediately without it.
    pub fn from_env() -> Result<Self, SettingsError> {
        let auth_token = std::env::var("HUGGINGFACE_AUTH_TOKEN")
            .map_err(|_| SettingsError::MissingVar("HUGGINGFACE_AUTH_TOKEN"))?;

        let provider = TranscriptionProviderSetting::try_from(env_or(
            "TRANSCRIPTION_PROVIDER",
            "local",
        ))
        .map_err(|message| SettingsError::Invalid {
            var: "TRANSCRIPTION_PROVIDER",
            message,
        })?;

        Ok(Self {
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port: parse_or("SERVER_PORT", 3000)?,
            },
            pool: PoolSettings {
                size: parse_or("MODEL_POOL_SIZE", 2)?,
                lease_timeout: std::env::var("POOL_LEASE_TIMEOUT_SECS")
                    .ok()
                    .map(|raw| {
                        raw.parse::<u64>()
                            .map(Duration::from_secs)
                            .map_err(|e| SettingsError::Invalid {
                                var: "POOL_LEASE_TIMEOUT_SECS",
                                message: e.to_string(),
                            })
                    })
                    .transpose()?,
            },
            acquisition: AcquisitionSettings {
                ytdlp_binary: PathBuf::from(env_or("YTDLP_BINARY", "yt-dlp")),
                downloads_dir: PathBuf::from(env_or("DOWNLOADS_DIR", "youtube_downloads")),
            },
            diarization: DiarizationSettings {
                endpoint: env_or("DIARIZATION_ENDPOINT", "http://localhost:8000"),
                auth_token,
                min_speakers: parse_or("MIN_SPEAKERS", 2)?,
                max_speakers: parse_or("MAX_SPEAKERS", 7)?,
                save_rttm: parse_or("SAVE_RTTM", true)?,
                rttm_dir: PathBuf::from(env_or("RTTM_DIR", "rttm_files")),
            },
            transcription: TranscriptionSettings {
                provider,
                model: env_or("WHISPER_MODEL", "openai/whisper-base"),
                api_key: std::env::var("OPENAI_API_KEY").ok(),
                base_url: std::env::var("OPENAI_BASE_URL").ok(),
            },
        })
    }
}

fn env_or(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_string())
}

fn parse_or<T>(var: &'static str, default: T) -> Result<T, SettingsError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(var) {
        Ok(raw) => raw.parse().map_err(|e: T::Err| SettingsError::Invalid {
            var,
            message: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {var}: {message}")]
    Invalid { var: &'static str, message: String },
}
