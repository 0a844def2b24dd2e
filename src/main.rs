use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use kuching::application::ports::{AudioAcquirer, SpeakerCountBounds};
use kuching::application::services::{CaptionPipeline, ModelPool};
use kuching::infrastructure::acquisition::YtDlpAcquirer;
use kuching::infrastructure::audio::SymphoniaAudioDecoder;
use kuching::infrastructure::diarization::PyannoteApiEngine;
use kuching::infrastructure::observability::{TracingConfig, init_tracing};
use kuching::infrastructure::transcription::{TranscriptionEngineFactory, TranscriptionProvider};
use kuching::presentation::{AppState, Settings, TranscriptionProviderSetting, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;

    init_tracing(TracingConfig::default(), settings.server.port);

    let acquirer: Arc<dyn AudioAcquirer> = Arc::new(YtDlpAcquirer::new(
        settings.acquisition.ytdlp_binary.clone(),
        settings.acquisition.downloads_dir.clone(),
    )?);

    let speaker_bounds = SpeakerCountBounds {
        min: settings.diarization.min_speakers,
        max: settings.diarization.max_speakers,
    };

    let provider = match settings.transcription.provider {
        TranscriptionProviderSetting::Local => TranscriptionProvider::Local,
        TranscriptionProviderSetting::OpenAi => TranscriptionProvider::OpenAi,
    };

    let rttm_dir = settings
        .diarization
        .save_rttm
        .then(|| settings.diarization.rttm_dir.clone());

    tracing::info!(instances = settings.pool.size, "Loading caption engine pool");

    let mut engines = Vec::with_capacity(settings.pool.size);
    for instance in 0..settings.pool.size {
        tracing::info!(instance, "Loading caption engine");
        let diarizer = Arc::new(PyannoteApiEngine::new(
            settings.diarization.endpoint.clone(),
            settings.diarization.auth_token.clone(),
            rttm_dir.clone(),
        )?);
        let recognizer = TranscriptionEngineFactory::create(
            provider,
            &settings.transcription.model,
            settings.transcription.api_key.clone(),
            settings.transcription.base_url.clone(),
        )?;
        engines.push(CaptionPipeline::new(
            Arc::clone(&acquirer),
            diarizer,
            Arc::new(SymphoniaAudioDecoder),
            recognizer,
            speaker_bounds,
        ));
    }

    let engine_pool = Arc::new(ModelPool::new(engines));

    let addr: SocketAddr =
        format!("{}:{}", settings.server.host, settings.server.port).parse()?;

    let state = AppState {
        engine_pool,
        settings,
    };
    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
