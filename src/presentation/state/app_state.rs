use std::sync::Arc;

use crate::application::services::{CaptionPipeline, ModelPool};
use crate::presentation::config::Settings;

/// Shared handler state: the engine pool built once at startup plus
/// the resolved settings.
#[derive(Clone)]
pub struct AppState {
    pub engine_pool: Arc<ModelPool<CaptionPipeline>>,
    pub settings: Settings,
}
