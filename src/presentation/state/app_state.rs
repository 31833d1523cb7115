use std::sync::Arc;

use crate::application::services::PipelineService;
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<PipelineService>,
    pub settings: Settings,
}

impl AppState {
    pub fn new(pipeline: Arc<PipelineService>, settings: Settings) -> Self {
        Self { pipeline, settings }
    }
}
