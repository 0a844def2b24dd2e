mod mock_engine;
mod pyannote_api_engine;
pub mod rttm;

pub use mock_engine::MockDiarizationEngine;
pub use pyannote_api_engine::PyannoteApiEngine;
