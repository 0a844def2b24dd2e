mod mock_acquirer;
mod ytdlp_acquirer;

pub use mock_acquirer::MockAudioAcquirer;
pub use ytdlp_acquirer::YtDlpAcquirer;
