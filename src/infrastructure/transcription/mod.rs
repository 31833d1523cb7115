mod aws_transcribe_runner;
mod mock_transcription_runner;

pub use aws_transcribe_runner::AwsTranscribeRunner;
pub use mock_transcription_runner::MockTranscriptionJobRunner;
