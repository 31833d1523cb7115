mod aws_polly_synthesizer;
mod mock_synthesizer;

pub use aws_polly_synthesizer::AwsPollySynthesizer;
pub use mock_synthesizer::MockSynthesizer;
