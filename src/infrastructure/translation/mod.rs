mod aws_translator;
mod mock_translator;

pub use aws_translator::AwsTranslator;
pub use mock_translator::MockTranslator;
