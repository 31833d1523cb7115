use std::sync::Arc;

use aws_config::{BehaviorVersion, Region};

use crate::application::ports::{
    ObjectStoreError, ObjectStoreGateway, SpeechSynthesizer, TextTranslator,
    TranscriptionJobRunner,
};
use crate::infrastructure::storage::StoreFactory;
use crate::infrastructure::synthesis::{AwsPollySynthesizer, MockSynthesizer};
use crate::infrastructure::transcription::{AwsTranscribeRunner, MockTranscriptionJobRunner};
use crate::infrastructure::translation::{AwsTranslator, MockTranslator};
use crate::presentation::config::{ProviderKind, Settings};

/// The four adapters a pipeline needs.
pub struct Providers {
    pub store: Arc<dyn ObjectStoreGateway>,
    pub transcriber: Arc<dyn TranscriptionJobRunner>,
    pub translator: Arc<dyn TextTranslator>,
    pub synthesizer: Arc<dyn SpeechSynthesizer>,
}

pub struct ProviderFactory;

impl ProviderFactory {
    pub async fn create(settings: &Settings) -> Result<Providers, ObjectStoreError> {
        let store = StoreFactory::create(&settings.storage, &settings.aws.region)?;

        match settings.providers.kind {
            ProviderKind::Aws => {
                tracing::info!(region = %settings.aws.region, "Creating AWS providers");
                let sdk_config = aws_config::defaults(BehaviorVersion::latest())
                    .region(Region::new(settings.aws.region.clone()))
                    .load()
                    .await;

                Ok(Providers {
                    transcriber: Arc::new(AwsTranscribeRunner::new(&sdk_config, store.bucket())),
                    translator: Arc::new(AwsTranslator::new(&sdk_config)),
                    synthesizer: Arc::new(AwsPollySynthesizer::new(&sdk_config)),
                    store,
                })
            }
            ProviderKind::Mock => {
                tracing::info!("Creating mock providers");
                Ok(Providers {
                    transcriber: Arc::new(MockTranscriptionJobRunner::completing_with(
                        settings.providers.mock_transcript.clone(),
                        store.clone(),
                    )),
                    translator: Arc::new(MockTranslator::new()),
                    synthesizer: Arc::new(MockSynthesizer::writing_to(store.clone())),
                    store,
                })
            }
        }
    }
}
