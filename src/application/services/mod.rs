mod job_poller;
mod pipeline;
mod pipeline_error;
mod pipeline_types;

pub use job_poller::{CompletedJob, JobPoller, MIN_POLL_INTERVAL, PollError, PollPolicy};
pub use pipeline::{PipelineConfig, PipelineService};
pub use pipeline_error::{PipelineError, Stage, UpstreamError};
pub use pipeline_types::{
    AudioAttachment, PipelineResult, TranscribedAudio, Translation, UploadRequest, UploadedAudio,
};
