use std::time::Duration;

use crate::application::ports::{TranscriptionJobError, TranscriptionJobRunner};
use crate::domain::TranscriptionJobStatus;

/// Shortest pause between two status checks, whatever the policy says.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Backoff schedule for polling a job.
///
/// The first wait is `initial_interval`, each following wait is multiplied by
/// `multiplier` and capped at `max_interval`. No wait is shorter than
/// [`MIN_POLL_INTERVAL`] and the sum of all waits never exceeds `max_wait`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PollPolicy {
    pub initial_interval: Duration,
    pub max_interval: Duration,
    pub multiplier: f64,
    pub max_wait: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            initial_interval: Duration::from_secs(5),
            max_interval: Duration::from_secs(30),
            multiplier: 1.5,
            max_wait: Duration::from_secs(15 * 60),
        }
    }
}

impl PollPolicy {
    /// Constant interval, no growth.
    pub fn fixed(interval: Duration, max_wait: Duration) -> Self {
        Self {
            initial_interval: interval,
            max_interval: interval,
            multiplier: 1.0,
            max_wait,
        }
    }

    fn next_interval(&self, current: Duration) -> Duration {
        let grown = current.as_secs_f64() * self.multiplier.max(1.0);
        Duration::try_from_secs_f64(grown)
            .map_or(self.max_interval, |next| next.min(self.max_interval))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedJob {
    pub transcript_uri: Option<String>,
    pub polls: u32,
    pub waited: Duration,
}

#[derive(Debug, thiserror::Error)]
pub enum PollError {
    #[error("job failed: {reason}")]
    Failed { reason: String },
    #[error("job still running after {waited:?}")]
    TimedOut { waited: Duration },
    #[error(transparent)]
    Status(#[from] TranscriptionJobError),
}

/// Drives `SUBMITTED -> IN_PROGRESS -> {COMPLETED | FAILED}` for one job.
///
/// Status is checked right away; the poller only sleeps between two
/// consecutive `IN_PROGRESS` observations.
pub struct JobPoller<'a> {
    runner: &'a dyn TranscriptionJobRunner,
    policy: PollPolicy,
}

impl<'a> JobPoller<'a> {
    pub fn new(runner: &'a dyn TranscriptionJobRunner, policy: PollPolicy) -> Self {
        Self { runner, policy }
    }

    pub async fn wait_for_completion(&self, job_name: &str) -> Result<CompletedJob, PollError> {
        let mut interval = self.policy.initial_interval;
        let mut waited = Duration::ZERO;
        let mut polls = 0u32;

        loop {
            polls += 1;
            let status = self.runner.status(job_name).await?;
            tracing::debug!(
                job_name,
                polls,
                status = %status,
                terminal = status.is_terminal(),
                "Polled transcription job"
            );

            match status {
                TranscriptionJobStatus::Completed { transcript_uri } => {
                    return Ok(CompletedJob {
                        transcript_uri,
                        polls,
                        waited,
                    });
                }
                TranscriptionJobStatus::Failed { reason } => {
                    return Err(PollError::Failed { reason });
                }
                TranscriptionJobStatus::InProgress => {
                    let remaining = self.policy.max_wait.saturating_sub(waited);
                    if remaining.is_zero() {
                        return Err(PollError::TimedOut { waited });
                    }
                    let pause = interval.max(MIN_POLL_INTERVAL).min(remaining);
                    tokio::time::sleep(pause).await;
                    waited += pause;
                    interval = self.policy.next_interval(interval);
                }
            }
        }
    }
}
