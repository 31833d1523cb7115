use std::time::Duration;

use async_trait::async_trait;

use babelcast::application::ports::{TranscriptionJobError, TranscriptionJobRunner};
use babelcast::application::services::{JobPoller, PollError, PollPolicy};
use babelcast::domain::{TranscriptionJob, TranscriptionJobStatus};
use babelcast::infrastructure::transcription::MockTranscriptionJobRunner;

fn in_progress() -> TranscriptionJobStatus {
    TranscriptionJobStatus::InProgress
}

fn completed() -> TranscriptionJobStatus {
    TranscriptionJobStatus::Completed {
        transcript_uri: Some("https://s3.eu-west-3.amazonaws.com/b/t.json".to_string()),
    }
}

fn doubling_policy() -> PollPolicy {
    PollPolicy {
        initial_interval: Duration::from_secs(5),
        max_interval: Duration::from_secs(30),
        multiplier: 2.0,
        max_wait: Duration::from_secs(600),
    }
}

struct UnreachableRunner;

#[async_trait]
impl TranscriptionJobRunner for UnreachableRunner {
    async fn submit(&self, _job: &TranscriptionJob) -> Result<(), TranscriptionJobError> {
        Ok(())
    }

    async fn status(&self, _job_name: &str) -> Result<TranscriptionJobStatus, TranscriptionJobError> {
        Err(TranscriptionJobError::StatusFailed("connection reset".to_string()))
    }
}

#[tokio::test(start_paused = true)]
async fn given_immediately_completed_job_when_polling_then_returns_without_waiting() {
    let runner = MockTranscriptionJobRunner::scripted(vec![completed()]);
    let start = tokio::time::Instant::now();

    let done = JobPoller::new(&runner, doubling_policy())
        .wait_for_completion("job-1")
        .await
        .unwrap();

    assert_eq!(done.polls, 1);
    assert_eq!(done.waited, Duration::ZERO);
    assert_eq!(start.elapsed(), Duration::ZERO);
    assert!(done.transcript_uri.is_some());
}

#[tokio::test(start_paused = true)]
async fn given_two_in_progress_then_completed_when_polling_then_waits_with_backoff() {
    let runner = MockTranscriptionJobRunner::scripted(vec![in_progress(), in_progress(), completed()]);
    let start = tokio::time::Instant::now();

    let done = JobPoller::new(&runner, doubling_policy())
        .wait_for_completion("job-1")
        .await
        .unwrap();

    assert_eq!(runner.status_calls(), 3);
    assert_eq!(done.polls, 3);
    assert_eq!(done.waited, Duration::from_secs(15));
    assert_eq!(start.elapsed(), Duration::from_secs(15));
}

#[tokio::test(start_paused = true)]
async fn given_failed_after_in_progress_when_polling_then_stops_with_reason() {
    let runner = MockTranscriptionJobRunner::scripted(vec![
        in_progress(),
        TranscriptionJobStatus::Failed {
            reason: "unsupported media".to_string(),
        },
    ]);
    let start = tokio::time::Instant::now();

    let err = JobPoller::new(&runner, PollPolicy::fixed(Duration::from_secs(5), Duration::from_secs(60)))
        .wait_for_completion("job-1")
        .await
        .unwrap_err();

    match err {
        PollError::Failed { reason } => assert_eq!(reason, "unsupported media"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(runner.status_calls(), 2);
    assert_eq!(start.elapsed(), Duration::from_secs(5));
}

#[tokio::test(start_paused = true)]
async fn given_job_never_finishing_when_polling_then_times_out_at_budget() {
    let runner = MockTranscriptionJobRunner::scripted(vec![]);
    let start = tokio::time::Instant::now();

    let err = JobPoller::new(&runner, PollPolicy::fixed(Duration::from_secs(5), Duration::from_secs(12)))
        .wait_for_completion("job-1")
        .await
        .unwrap_err();

    match err {
        PollError::TimedOut { waited } => assert_eq!(waited, Duration::from_secs(12)),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(runner.status_calls(), 4);
    assert_eq!(start.elapsed(), Duration::from_secs(12));
}

#[tokio::test(start_paused = true)]
async fn given_large_multiplier_when_polling_then_interval_is_capped() {
    let policy = PollPolicy {
        initial_interval: Duration::from_secs(5),
        max_interval: Duration::from_secs(20),
        multiplier: 10.0,
        max_wait: Duration::from_secs(600),
    };
    let runner = MockTranscriptionJobRunner::scripted(vec![
        in_progress(),
        in_progress(),
        in_progress(),
        completed(),
    ]);
    let start = tokio::time::Instant::now();

    let done = JobPoller::new(&runner, policy)
        .wait_for_completion("job-1")
        .await
        .unwrap();

    assert_eq!(done.waited, Duration::from_secs(45));
    assert_eq!(start.elapsed(), Duration::from_secs(45));
}

#[tokio::test(start_paused = true)]
async fn given_multiplier_below_one_when_polling_then_interval_never_shrinks() {
    let policy = PollPolicy {
        initial_interval: Duration::from_secs(4),
        max_interval: Duration::from_secs(30),
        multiplier: 0.5,
        max_wait: Duration::from_secs(600),
    };
    let runner = MockTranscriptionJobRunner::scripted(vec![in_progress(), in_progress(), completed()]);

    let done = JobPoller::new(&runner, policy)
        .wait_for_completion("job-1")
        .await
        .unwrap();

    assert_eq!(done.waited, Duration::from_secs(8));
}

#[tokio::test(start_paused = true)]
async fn given_status_call_error_when_polling_then_propagates_runner_error() {
    let err = JobPoller::new(&UnreachableRunner, PollPolicy::default())
        .wait_for_completion("job-1")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        PollError::Status(TranscriptionJobError::StatusFailed(_))
    ));
}

#[tokio::test(start_paused = true)]
async fn given_zero_interval_when_job_never_finishes_then_still_times_out_at_budget() {
    let runner = MockTranscriptionJobRunner::scripted(vec![]);
    let start = tokio::time::Instant::now();

    let err = JobPoller::new(&runner, PollPolicy::fixed(Duration::ZERO, Duration::from_secs(1)))
        .wait_for_completion("job-1")
        .await
        .unwrap_err();

    match err {
        PollError::TimedOut { waited } => assert_eq!(waited, Duration::from_secs(1)),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(runner.status_calls(), 11);
    assert_eq!(start.elapsed(), Duration::from_secs(1));
}

#[tokio::test(start_paused = true)]
async fn given_infinite_multiplier_when_polling_then_interval_jumps_to_cap() {
    let policy = PollPolicy {
        initial_interval: Duration::from_secs(5),
        max_interval: Duration::from_secs(30),
        multiplier: f64::INFINITY,
        max_wait: Duration::from_secs(600),
    };
    let runner = MockTranscriptionJobRunner::scripted(vec![
        in_progress(),
        in_progress(),
        in_progress(),
        completed(),
    ]);

    let done = JobPoller::new(&runner, policy)
        .wait_for_completion("job-1")
        .await
        .unwrap();

    assert_eq!(done.waited, Duration::from_secs(65));
}

#[tokio::test(start_paused = true)]
async fn given_nan_multiplier_when_polling_then_keeps_initial_interval() {
    let policy = PollPolicy {
        initial_interval: Duration::from_secs(5),
        max_interval: Duration::from_secs(30),
        multiplier: f64::NAN,
        max_wait: Duration::from_secs(600),
    };
    let runner = MockTranscriptionJobRunner::scripted(vec![in_progress(), in_progress(), completed()]);

    let done = JobPoller::new(&runner, policy)
        .wait_for_completion("job-1")
        .await
        .unwrap();

    assert_eq!(done.waited, Duration::from_secs(10));
}
