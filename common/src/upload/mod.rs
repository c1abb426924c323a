//! Batch uploader: drives a `RecordSet` to the upload endpoint one batch at a
//! time.
//!
//! The record set is cut into batches by `plan::BatchPlan`. Each batch is sent
//! through an `UploadSink` and retried up to `UploadOptions::max_retries` times.
//! A batch that exhausts its attempts is recorded as failed and the run moves
//! on; per-batch failures never abort the run and never surface as an `Err`.
//! Every state change is reported to an `UploadObserver` together with a
//! read-only view of the `UploadRun`.
//!
//! Batches are strictly sequential. Only one request is in flight at any time.

use crate::error::{Result, TransportError, UploadError};
use crate::model::payload::UploadPayload;
use crate::model::record::RecordSet;
use log::{info, warn};
use std::future::Future;

pub mod cancel;
pub mod plan;
pub mod run;

pub use cancel::CancelFlag;
pub use plan::{BatchPlan, BatchSpan, batch_size_for};
pub use run::{BatchOutcome, BatchReport, UploadEvent, UploadRun};

/// Attempts allowed per batch unless configured otherwise.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// The only status the upload endpoint uses to acknowledge a batch.
pub const SUCCESS_STATUS: u16 = 200;

/// Remote collaborator receiving one batch per call.
///
/// Returns the HTTP status of the response. Anything other than
/// `SUCCESS_STATUS`, as well as any `Err`, counts as a failed attempt.
pub trait UploadSink {
    fn upload(
        &self,
        payload: &UploadPayload<'_>,
    ) -> impl Future<Output = std::result::Result<u16, TransportError>>;
}

/// Receives every event of a run along with the run state after the change.
pub trait UploadObserver {
    fn on_event(&mut self, run: &UploadRun, event: &UploadEvent);
}

impl<F> UploadObserver for F
where
    F: FnMut(&UploadRun, &UploadEvent),
{
    fn on_event(&mut self, run: &UploadRun, event: &UploadEvent) {
        self(run, event)
    }
}

#[derive(Debug, Clone)]
pub struct UploadOptions {
    pub max_retries: u32,
    /// Checked before each batch; see `CancelFlag`.
    pub cancel: Option<CancelFlag>,
}

impl Default for UploadOptions {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            cancel: None,
        }
    }
}

/// Uploads `records` batch by batch and returns the terminal run state.
///
/// Fails only on preconditions: an empty record set or `max_retries == 0`.
/// Partial success is a normal outcome; inspect
/// `UploadRun::completed_batches` to learn which batches landed.
pub async fn run_upload<S, O>(
    records: &RecordSet,
    sink: &S,
    observer: &mut O,
    options: &UploadOptions,
) -> Result<UploadRun>
where
    S: UploadSink + ?Sized,
    O: UploadObserver + ?Sized,
{
    if records.is_empty() {
        return Err(UploadError::EmptyRecordSet);
    }
    if options.max_retries == 0 {
        return Err(UploadError::NoAttemptsAllowed);
    }

    let plan = BatchPlan::for_len(records.len());
    let mut run = UploadRun::new(&plan);
    info!(
        "uploading {} records in {} batches of up to {}",
        plan.record_count(),
        plan.total_batches(),
        plan.batch_size()
    );
    observer.on_event(
        &run,
        &UploadEvent::Started {
            total_batches: plan.total_batches(),
            batch_size: plan.batch_size(),
        },
    );

    for span in plan.spans() {
        if options.cancel.as_ref().is_some_and(CancelFlag::is_cancelled) {
            run.cancel_from(span.number);
            info!("upload cancelled before batch {}", span.number);
            let event = UploadEvent::Cancelled {
                completed: run.completed_batches().len(),
                total_batches: run.total_batches(),
            };
            observer.on_event(&run, &event);
            return Ok(run);
        }
        upload_batch(records, span, sink, observer, options.max_retries, &mut run).await;
    }

    run.finish();
    info!(
        "upload finished: {} of {} batches completed",
        run.completed_batches().len(),
        run.total_batches()
    );
    let event = UploadEvent::Finished {
        completed: run.completed_batches().len(),
        total_batches: run.total_batches(),
    };
    observer.on_event(&run, &event);
    Ok(run)
}

async fn upload_batch<S, O>(
    records: &RecordSet,
    span: BatchSpan,
    sink: &S,
    observer: &mut O,
    max_retries: u32,
    run: &mut UploadRun,
) where
    S: UploadSink + ?Sized,
    O: UploadObserver + ?Sized,
{
    let data = records.slice(span.start, span.end).unwrap_or_default();
    let payload = UploadPayload::new(span.label(), data);

    for attempt in 1..=max_retries {
        run.begin_attempt(span.number, attempt);
        observer.on_event(
            run,
            &UploadEvent::AttemptStarted {
                batch: span.number,
                attempt,
            },
        );

        let reason = match sink.upload(&payload).await {
            Ok(SUCCESS_STATUS) => {
                run.complete_batch(span.number);
                info!("batch {} ({}) uploaded", span.number, payload.range);
                observer.on_event(run, &UploadEvent::BatchCompleted { batch: span.number });
                return;
            }
            Ok(status) => format!("endpoint answered {status}"),
            Err(err) => err.to_string(),
        };

        warn!(
            "attempt {} failed for batch {} ({}): {}",
            attempt, span.number, payload.range, reason
        );
        run.fail_attempt(span.number, attempt, reason.clone());
        observer.on_event(
            run,
            &UploadEvent::AttemptFailed {
                batch: span.number,
                attempt,
                reason,
            },
        );
    }

    warn!("batch {} failed after {} attempts", span.number, max_retries);
    run.fail_batch(span.number, max_retries);
    observer.on_event(
        run,
        &UploadEvent::BatchFailed {
            batch: span.number,
            attempts: max_retries,
        },
    );
}
