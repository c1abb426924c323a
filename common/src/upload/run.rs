//! State of one upload run and the events reported while it progresses.
//!
//! `UploadRun` is owned by the run loop in `upload::run_upload`. Observers only
//! ever see it through a shared reference handed along with each
//! `UploadEvent`, so a renderer can snapshot it (it is `Clone`) without being
//! able to mutate it.

use crate::upload::plan::{BatchPlan, BatchSpan};
use serde::Serialize;
use std::collections::BTreeSet;

/// Where a single batch stands within the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BatchOutcome {
    /// Not attempted yet.
    Pending,
    /// An attempt is in flight.
    Uploading,
    /// The endpoint answered 200 for this exact range.
    Completed,
    /// Every allowed attempt failed.
    Failed,
    /// Never attempted because the run was cancelled first.
    Skipped,
}

/// Per-batch bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub span: BatchSpan,
    /// Attempts made so far for this batch.
    pub attempts: u32,
    pub outcome: BatchOutcome,
    /// Reason of the most recent failed attempt.
    pub last_error: Option<String>,
}

/// Notification emitted after every state change of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadEvent {
    Started { total_batches: usize, batch_size: usize },
    AttemptStarted { batch: usize, attempt: u32 },
    AttemptFailed { batch: usize, attempt: u32, reason: String },
    BatchCompleted { batch: usize },
    BatchFailed { batch: usize, attempts: u32 },
    Cancelled { completed: usize, total_batches: usize },
    Finished { completed: usize, total_batches: usize },
}

/// Transient state of one upload invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRun {
    record_count: usize,
    batch_size: usize,
    progress: usize,
    completed: BTreeSet<usize>,
    status: String,
    batches: Vec<BatchReport>,
    cancelled: bool,
    finished: bool,
}

impl UploadRun {
    pub fn new(plan: &BatchPlan) -> Self {
        Self {
            record_count: plan.record_count(),
            batch_size: plan.batch_size(),
            progress: 0,
            completed: BTreeSet::new(),
            status: String::new(),
            batches: plan
                .spans()
                .map(|span| BatchReport {
                    span,
                    attempts: 0,
                    outcome: BatchOutcome::Pending,
                    last_error: None,
                })
                .collect(),
            cancelled: false,
            finished: false,
        }
    }

    pub fn record_count(&self) -> usize {
        self.record_count
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn total_batches(&self) -> usize {
        self.batches.len()
    }

    /// Number of the last batch that completed, 0 before the first
    /// completion and again once the run is over.
    pub fn progress(&self) -> usize {
        self.progress
    }

    /// 0-based indices of the batches that landed.
    pub fn completed_batches(&self) -> &BTreeSet<usize> {
        &self.completed
    }

    pub fn is_batch_completed(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn batches(&self) -> &[BatchReport] {
        &self.batches
    }

    /// Report of batch `number` (1-based).
    pub fn report(&self, number: usize) -> Option<&BatchReport> {
        number.checked_sub(1).and_then(|i| self.batches.get(i))
    }

    /// Sequence numbers of the batches that exhausted their attempts.
    pub fn failed_batches(&self) -> Vec<usize> {
        self.batches
            .iter()
            .filter(|b| b.outcome == BatchOutcome::Failed)
            .map(|b| b.span.number)
            .collect()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// True once the run is over and every batch landed.
    pub fn is_complete_success(&self) -> bool {
        self.finished && !self.cancelled && self.completed.len() == self.batches.len()
    }

    fn report_mut(&mut self, number: usize) -> Option<&mut BatchReport> {
        number.checked_sub(1).and_then(|i| self.batches.get_mut(i))
    }

    pub(crate) fn begin_attempt(&mut self, number: usize, attempt: u32) {
        if let Some(report) = self.report_mut(number) {
            report.attempts = attempt;
            report.outcome = BatchOutcome::Uploading;
        }
        self.status = format!("Batch {number} uploading…");
    }

    pub(crate) fn fail_attempt(&mut self, number: usize, attempt: u32, reason: String) {
        if let Some(report) = self.report_mut(number) {
            report.last_error = Some(reason);
        }
        self.status = format!("Attempt {attempt} failed for batch {number}");
    }

    pub(crate) fn complete_batch(&mut self, number: usize) {
        if let Some(report) = self.report_mut(number) {
            report.outcome = BatchOutcome::Completed;
            report.last_error = None;
        }
        self.completed.insert(number - 1);
        self.progress = number;
        self.status = format!("Batch {number} uploaded successfully.");
    }

    pub(crate) fn fail_batch(&mut self, number: usize, max_retries: u32) {
        if let Some(report) = self.report_mut(number) {
            report.outcome = BatchOutcome::Failed;
        }
        self.status = format!("Batch {number} failed after {max_retries} attempts.");
    }

    /// Marks batches from `first_skipped` onwards as skipped and ends the run.
    pub(crate) fn cancel_from(&mut self, first_skipped: usize) {
        for report in self.batches.iter_mut().skip(first_skipped - 1) {
            report.outcome = BatchOutcome::Skipped;
        }
        self.cancelled = true;
        self.finished = true;
        self.progress = 0;
        self.status = format!(
            "Upload cancelled: {} of {} batches uploaded.",
            self.completed.len(),
            self.batches.len()
        );
    }

    pub(crate) fn finish(&mut self) {
        self.finished = true;
        self.progress = 0;
        self.status = "All batches processed.".to_string();
    }
}
