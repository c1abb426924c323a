//! Component state for the CSV upload dialog.
//!
//! The parsed `RecordSet` is shared with the running upload task through an
//! `Rc`, never copied. The `UploadRun` kept here is only the latest snapshot
//! received from that task; the task owns the live state.

use common::model::record::RecordSet;
use common::upload::{CancelFlag, UploadRun};
use std::rc::Rc;
use yew::prelude::*;

pub struct UploadCsvComponent {
    /// Container of the dialog sheet.
    pub sheet_ref: NodeRef,

    /// Hidden `<input type="file">`.
    pub file_input_ref: NodeRef,

    pub file_name: Option<String>,

    pub records: Rc<RecordSet>,

    /// Rows of the selected file dropped for having a blank field.
    pub dropped: usize,

    pub parse_error: Option<String>,

    /// Set from `StartUpload` until the dialog is closed.
    pub uploading: bool,

    /// Latest snapshot of the current run.
    pub run: Option<UploadRun>,

    /// Incremented for every run and on close; messages carrying an older id
    /// belong to a discarded run and are ignored.
    pub run_id: u32,

    /// Cancel flag of the run in flight.
    pub cancel: Option<CancelFlag>,

    /// Upload tasks spawned but not yet finished, including cancelled ones
    /// still awaiting their last attempt. A new run waits for zero.
    pub pending_tasks: usize,
}

impl UploadCsvComponent {
    pub fn new() -> Self {
        Self {
            sheet_ref: NodeRef::default(),
            file_input_ref: NodeRef::default(),
            file_name: None,
            records: Rc::new(RecordSet::default()),
            dropped: 0,
            parse_error: None,
            uploading: false,
            run: None,
            run_id: 0,
            cancel: None,
            pending_tasks: 0,
        }
    }

    /// Stops the run in flight at its next batch boundary and forgets it.
    pub fn cancel_run(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel.cancel();
        }
        self.run_id = self.run_id.wrapping_add(1);
    }

    /// Back to the state of a freshly opened dialog.
    pub fn reset(&mut self) {
        self.cancel_run();
        self.file_name = None;
        self.records = Rc::new(RecordSet::default());
        self.dropped = 0;
        self.parse_error = None;
        self.uploading = false;
        self.run = None;
    }

    pub fn task_started(&mut self) {
        self.pending_tasks += 1;
    }

    pub fn task_finished(&mut self) {
        self.pending_tasks = self.pending_tasks.saturating_sub(1);
    }

    /// True while a cancelled run still has a request in flight.
    pub fn is_draining(&self) -> bool {
        !self.uploading && self.pending_tasks > 0
    }

    pub fn can_upload(&self) -> bool {
        !self.uploading && self.pending_tasks == 0 && !self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::record::Record;

    fn loaded() -> Rc<RecordSet> {
        let record: Record = [("ID", "IA1"), ("region", "Iowa")].into_iter().collect();
        Rc::new(RecordSet::from(vec![record]))
    }

    #[test]
    fn empty_file_cannot_be_uploaded() {
        let component = UploadCsvComponent::new();
        assert!(!component.can_upload());
    }

    #[test]
    fn reopened_dialog_waits_for_cancelled_task() {
        let mut component = UploadCsvComponent::new();
        component.records = loaded();
        assert!(component.can_upload());

        component.task_started();
        component.uploading = true;
        assert!(!component.can_upload());

        component.reset();
        component.records = loaded();
        assert!(component.is_draining());
        assert!(!component.can_upload());

        component.task_finished();
        assert!(!component.is_draining());
        assert!(component.can_upload());
    }
}
