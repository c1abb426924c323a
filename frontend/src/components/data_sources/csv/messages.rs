use common::upload::UploadRun;
use common::UploadError;

pub enum Msg {
    Open,
    Close,
    OpenFilePicker,
    FileSelected(web_sys::File),
    FileLoaded { name: String, text: Result<String, String> },
    StartUpload,
    /// Snapshot emitted by the uploader after each event of run `run_id`.
    Progress { run_id: u32, run: UploadRun },
    UploadFinished { run_id: u32, result: Result<UploadRun, UploadError> },
}
