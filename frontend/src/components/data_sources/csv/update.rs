//! Update function for the CSV upload dialog (Elm-style: mutate state, return
//! whether to re-render).
//!
//! - `FileSelected` reads the file asynchronously and comes back as `FileLoaded`.
//! - `StartUpload` spawns the upload task. The task owns the `UploadRun`; every
//!   uploader event is forwarded as a `Progress` snapshot tagged with the run id.
//! - `Close` cancels the run at its next batch boundary and resets the dialog.
//!   A new run cannot start until the cancelled task reports `UploadFinished`,
//!   so requests of two runs never overlap.

use common::csv::parse_records;
use common::upload::{run_upload, CancelFlag, UploadEvent, UploadOptions, UploadRun};
use gloo_file::futures::read_as_text;
use log::{info, warn};
use std::rc::Rc;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::toast::{show_toast, ToastKind};
use crate::requests::HttpUploadSink;
use crate::tops_sheet::top_sheet::{close_top_sheet, open_top_sheet};

use super::helpers::is_csv_file;
use super::messages::Msg;
use super::state::UploadCsvComponent;

pub fn update(
    component: &mut UploadCsvComponent,
    ctx: &Context<UploadCsvComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Open => {
            open_top_sheet(&component.sheet_ref);
            false
        }
        Msg::Close => {
            close_top_sheet(&component.sheet_ref);
            component.reset();
            true
        }
        Msg::OpenFilePicker => {
            if let Some(input) = component.file_input_ref.cast::<web_sys::HtmlInputElement>() {
                input.click();
            }
            false
        }
        Msg::FileSelected(file) => {
            let name = file.name();
            if !is_csv_file(&name, &file.type_()) {
                show_toast("Please upload a valid CSV file.", ToastKind::Error);
                return false;
            }

            let link = ctx.link().clone();
            spawn_local(async move {
                let blob = gloo_file::File::from(file);
                let text = read_as_text(&blob).await.map_err(|e| e.to_string());
                link.send_message(Msg::FileLoaded { name, text });
            });
            false
        }
        Msg::FileLoaded { name, text } => {
            let parsed = text.and_then(|text| parse_records(&text).map_err(|e| e.to_string()));
            match parsed {
                Ok(parsed) => {
                    info!(
                        "{}: {} records parsed, {} rows dropped",
                        name,
                        parsed.records.len(),
                        parsed.dropped
                    );
                    component.records = Rc::new(parsed.records);
                    component.dropped = parsed.dropped;
                    component.parse_error = None;
                }
                Err(err) => {
                    warn!("{name}: {err}");
                    component.records = Rc::new(Default::default());
                    component.dropped = 0;
                    component.parse_error = Some(err);
                    show_toast("Please upload a valid CSV file.", ToastKind::Error);
                }
            }
            component.file_name = Some(name);
            true
        }
        Msg::StartUpload => {
            if !component.can_upload() {
                return false;
            }
            start_upload(component, ctx);
            true
        }
        Msg::Progress { run_id, run } => {
            if run_id != component.run_id {
                return false;
            }
            component.run = Some(run);
            true
        }
        Msg::UploadFinished { run_id, result } => {
            component.task_finished();
            if run_id != component.run_id {
                // Discarded run; only the Upload button may change.
                return true;
            }
            component.cancel = None;
            match result {
                Ok(run) => {
                    let failed = run.failed_batches();
                    if failed.is_empty() {
                        show_toast(run.status(), ToastKind::Info);
                    } else {
                        let message = format!(
                            "{} {} failed to upload.",
                            failed.len(),
                            plural_batches(failed.len())
                        );
                        show_toast(&message, ToastKind::Error);
                    }
                    component.run = Some(run);
                }
                Err(err) => {
                    component.uploading = false;
                    show_toast(&err.to_string(), ToastKind::Error);
                }
            }
            true
        }
    }
}

fn start_upload(component: &mut UploadCsvComponent, ctx: &Context<UploadCsvComponent>) {
    let config = &ctx.props().config;
    let cancel = CancelFlag::new();
    component.run_id = component.run_id.wrapping_add(1);
    component.cancel = Some(cancel.clone());
    component.uploading = true;
    component.run = None;
    component.task_started();

    let run_id = component.run_id;
    let records = Rc::clone(&component.records);
    let sink = HttpUploadSink::new(config);
    let options = UploadOptions {
        max_retries: config.max_retries,
        cancel: Some(cancel),
    };
    let link = ctx.link().clone();

    spawn_local(async move {
        let progress = link.clone();
        let mut observer = move |run: &UploadRun, _: &UploadEvent| {
            progress.send_message(Msg::Progress {
                run_id,
                run: run.clone(),
            });
        };
        let result = run_upload(&records, &sink, &mut observer, &options).await;
        link.send_message(Msg::UploadFinished { run_id, result });
    });
}

fn plural_batches(count: usize) -> &'static str {
    if count == 1 {
        "batch"
    } else {
        "batches"
    }
}
