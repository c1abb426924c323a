//! View of the CSV upload dialog.
//!
//! Two panes share the sheet: the file picker (before a run) and the progress
//! list (during and after a run). The progress list is rendered purely from the
//! latest `UploadRun` snapshot.

use common::upload::UploadRun;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::tops_sheet::top_sheet::TopSheet;

use super::helpers::{batch_label, batch_marker, records_summary};
use super::messages::Msg;
use super::state::UploadCsvComponent;

pub fn view(component: &UploadCsvComponent, ctx: &Context<UploadCsvComponent>) -> Html {
    let link = ctx.link();

    html! {
        <>
            <button class="icon-btn" title="Upload CSV File" onclick={link.callback(|_| Msg::Open)}>
                <i class="material-icons">{"upload_file"}</i>
            </button>
            <TopSheet node_ref={component.sheet_ref.clone()}>
                <div class="upload-dialog">
                    <div class="upload-dialog-bar">
                        <button class="icon-btn" title="Close" onclick={link.callback(|_| Msg::Close)}>
                            {"✕"}
                        </button>
                    </div>
                    {
                        if component.uploading {
                            build_progress_pane(component)
                        } else {
                            build_picker_pane(component, link)
                        }
                    }
                </div>
            </TopSheet>
        </>
    }
}

fn build_picker_pane(component: &UploadCsvComponent, link: &Scope<UploadCsvComponent>) -> Html {
    let on_file_change = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files().and_then(|files| files.get(0));
        // Clearing lets the same file be picked again after a reset.
        input.set_value("");
        file.map(Msg::FileSelected)
    });

    html! {
        <div class="upload-picker">
            <h2>{"Upload CSV File"}</h2>
            <button class="icon-btn upload-drop" onclick={link.callback(|_| Msg::OpenFilePicker)}>
                <i class="material-icons">{"cloud_upload"}</i>
            </button>
            <input
                type="file"
                accept=".csv,text/csv"
                hidden={true}
                ref={component.file_input_ref.clone()}
                onchange={on_file_change}
            />
            {
                match (&component.file_name, &component.parse_error) {
                    (Some(name), None) => html! {
                        <p class="upload-summary">
                            <strong>{ name.clone() }</strong>
                            <br />
                            { records_summary(component.records.len(), component.dropped) }
                        </p>
                    },
                    (_, Some(err)) => html! { <p class="upload-error">{ err.clone() }</p> },
                    (None, None) => html! {},
                }
            }
            if component.is_draining() {
                <p class="upload-status">{"Waiting for the previous upload to stop…"}</p>
            }
            <hr />
            <div class="upload-actions">
                <button
                    class="btn-primary"
                    disabled={!component.can_upload()}
                    onclick={link.callback(|_| Msg::StartUpload)}
                >
                    {"Upload"}
                </button>
            </div>
        </div>
    }
}

fn build_progress_pane(component: &UploadCsvComponent) -> Html {
    let Some(run) = &component.run else {
        return html! {
            <div class="upload-progress">
                <h2>{"Uploading Data"}</h2>
                <p class="upload-status">{"Preparing batches…"}</p>
            </div>
        };
    };

    html! {
        <div class="upload-progress">
            <h2>{"Uploading Data"}</h2>
            <hr />
            <details open={true}>
                <summary class="upload-status">{ run.status().to_string() }</summary>
                <ul class="batch-list">
                    { for run.batches().iter().map(build_batch_row) }
                </ul>
            </details>
            { build_run_footer(run) }
        </div>
    }
}

fn build_batch_row(report: &common::upload::BatchReport) -> Html {
    let (glyph, class) = batch_marker(report);
    let title = report.last_error.clone().unwrap_or_default();
    html! {
        <li class="batch-row" title={title}>
            <span class="batch-label">{ batch_label(&report.span) }</span>
            <span class={classes!("batch-marker", class)}>{ glyph }</span>
        </li>
    }
}

fn build_run_footer(run: &UploadRun) -> Html {
    if !run.is_finished() {
        return html! {};
    }
    html! {
        <p class="upload-footer">
            { format!("{} of {} batches uploaded", run.completed_batches().len(), run.total_batches()) }
        </p>
    }
}
