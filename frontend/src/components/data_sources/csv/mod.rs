//! CSV upload dialog: root module wiring the Yew `Component` implementation
//! with submodules for messages, props, state, update logic and view.
//!
//! The dialog lets the user pick a CSV file, parses it into a `RecordSet`
//! (rows with blank fields are dropped), and drives `common::upload::run_upload`
//! against the configured upload endpoint. Progress arrives as
//! `Msg::Progress` snapshots of the `UploadRun`, one per uploader event.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::UploadCsvProps;
pub use state::UploadCsvComponent;

impl Component for UploadCsvComponent {
    type Message = Msg;
    type Properties = UploadCsvProps;

    fn create(_ctx: &Context<Self>) -> Self {
        UploadCsvComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.cancel_run();
    }
}
