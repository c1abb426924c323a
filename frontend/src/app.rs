use crate::components::data_sources::csv::UploadCsvComponent;
use crate::components::sites::SitesPanel;
use crate::requests::fetch_config;
use common::model::config::DashboardConfig;
use yew::platform::spawn_local;
use yew::{html, Component, Context, Html};

pub enum Msg {
    ConfigLoaded(DashboardConfig),
}

/// Dashboard shell. Waits for the host config, then mounts the upload dialog
/// and the sites panel with it.
pub struct App {
    config: Option<DashboardConfig>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::ConfigLoaded(fetch_config().await));
        });
        Self { config: None }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ConfigLoaded(config) => {
                self.config = Some(config);
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        match &self.config {
            Some(config) => html! {
                <div class="dashboard">
                    <header class="app-bar">
                        <span class="app-title">{"SensorMetrics"}</span>
                        <UploadCsvComponent config={config.clone()} />
                    </header>
                    <SitesPanel config={config.clone()} />
                </div>
            },
            None => html! { <div class="dashboard loading">{"Loading…"}</div> },
        }
    }
}
