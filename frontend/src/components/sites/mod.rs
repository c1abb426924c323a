//! Sites panel: lists monitoring sites from the regions endpoint.
//!
//! All sites are loaded on first render. Entering a region asks the endpoint
//! for the matching site IDs instead. Failures are shown once as a toast;
//! nothing is retried.

use common::model::config::DashboardConfig;
use common::model::region::{RegionSite, RegionsResponse};
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::toast::{show_toast, ToastKind};
use crate::requests::fetch_regions;

#[derive(Properties, PartialEq, Clone)]
pub struct SitesPanelProps {
    pub config: DashboardConfig,
}

pub enum Msg {
    SetFilter(String),
    Load,
    Loaded(Result<RegionsResponse, String>),
}

pub struct SitesPanel {
    filter: String,
    sites: Option<RegionsResponse>,
    loading: bool,
}

impl Component for SitesPanel {
    type Message = Msg;
    type Properties = SitesPanelProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        Self {
            filter: String::new(),
            sites: None,
            loading: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetFilter(filter) => {
                self.filter = filter;
                false
            }
            Msg::Load => {
                if self.loading {
                    return false;
                }
                self.loading = true;
                let url = ctx.props().config.regions_url.clone();
                let region = self.filter.trim().to_string();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let region = (!region.is_empty()).then_some(region.as_str());
                    link.send_message(Msg::Loaded(fetch_regions(&url, region).await));
                });
                true
            }
            Msg::Loaded(result) => {
                self.loading = false;
                match result {
                    Ok(sites) => self.sites = Some(sites),
                    Err(err) => {
                        log::warn!("loading sites failed: {err}");
                        show_toast(&format!("Could not load sites: {err}"), ToastKind::Error);
                    }
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_input = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::SetFilter(input.value())
        });
        let on_submit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Load
        });

        html! {
            <section class="sites-panel">
                <form class="sites-filter" onsubmit={on_submit}>
                    <input
                        type="search"
                        placeholder="Region"
                        value={self.filter.clone()}
                        oninput={on_input}
                    />
                    <button type="submit" disabled={self.loading}>{"Search"}</button>
                </form>
                {
                    match &self.sites {
                        None if self.loading => html! { <p>{"Loading sites…"}</p> },
                        None => html! {},
                        Some(sites) if sites.is_empty() => html! { <p>{"No sites found."}</p> },
                        Some(RegionsResponse::Sites(sites)) => site_table(sites),
                        Some(RegionsResponse::SiteIds(ids)) => html! {
                            <ul class="site-ids">
                                { for ids.iter().map(|id| html! { <li>{ id.clone() }</li> }) }
                            </ul>
                        },
                    }
                }
            </section>
        }
    }
}

fn site_table(sites: &[RegionSite]) -> Html {
    html! {
        <table class="sites-table">
            <thead>
                <tr>
                    <th>{"Region"}</th>
                    <th>{"ID"}</th>
                    <th>{"AQS Site ID"}</th>
                    <th>{"Latitude"}</th>
                    <th>{"Longitude"}</th>
                </tr>
            </thead>
            <tbody>
                {
                    for sites.iter().map(|site| html! {
                        <tr>
                            <td>{ site.region.clone() }</td>
                            <td>{ site.id.clone() }</td>
                            <td>{ site.aqs_site_id.clone() }</td>
                            <td>{ format!("{:.5}", site.latitude) }</td>
                            <td>{ format!("{:.5}", site.longitude) }</td>
                        </tr>
                    })
                }
            </tbody>
        </table>
    }
}
