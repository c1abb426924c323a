use common::model::config::DashboardConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct UploadCsvProps {
    /// Upload endpoint, attempt timeout and retry bound for every run.
    pub config: DashboardConfig,
}
