//! Traffic incident dashboard: a yew front end for the accident statistics
//! backend. The page toggles between a bar graph and a heat map, pages
//! through yearly donut charts, fetches per-month totals and looks up the
//! accident chance for a barangay at a given hour.
pub mod api;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod state;

use components::Dashboard;
use config::DashboardConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: DashboardConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<DashboardConfig> context={props.config.clone()}>
            <Dashboard />
        </ContextProvider<DashboardConfig>>
    }
}
