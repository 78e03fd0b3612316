use super::{
    BarangaySearch, GraphPanels, MonthButtons, MonthSummaryCard, SearchResultPanel, ViewToggle,
    YearNavigator,
};
use crate::api::HttpClient;
use crate::config::DashboardConfig;
use crate::controller::{fetch_accident_percentage, fetch_month_data, search_request};
use crate::model::{Direction, Month, Panel};
use crate::state::{DashboardAction, DashboardState};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let config = use_context::<DashboardConfig>().unwrap_or_default();
    let state = use_reducer(DashboardState::default);
    let client = use_memo(
        |base_url: &String| HttpClient::new(base_url.clone()),
        config.api_base_url.clone(),
    );

    let on_toggle = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(DashboardAction::ToggleView))
    };

    let on_navigate = {
        let state = state.clone();
        Callback::from(move |direction: Direction| {
            state.dispatch(DashboardAction::NavigateYear(direction))
        })
    };

    let on_month = {
        let state = state.clone();
        let client = client.clone();
        let year = state.year;
        Callback::from(move |month: Month| {
            let state = state.clone();
            let client = client.clone();
            spawn_local(async move {
                if let Some(action) = fetch_month_data(&*client, year, month).await {
                    state.dispatch(action);
                }
            });
        })
    };

    let on_barangay_change = {
        let state = state.clone();
        Callback::from(move |barangay: String| {
            state.dispatch(DashboardAction::BarangayChanged(barangay))
        })
    };

    let on_hour_input = {
        let state = state.clone();
        Callback::from(move |hour: String| state.dispatch(DashboardAction::HourChanged(hour)))
    };

    let on_search = {
        let state = state.clone();
        let client = client.clone();
        Callback::from(move |_| {
            let Some((barangay, hour)) = search_request(&state) else {
                return;
            };
            let handle = state.clone();
            let client = client.clone();
            spawn_local(async move {
                if let Some(action) = fetch_accident_percentage(&*client, &barangay, &hour).await {
                    handle.dispatch(action);
                }
            });
            state.dispatch(DashboardAction::ShowSearchResult);
        })
    };

    html! {
        <div class="min-h-screen bg-[#001D3D] text-white p-6 flex flex-col gap-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-black tracking-tight">{"Traffic Incident Dashboard"}</h1>
                <ViewToggle label={state.toggle_label} on_toggle={on_toggle} />
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="lg:col-span-2 bg-[#0B2C40] rounded-[24px] p-4">
                    <GraphPanels visible={state.panel} sources={config.charts.clone()} />
                    <SearchResultPanel visible={state.is_visible(Panel::SearchResult)} result={state.search_result.clone()} />
                </div>

                <div class="bg-[#00264d] rounded-[24px] p-4 flex flex-col gap-6">
                    <YearNavigator
                        year={state.year}
                        charts={state.donut_charts()}
                        sources={config.charts.clone()}
                        on_navigate={on_navigate}
                    />
                    <MonthSummaryCard summary={state.month_summary.clone()} />
                    <MonthButtons on_select={on_month} />
                </div>
            </div>

            <BarangaySearch
                barangays={config.barangays.clone()}
                draft={state.draft.clone()}
                on_barangay_change={on_barangay_change}
                on_hour_input={on_hour_input}
                on_search={on_search}
            />
        </div>
    }
}
