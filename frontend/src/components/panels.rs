use super::chart_frame::ChartFrame;
use crate::config::ChartSources;
use crate::model::{MonthSummary, Panel, SearchResult};
use yew::prelude::*;

fn display(visible: bool, shown_as: &'static str) -> &'static str {
    if visible {
        shown_as
    } else {
        "display: none;"
    }
}

#[derive(Properties, PartialEq)]
pub struct GraphPanelsProps {
    pub visible: Panel,
    pub sources: ChartSources,
}

/// Bar graph and heat map containers holding the backend-rendered charts.
#[function_component(GraphPanels)]
pub fn graph_panels(props: &GraphPanelsProps) -> Html {
    html! {
        <>
            <div id="bar-graph" class="w-full" style={display(props.visible == Panel::BarGraph, "display: block;")}>
                <ChartFrame title="Accidents by offense type" src={props.sources.bar_graph.clone()} height={600} />
            </div>
            <div id="heat-map" class="w-full" style={display(props.visible == Panel::HeatMap, "display: block;")}>
                <ChartFrame title="Incidents per barangay" src={props.sources.heat_map.clone()} height={600} />
            </div>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct SearchResultPanelProps {
    pub visible: bool,
    pub result: SearchResult,
}

#[function_component(SearchResultPanel)]
pub fn search_result_panel(props: &SearchResultPanelProps) -> Html {
    html! {
        <div id="search-result" class="w-full flex-col items-center justify-center gap-2 py-12" style={display(props.visible, "display: flex;")}>
            <h2 id="brgy-value" class="text-3xl font-black text-white">{ props.result.barangay.clone() }</h2>
            <p id="hr-value" class="text-sm font-bold text-slate-300 tracking-widest">{ props.result.hour_label.clone() }</p>
            <p id="percent-result" class="text-5xl font-black text-[#EBEB55]">{ props.result.percentage.clone() }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MonthSummaryCardProps {
    pub summary: MonthSummary,
}

#[function_component(MonthSummaryCard)]
pub fn month_summary_card(props: &MonthSummaryCardProps) -> Html {
    let summary = &props.summary;
    html! {
        <div class="grid grid-cols-3 gap-4 text-center">
            <div>
                <p class="text-[10px] font-bold tracking-widest text-slate-300">{"MONTH"}</p>
                <h3 id="month-value" class="text-xl font-bold text-white">{ summary.month.clone() }</h3>
            </div>
            <div>
                <p class="text-[10px] font-bold tracking-widest text-slate-300">{"TOTAL"}</p>
                <h3 id="total-value" class="text-xl font-bold text-white">{ summary.total_accidents.to_string() }</h3>
            </div>
            <div>
                <p class="text-[10px] font-bold tracking-widest text-slate-300">{"PERCENTAGE"}</p>
                <h3 id="percentage-value" class="text-xl font-bold text-white">{ summary.percentage.clone() }</h3>
            </div>
        </div>
    }
}
