//! Dashboard state and the reducer that drives it.
//!
//! Every click handler and every completed request is turned into a
//! [`DashboardAction`]; [`DashboardState::apply`] is the only place the
//! displayed values change.
use crate::api::MonthData;
use crate::model::{
    hour_label, Direction, DonutChart, Month, MonthSummary, Panel, SearchDraft, SearchResult,
    ToggleLabel, Year,
};
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub year: Year,
    pub toggle_label: ToggleLabel,
    pub panel: Panel,
    pub month_summary: MonthSummary,
    pub search_result: SearchResult,
    pub draft: SearchDraft,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DashboardAction {
    ToggleView,
    NavigateYear(Direction),
    MonthDataLoaded {
        month: Month,
        data: MonthData,
    },
    BarangayChanged(String),
    HourChanged(String),
    ShowSearchResult,
    SearchResultLoaded {
        barangay: String,
        hour: String,
        payload: serde_json::Value,
    },
}

impl DashboardState {
    pub fn apply(mut self, action: DashboardAction) -> Self {
        match action {
            DashboardAction::ToggleView => {
                self.toggle_label = self.toggle_label.flipped();
                self.panel = self.toggle_label.visible_panel();
            }
            DashboardAction::NavigateYear(direction) => {
                self.year = match direction {
                    Direction::Left => self.year.previous(),
                    Direction::Right => self.year.next(),
                };
                self.month_summary = MonthSummary::default();
            }
            DashboardAction::MonthDataLoaded { month, data } => {
                self.month_summary = MonthSummary {
                    month: month.label().to_string(),
                    total_accidents: data.total_accidents,
                    percentage: format!("{}%", data.percentage),
                };
            }
            DashboardAction::BarangayChanged(barangay) => self.draft.barangay = barangay,
            DashboardAction::HourChanged(hour) => self.draft.hour = hour,
            DashboardAction::ShowSearchResult => self.panel = Panel::SearchResult,
            DashboardAction::SearchResultLoaded {
                barangay,
                hour,
                payload,
            } => {
                self.search_result = SearchResult {
                    barangay: barangay.to_uppercase(),
                    hour_label: hour_label(&hour),
                    percentage: render_payload(&payload),
                };
            }
        }
        self
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        self.panel == panel
    }

    /// Every year's chart in page order; only the selected year is active.
    pub fn donut_charts(&self) -> Vec<DonutChart> {
        Year::all()
            .map(|year| DonutChart {
                year,
                active: year == self.year,
            })
            .collect()
    }
}

impl Reducible for DashboardState {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        log::debug!("dashboard action: {:?}", action);
        Rc::new((*self).clone().apply(action))
    }
}

/// Strings render bare, anything else as compact JSON.
pub fn render_payload(payload: &serde_json::Value) -> String {
    match payload {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
