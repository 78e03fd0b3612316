//! Request side of the dashboard: turns clicks into backend calls and
//! backend answers into [`DashboardAction`]s.
//!
//! Failures are logged once and swallowed. The caller simply has nothing to
//! dispatch, so the fields keep whatever they showed before.
use crate::api::{DashboardApi, MonthDataRequest, PredictRequest};
use crate::model::{Month, Year};
use crate::state::{DashboardAction, DashboardState};

pub async fn fetch_month_data<A: DashboardApi>(
    api: &A,
    year: Year,
    month: Month,
) -> Option<DashboardAction> {
    let request = MonthDataRequest { year, month };
    match api.month_data(&request).await {
        Ok(data) => Some(DashboardAction::MonthDataLoaded { month, data }),
        Err(err) => {
            log::error!("Error fetching month data: {}", err);
            None
        }
    }
}

pub async fn fetch_accident_percentage<A: DashboardApi>(
    api: &A,
    barangay: &str,
    hour: &str,
) -> Option<DashboardAction> {
    let request = PredictRequest::new(barangay, hour);
    match api.accident_percentage(&request).await {
        Ok(payload) => Some(DashboardAction::SearchResultLoaded {
            barangay: barangay.to_string(),
            hour: hour.to_string(),
            payload,
        }),
        Err(err) => {
            log::error!("Error fetching accident percentage: {}", err);
            None
        }
    }
}

/// The `(barangay, hour)` pair to search for, or `None` when the search
/// button should do nothing.
///
/// The second emptiness check looks at the hour shown in the result panel,
/// not at the hour input, so an empty hour input is still sent.
pub fn search_request(state: &DashboardState) -> Option<(String, String)> {
    if state.draft.barangay.is_empty() || state.search_result.hour_label.is_empty() {
        return None;
    }
    Some((state.draft.barangay.clone(), state.draft.hour.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MonthData;
    use crate::error::{FetchError, Result};
    use futures::executor::block_on;
    use serde_json::json;
    use log::{Level, LevelFilter, Log, Metadata, Record};
    use std::cell::RefCell;

    thread_local! {
        static RECORDS: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
    }

    /// Collects records per test thread.
    struct CapturingLogger;

    impl Log for CapturingLogger {
        fn enabled(&self, _metadata: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            RECORDS.with(|records| {
                records
                    .borrow_mut()
                    .push((record.level(), record.args().to_string()))
            });
        }

        fn flush(&self) {}
    }

    static LOGGER: CapturingLogger = CapturingLogger;

    fn capture_logs() {
        // only the first test to get here installs it
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Trace);
        RECORDS.with(|records| records.borrow_mut().clear());
    }

    fn logged_errors() -> Vec<String> {
        RECORDS.with(|records| {
            records
                .borrow()
                .iter()
                .filter(|(level, _)| *level == Level::Error)
                .map(|(_, message)| message.clone())
                .collect()
        })
    }

    /// Answers every call from a fixed script and records what was sent.
    #[derive(Default)]
    struct ScriptedApi {
        month: Option<MonthData>,
        prediction: Option<serde_json::Value>,
        month_requests: RefCell<Vec<MonthDataRequest>>,
        predict_requests: RefCell<Vec<PredictRequest>>,
    }

    impl DashboardApi for ScriptedApi {
        async fn month_data(&self, request: &MonthDataRequest) -> Result<MonthData> {
            self.month_requests.borrow_mut().push(request.clone());
            self.month
                .clone()
                .ok_or_else(|| FetchError::Decode("connection refused".to_string()))
        }

        async fn accident_percentage(&self, request: &PredictRequest) -> Result<serde_json::Value> {
            self.predict_requests.borrow_mut().push(request.clone());
            self.prediction
                .clone()
                .ok_or_else(|| FetchError::Decode("connection refused".to_string()))
        }
    }

    fn apply_all(state: DashboardState, actions: Option<DashboardAction>) -> DashboardState {
        actions.into_iter().fold(state, DashboardState::apply)
    }

    #[test]
    fn month_fetch_fills_summary() {
        let api = ScriptedApi {
            month: Some(MonthData {
                total_accidents: 42,
                percentage: 7.5,
            }),
            ..Default::default()
        };
        let year = Year::new(2023).unwrap();

        let action = block_on(fetch_month_data(&api, year, Month::Mar));
        let state = apply_all(DashboardState::default(), action);

        assert_eq!(
            api.month_requests.borrow().as_slice(),
            &[MonthDataRequest {
                year,
                month: Month::Mar
            }]
        );
        assert_eq!(state.month_summary.month, "MAR");
        assert_eq!(state.month_summary.total_accidents, 42);
        assert_eq!(state.month_summary.percentage, "7.5%");
    }

    #[test]
    fn failed_month_fetch_leaves_summary_alone() {
        capture_logs();
        let api = ScriptedApi::default();
        let before = DashboardState::default().apply(DashboardAction::MonthDataLoaded {
            month: Month::Jan,
            data: MonthData {
                total_accidents: 5,
                percentage: 2.5,
            },
        });

        let action = block_on(fetch_month_data(&api, Year::FIRST, Month::Feb));
        assert_eq!(action, None);

        let after = apply_all(before.clone(), action);
        assert_eq!(after, before);
        assert_eq!(api.month_requests.borrow().len(), 1);
        assert_eq!(
            logged_errors(),
            vec!["Error fetching month data: failed to parse response: connection refused"]
        );
    }

    #[test]
    fn search_sends_uppercased_barangay() {
        let api = ScriptedApi {
            prediction: Some(json!("64.2%")),
            ..Default::default()
        };
        let state = DashboardState::default()
            .apply(DashboardAction::BarangayChanged("Poblacion".to_string()))
            .apply(DashboardAction::HourChanged("14".to_string()));

        let (barangay, hour) = search_request(&state).unwrap();
        assert_eq!((barangay.as_str(), hour.as_str()), ("Poblacion", "14"));

        let action = block_on(fetch_accident_percentage(&api, &barangay, &hour));
        assert_eq!(
            serde_json::to_value(&api.predict_requests.borrow()[0]).unwrap(),
            json!({"barangay": "POBLACION", "hour": "14"})
        );

        let state = apply_all(state.apply(DashboardAction::ShowSearchResult), action);
        assert!(state.is_visible(crate::model::Panel::SearchResult));
        assert_eq!(state.search_result.barangay, "POBLACION");
        assert_eq!(state.search_result.hour_label, "HOUR: 14");
        assert_eq!(state.search_result.percentage, "64.2%");
    }

    #[test]
    fn failed_search_leaves_result_alone() {
        capture_logs();
        let api = ScriptedApi::default();
        let before = DashboardState::default();

        let action = block_on(fetch_accident_percentage(&api, "Poblacion", "3"));
        assert_eq!(action, None);
        assert_eq!(apply_all(before.clone(), action), before);
        assert_eq!(logged_errors().len(), 1);
        assert!(logged_errors()[0].starts_with("Error fetching accident percentage"));
    }

    #[test]
    fn search_without_barangay_does_nothing() {
        let state = DashboardState::default().apply(DashboardAction::HourChanged("9".to_string()));
        assert_eq!(search_request(&state), None);
    }

    #[test]
    fn search_checks_hour_display_instead_of_hour_input() {
        // The hour input is empty, but the displayed hour label is not, so the
        // search still goes out with an empty hour.
        let state =
            DashboardState::default().apply(DashboardAction::BarangayChanged("Bucandala".to_string()));
        assert_eq!(
            search_request(&state),
            Some(("Bucandala".to_string(), String::new()))
        );

        let mut blank_label = state;
        blank_label.search_result.hour_label.clear();
        assert_eq!(search_request(&blank_label), None);
    }
}
