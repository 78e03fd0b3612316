//! Client for the two backend endpoints the dashboard talks to.
//!
//! Both calls POST a JSON body and decode a JSON response. HTTP status
//! codes are not inspected: whatever the backend returns is decoded, and a
//! body of the wrong shape surfaces as [`FetchError::Decode`].
use crate::config::join_url;
use crate::error::{FetchError, Result};
use crate::model::{Month, Year};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const MONTH_DATA_PATH: &str = "/getMonthData";
pub const PREDICT_PATH: &str = "/predict";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MonthDataRequest {
    pub year: Year,
    pub month: Month,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthData {
    pub total_accidents: u64,
    pub percentage: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PredictRequest {
    pub barangay: String,
    pub hour: String,
}

impl PredictRequest {
    /// The backend keys barangays by their uppercase name.
    pub fn new(barangay: &str, hour: &str) -> Self {
        Self {
            barangay: barangay.to_uppercase(),
            hour: hour.to_string(),
        }
    }
}

/// The backend calls used by the dashboard.
#[allow(async_fn_in_trait)]
pub trait DashboardApi {
    async fn month_data(&self, request: &MonthDataRequest) -> Result<MonthData>;

    /// `/predict` has no fixed response schema, so the payload is handed
    /// back untouched.
    async fn accident_percentage(&self, request: &PredictRequest) -> Result<serde_json::Value>;
}

/// [`DashboardApi`] over the browser's fetch.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpClient {
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        log::debug!("POST {}", url);

        let response = Request::post(&url).json(body)?.send().await?;
        log::trace!("POST {} - status {}", path, response.status());

        response
            .json::<T>()
            .await
            .map_err(|err| FetchError::Decode(err.to_string()))
    }
}

impl DashboardApi for HttpClient {
    async fn month_data(&self, request: &MonthDataRequest) -> Result<MonthData> {
        self.post(MONTH_DATA_PATH, request).await
    }

    async fn accident_percentage(&self, request: &PredictRequest) -> Result<serde_json::Value> {
        self.post(PREDICT_PATH, request).await
    }
}
