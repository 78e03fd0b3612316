use crate::error::ConfigError;
use crate::model::Year;
use log::Level;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Id of the `<script type="application/json">` element the host page may
/// use to configure the dashboard.
pub const CONFIG_ELEMENT_ID: &str = "dashboard-config";

const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardConfig {
    pub api_base_url: String,
    pub log_level: Level,
    /// Options offered by the barangay selector, after the empty placeholder.
    /// When empty the selector becomes a free-text input.
    pub barangays: Vec<String>,
    pub charts: ChartSources,
}

/// Where the backend-rendered chart pages live. Each one is embedded in its
/// panel as an iframe; a missing source leaves the panel empty. Sources
/// starting with `/` are served by the backend at `api_base_url`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartSources {
    pub bar_graph: Option<String>,
    pub heat_map: Option<String>,
    pub donuts: BTreeMap<u16, String>,
}

impl ChartSources {
    pub fn donut(&self, year: Year) -> Option<&str> {
        self.donuts.get(&year.value()).map(String::as_str)
    }

    fn resolved(self, base_url: &str) -> ChartSources {
        let keep = |url: String| {
            let url = url.trim();
            if url.is_empty() {
                None
            } else if url.starts_with('/') {
                Some(join_url(base_url, url))
            } else {
                Some(url.to_string())
            }
        };
        ChartSources {
            bar_graph: self.bar_graph.and_then(keep),
            heat_map: self.heat_map.and_then(keep),
            donuts: self
                .donuts
                .into_iter()
                .filter(|(year, _)| Year::new(*year).is_some())
                .filter_map(|(year, url)| keep(url).map(|url| (year, url)))
                .collect(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            log_level: Level::Info,
            barangays: Vec::new(),
            charts: ChartSources::default(),
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawConfig {
    api_base_url: Option<String>,
    log_level: Option<String>,
    barangays: Vec<String>,
    charts: ChartSources,
}

impl DashboardConfig {
    /// Parses the JSON carried by the config element. Missing fields keep
    /// their defaults; an unknown log level falls back to `info`.
    pub fn parse(raw: &str) -> Result<DashboardConfig, ConfigError> {
        let raw: RawConfig = serde_json::from_str(raw)?;
        let defaults = DashboardConfig::default();

        let api_base_url = raw
            .api_base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_base_url);
        let log_level = raw
            .log_level
            .and_then(|level| Level::from_str(level.trim()).ok())
            .unwrap_or(defaults.log_level);
        let barangays = raw
            .barangays
            .into_iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        let charts = raw.charts.resolved(&api_base_url);

        Ok(DashboardConfig {
            api_base_url,
            log_level,
            barangays,
            charts,
        })
    }
}

/// Joins a base URL without a trailing slash and an absolute path.
pub fn join_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Reads the config element from the current document. Runs before the
/// logger is up, so problems are returned alongside the defaults for the
/// caller to report.
pub fn load_config() -> (DashboardConfig, Option<ConfigError>) {
    let raw = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match raw {
        Some(raw) if !raw.trim().is_empty() => match DashboardConfig::parse(&raw) {
            Ok(config) => (config, None),
            Err(err) => (DashboardConfig::default(), Some(err)),
        },
        _ => (DashboardConfig::default(), None),
    }
}
