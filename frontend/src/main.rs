use accident_dashboard_frontend::config::load_config;
use accident_dashboard_frontend::{App, AppProps};

fn main() {
    let (config, problem) = load_config();
    wasm_logger::init(wasm_logger::Config::new(config.log_level));
    if let Some(err) = problem {
        log::warn!("{}; using default settings", err);
    }
    log::info!("Traffic incident dashboard starting");
    log::debug!("Backend at {}", config.api_base_url);

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
