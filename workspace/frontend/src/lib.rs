use yew::prelude::*;

mod components;
pub mod api_client;
pub mod hooks;
pub mod settings;
pub mod ui;

use common::Symbol;
use components::dashboard::ForecastDashboard;
use components::entry::DataEntry;
use components::history::History;
use components::layout::layout::Layout;

/// The three sibling views selected by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    History,
    Entry,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Dashboard, Tab::History, Tab::Entry];

    /// Navbar label
    pub fn label(self) -> &'static str {
        match self {
            Tab::Dashboard => "Strategy",
            Tab::History => "History",
            Tab::Entry => "Add Data",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tab::Dashboard => "fas fa-gauge-high",
            Tab::History => "fas fa-database",
            Tab::Entry => "fas fa-circle-plus",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Dashboard => "Market Intelligence",
            Tab::History => "Historical Data",
            Tab::Entry => "Data Ingestion",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Tab::Dashboard => "Real-time XGBoost volatility forecasting.",
            Tab::History => "View NIFTY 50 and India VIX datasets.",
            Tab::Entry => "Append today's OHLC data.",
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let active_tab = use_state(Tab::default);
    let refresh_trigger = use_state(|| 0u32);

    let on_select = {
        let active_tab = active_tab.clone();
        Callback::from(move |tab: Tab| {
            log::debug!("Switching to tab: {:?}", tab);
            active_tab.set(tab);
        })
    };

    // A successful entry refreshes the forecast and brings it into view.
    let on_update_success = {
        let active_tab = active_tab.clone();
        let refresh_trigger = refresh_trigger.clone();
        Callback::from(move |symbol: Symbol| {
            log::info!("{} data updated, refreshing forecast", symbol);
            refresh_trigger.set(refresh_trigger.wrapping_add(1));
            active_tab.set(Tab::Dashboard);
        })
    };

    let tab = *active_tab;
    let content = match tab {
        Tab::Dashboard => html! { <ForecastDashboard refresh_trigger={*refresh_trigger} /> },
        Tab::History => html! { <History /> },
        Tab::Entry => html! { <DataEntry on_update_success={on_update_success} /> },
    };

    html! {
        <Layout active_tab={tab} on_select={on_select}>
            { content }
        </Layout>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== VolStack Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base_url());

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
