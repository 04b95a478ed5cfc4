use common::{Dashboard, DashboardState};
use yew::prelude::*;

use super::regime::RegimeCards;
use super::stats::ForecastStats;
use super::strategy::StrategyCard;
use crate::hooks::use_forecast_service;
use crate::ui::{AdvisoryPanel, LoadingIndicator};

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Bumped by the parent to force a refetch.
    pub refresh_trigger: u32,
}

#[function_component(ForecastDashboard)]
pub fn forecast_dashboard(props: &Props) -> Html {
    let service = use_forecast_service();
    let dashboard = use_mut_ref(Dashboard::new);
    let state = use_state(|| DashboardState::Loading);

    {
        let dashboard = dashboard.clone();
        let state = state.clone();

        use_effect_with(props.refresh_trigger, move |trigger| {
            let ticket = dashboard.borrow_mut().begin_refresh();
            log::debug!("Forecast refresh #{} (trigger {})", ticket.id(), trigger);
            state.set(DashboardState::Loading);

            wasm_bindgen_futures::spawn_local(async move {
                let result = service.predict().await;
                let mut dashboard = dashboard.borrow_mut();
                if dashboard.resolve(ticket, result) {
                    state.set(dashboard.state().clone());
                } else {
                    log::debug!("Dropped forecast response #{}", ticket.id());
                }
            });
            || ()
        });
    }

    match &*state {
        DashboardState::Loading => html! {
            <LoadingIndicator text={Some(AttrValue::from("Analyzing Market Microstructure..."))} />
        },
        DashboardState::Failed(message) => html! {
            <AdvisoryPanel message={message.clone()} />
        },
        DashboardState::Ready(snapshot) => html! {
            <div class="space-y-6">
                <ForecastStats cards={snapshot.stat_cards()} />
                <StrategyCard snapshot={snapshot.clone()} />
                <RegimeCards regime={snapshot.regime.clone()} />
            </div>
        },
    }
}
