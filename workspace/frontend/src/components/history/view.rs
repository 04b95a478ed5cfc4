use std::rc::Rc;

use chrono::NaiveDate;
use common::{HistoryView, PriceRecord, Symbol};
use yew::prelude::*;

use super::filters::HistoryFilters;
use super::table::HistoryTable;
use crate::components::common::pagination::Pagination;
use crate::hooks::{use_forecast_service, FetchState};
use crate::settings;

#[derive(Clone, PartialEq, Default)]
pub struct HistoryState(HistoryView);

pub enum HistoryAction {
    SelectSymbol(Symbol),
    Loaded(Symbol, Vec<PriceRecord>),
    SetFrom(Option<NaiveDate>),
    SetTo(Option<NaiveDate>),
    Next,
    Previous,
}

impl Reducible for HistoryState {
    type Action = HistoryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut view = self.0.clone();
        match action {
            HistoryAction::SelectSymbol(symbol) => {
                if !view.select_symbol(symbol) {
                    return self;
                }
            }
            HistoryAction::Loaded(symbol, rows) => {
                if !view.load(symbol, rows) {
                    return self;
                }
            }
            HistoryAction::SetFrom(from) => view.set_from(from),
            HistoryAction::SetTo(to) => view.set_to(to),
            HistoryAction::Next => view.next_page(),
            HistoryAction::Previous => view.previous_page(),
        }
        Rc::new(Self(view))
    }
}

#[function_component(History)]
pub fn history() -> Html {
    let service = use_forecast_service();
    let state = use_reducer(HistoryState::default);
    let fetch_state = use_state(|| FetchState::<()>::NotStarted);
    let reload = use_state(|| 0u32);
    let generation = use_mut_ref(|| 0u64);

    let symbol = state.0.symbol();

    {
        let state = state.clone();
        let fetch_state = fetch_state.clone();
        let generation = generation.clone();

        use_effect_with((symbol, *reload), move |&(symbol, _)| {
            let current = {
                let mut generation = generation.borrow_mut();
                *generation += 1;
                *generation
            };
            let days = settings::get_settings().history_days;
            fetch_state.set(FetchState::Loading);

            wasm_bindgen_futures::spawn_local(async move {
                let result = service.history(symbol, days).await;
                if *generation.borrow() != current {
                    log::debug!("Dropping superseded {} history response", symbol);
                    return;
                }
                match result {
                    Ok(rows) => {
                        state.dispatch(HistoryAction::Loaded(symbol, rows));
                        fetch_state.set(FetchState::Success(()));
                    }
                    Err(e) => {
                        log::error!("Failed to load {} history: {}", symbol, e);
                        fetch_state.set(FetchState::Error(e.to_string()));
                    }
                }
            });
            || ()
        });
    }

    let on_symbol = {
        let state = state.clone();
        Callback::from(move |symbol: Symbol| state.dispatch(HistoryAction::SelectSymbol(symbol)))
    };
    let on_from = {
        let state = state.clone();
        Callback::from(move |from| state.dispatch(HistoryAction::SetFrom(from)))
    };
    let on_to = {
        let state = state.clone();
        Callback::from(move |to| state.dispatch(HistoryAction::SetTo(to)))
    };
    let on_refresh = {
        let reload = reload.clone();
        Callback::from(move |_: ()| reload.set(reload.wrapping_add(1)))
    };
    let on_previous = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(HistoryAction::Previous))
    };
    let on_next = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(HistoryAction::Next))
    };

    let view = &state.0;
    let loading = fetch_state.is_loading();

    html! {
        <div class="space-y-4">
            <HistoryFilters
                symbol={symbol}
                range={view.range()}
                loading={loading}
                on_symbol={on_symbol}
                on_from={on_from}
                on_to={on_to}
                on_refresh={on_refresh}
            />

            {if let Some(err) = fetch_state.error() {
                html! {
                    <div class="alert alert-error">
                        <i class="fas fa-exclamation-circle"></i>
                        <span>{format!("Failed to load data: {}", err)}</span>
                    </div>
                }
            } else {
                html! {}
            }}

            {if view.skipped() > 0 {
                html! {
                    <div class="alert alert-warning text-sm">
                        <i class="fas fa-triangle-exclamation"></i>
                        <span>{format!("{} rows with an unreadable date were skipped", view.skipped())}</span>
                    </div>
                }
            } else {
                html! {}
            }}

            <div class="card bg-base-100 shadow-xl overflow-hidden">
                <HistoryTable
                    symbol={symbol}
                    rows={view.current_page_rows().to_vec()}
                    loading={loading}
                    empty={view.filtered().is_empty()}
                />
                {if !loading {
                    html! {
                        <Pagination window={view.window()} on_previous={on_previous} on_next={on_next} />
                    }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}
