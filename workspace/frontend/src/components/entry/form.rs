use common::record::RECORD_DATE_FORMAT;
use common::{submit_entry, EntryField, EntryForm, EntryNotifier, Symbol};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_forecast_service;

/// Reports submissions through `window.alert` and the parent callback.
struct BrowserNotifier {
    on_updated: Callback<Symbol>,
}

impl EntryNotifier for BrowserNotifier {
    fn updated(&self, symbol: Symbol) {
        self.on_updated.emit(symbol);
    }

    fn alert(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.alert_with_message(message) {
                    log::error!("Failed to show alert: {:?}", e);
                }
            }
            None => log::warn!("No window to alert: {}", message),
        }
    }
}

fn initial_form(symbol: Symbol) -> EntryForm {
    let today = chrono::Local::now().date_naive().format(RECORD_DATE_FORMAT).to_string();
    EntryForm::new(symbol).with(EntryField::Date, today)
}

fn heading(symbol: Symbol) -> (&'static str, &'static str) {
    match symbol {
        Symbol::Nifty => ("Update NIFTY 50", "text-primary"),
        Symbol::Vix => ("Update India VIX", "text-secondary"),
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub symbol: Symbol,
    pub on_update_success: Callback<Symbol>,
}

#[function_component(EntryFormCard)]
pub fn entry_form_card(props: &Props) -> Html {
    let service = use_forecast_service();
    let form = use_state(|| initial_form(props.symbol));
    let submitting = use_state(|| false);

    let onsubmit = {
        let form = form.clone();
        let submitting = submitting.clone();
        let on_updated = props.on_update_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            submitting.set(true);

            let service = service.clone();
            let current = (*form).clone();
            let notifier = BrowserNotifier {
                on_updated: on_updated.clone(),
            };
            let submitting = submitting.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = submit_entry(service.as_ref(), &current, &notifier).await;
                log::debug!("{} entry outcome: {:?}", current.symbol(), outcome);
                submitting.set(false);
            });
        })
    };

    let input = |field: EntryField| {
        let oninput = {
            let form = form.clone();
            Callback::from(move |e: InputEvent| {
                let value = e.target_unchecked_into::<HtmlInputElement>().value();
                let mut next = (*form).clone();
                next.set(field, value);
                form.set(next);
            })
        };
        let kind = if field.is_numeric() { "number" } else { "text" };

        html! {
            <div>
                <label class="text-xs block mb-1 text-base-content/60">{ field.label() }</label>
                <input
                    type={kind}
                    name={field.key()}
                    step={field.step(props.symbol)}
                    class="input input-bordered input-sm w-full"
                    value={form.get(field).to_string()}
                    required=true
                    oninput={oninput}
                />
            </div>
        }
    };

    let (title, accent) = heading(props.symbol);
    let fields = EntryField::for_symbol(props.symbol);
    let prices = [EntryField::Open, EntryField::Close, EntryField::High, EntryField::Low];

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class={classes!("text-xl", "font-bold", "mb-2", accent)}>{ title }</h3>
                <form class="space-y-3" onsubmit={onsubmit}>
                    { input(EntryField::Date) }
                    <div class="grid grid-cols-2 gap-3">
                        { for prices.iter().map(|&field| input(field)) }
                    </div>
                    { for fields
                        .iter()
                        .filter(|f| **f != EntryField::Date && !prices.contains(f))
                        .map(|&field| input(field)) }
                    <button
                        type="submit"
                        class="btn btn-primary w-full mt-2"
                        disabled={*submitting}
                    >
                        { format!("Update {}", props.symbol.label()) }
                    </button>
                </form>
            </div>
        </div>
    }
}
