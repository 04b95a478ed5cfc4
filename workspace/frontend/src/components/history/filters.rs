use chrono::NaiveDate;
use common::record::INPUT_DATE_FORMAT;
use common::{parse_input_date, DateRange, Symbol};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub symbol: Symbol,
    pub range: DateRange,
    pub loading: bool,
    pub on_symbol: Callback<Symbol>,
    pub on_from: Callback<Option<NaiveDate>>,
    pub on_to: Callback<Option<NaiveDate>>,
    pub on_refresh: Callback<()>,
}

fn input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(INPUT_DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Turn a date input change into a bound update. Values the browser
/// should never produce are logged and dropped.
fn on_date_change(target: Callback<Option<NaiveDate>>) -> Callback<Event> {
    Callback::from(move |e: Event| {
        let value = e.target_unchecked_into::<HtmlInputElement>().value();
        match parse_input_date(&value) {
            Ok(date) => target.emit(date),
            Err(err) => log::warn!("Ignoring filter date: {}", err),
        }
    })
}

#[function_component(HistoryFilters)]
pub fn history_filters(props: &Props) -> Html {
    let on_refresh = {
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |_: MouseEvent| on_refresh.emit(()))
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body flex flex-col md:flex-row justify-between items-start md:items-end gap-4">
                <div>
                    <label class="text-xs font-bold uppercase mb-2 block text-base-content/60">{"Data Source"}</label>
                    <div class="join">
                        { for Symbol::ALL.iter().map(|&symbol| {
                            let onclick = {
                                let on_symbol = props.on_symbol.clone();
                                Callback::from(move |_: MouseEvent| on_symbol.emit(symbol))
                            };
                            let active = if symbol == props.symbol {
                                match symbol {
                                    Symbol::Nifty => "btn-primary",
                                    Symbol::Vix => "btn-secondary",
                                }
                            } else {
                                "btn-ghost"
                            };
                            html! {
                                <button class={classes!("btn", "btn-sm", "join-item", active)} onclick={onclick}>
                                    { symbol.label() }
                                </button>
                            }
                        })}
                    </div>
                </div>

                <div class="flex items-end gap-2 w-full md:w-auto">
                    <div>
                        <label class="text-xs font-bold uppercase mb-1 block text-base-content/60">{"From"}</label>
                        <input
                            type="date"
                            class="input input-bordered input-sm"
                            value={input_value(props.range.from)}
                            onchange={on_date_change(props.on_from.clone())}
                        />
                    </div>
                    <div>
                        <label class="text-xs font-bold uppercase mb-1 block text-base-content/60">{"Till"}</label>
                        <input
                            type="date"
                            class="input input-bordered input-sm"
                            value={input_value(props.range.to)}
                            onchange={on_date_change(props.on_to.clone())}
                        />
                    </div>
                    <button class="btn btn-sm btn-square" title="Refresh Data" onclick={on_refresh}>
                        <i class={classes!("fas", "fa-rotate", props.loading.then_some("fa-spin"))}></i>
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_value() {
        assert_eq!(input_value(None), "");
        assert_eq!(input_value(NaiveDate::from_ymd_opt(2024, 1, 5)), "2024-01-05");
    }
}
