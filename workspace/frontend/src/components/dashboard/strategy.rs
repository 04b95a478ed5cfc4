use common::{ForecastSnapshot, humanize_identifier};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub snapshot: ForecastSnapshot,
}

/// Recommended strategy, expiry and execution legs.
#[function_component(StrategyCard)]
pub fn strategy_card(props: &Props) -> Html {
    let snapshot = &props.snapshot;
    let recommendation = &snapshot.recommendation;
    let bullish = snapshot.is_bullish();

    let (accent, trend_icon) = if bullish {
        ("border-success", "fas fa-arrow-trend-up text-success")
    } else {
        ("border-error", "fas fa-arrow-trend-down text-error")
    };

    html! {
        <div class={classes!("card", "bg-base-100", "shadow-xl", "border-l-8", accent)}>
            <div class="card-body">
                <div class="flex justify-between items-start mb-4">
                    <div>
                        <h2 class="text-sm uppercase tracking-wider font-semibold text-base-content/60">
                            {"Recommended Strategy"}
                        </h2>
                        <h1 class="text-3xl font-bold mt-1 flex items-center gap-3">
                            { recommendation.strategy.label() }
                            <i class={trend_icon}></i>
                        </h1>
                    </div>
                    <div class="text-right">
                        <div class="text-xs uppercase text-base-content/60">{"Expiry"}</div>
                        <div class="text-xl font-mono text-info flex items-center gap-2 justify-end">
                            <i class="fas fa-calendar"></i>
                            { &recommendation.expiry_date }
                        </div>
                        <div class="text-xs text-base-content/50 mt-1">
                            { recommendation.expiry_type.as_str() }
                        </div>
                    </div>
                </div>

                <div class="bg-base-200 rounded-lg p-4">
                    <h3 class="text-sm mb-3 flex items-center gap-2 text-base-content/60">
                        <i class="fas fa-wave-square"></i>
                        {"Execution Legs"}
                    </h3>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        { for recommendation.legs().map(|(action, key, strike)| {
                            let class = if action.is_buy() { "text-success" } else { "text-error" };
                            html! {
                                <div class="flex justify-between items-center p-3 bg-base-100 rounded">
                                    <span class={classes!("font-mono", "font-bold", class)}>
                                        { humanize_identifier(key) }
                                    </span>
                                    <span class="text-xl font-bold">{ strike.to_string() }</span>
                                </div>
                            }
                        })}
                    </div>
                </div>
            </div>
        </div>
    }
}
