use common::{DirectionRegime, MarketRegime, VolatilityRegime};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub regime: MarketRegime,
}

fn direction_class(direction: DirectionRegime) -> &'static str {
    match direction {
        DirectionRegime::Bullish => "alert-success",
        _ => "alert-error",
    }
}

fn volatility_class(volatility: VolatilityRegime) -> &'static str {
    match volatility {
        VolatilityRegime::RisingVol => "alert-warning",
        _ => "alert-info",
    }
}

#[function_component(RegimeCards)]
pub fn regime_cards(props: &Props) -> Html {
    let regime = &props.regime;

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
            <div class={classes!("alert", "justify-between", direction_class(regime.direction))}>
                <span class="font-semibold">{"Direction Regime"}</span>
                <span class="font-mono font-bold">{ regime.direction.as_str() }</span>
            </div>
            <div class={classes!("alert", "justify-between", volatility_class(regime.volatility))}>
                <span class="font-semibold">{"Volatility Regime"}</span>
                <span class="font-mono font-bold">{ regime.volatility.as_str() }</span>
            </div>
        </div>
    }
}
