use common::{StatCard, Tone};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub cards: Vec<StatCard>,
}

fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Plain => "",
        Tone::Positive => "text-success",
        Tone::Negative => "text-error",
    }
}

#[function_component(ForecastStats)]
pub fn forecast_stats(props: &Props) -> Html {
    html! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            { for props.cards.iter().map(|card| html! {
                <div class="stats shadow bg-base-100">
                    <div class="stat">
                        <div class="stat-title text-xs uppercase">{ card.label }</div>
                        <div class={classes!("stat-value", "text-2xl", tone_class(card.tone))}>
                            { &card.value }
                        </div>
                    </div>
                </div>
            })}
        </div>
    }
}
