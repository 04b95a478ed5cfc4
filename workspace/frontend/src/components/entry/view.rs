use common::Symbol;
use yew::prelude::*;

use super::form::EntryFormCard;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Fired once per accepted row.
    pub on_update_success: Callback<Symbol>,
}

#[function_component(DataEntry)]
pub fn data_entry(props: &Props) -> Html {
    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
            { for Symbol::ALL.iter().map(|&symbol| html! {
                <EntryFormCard
                    key={symbol.path_segment()}
                    symbol={symbol}
                    on_update_success={props.on_update_success.clone()}
                />
            })}
        </div>
    }
}
