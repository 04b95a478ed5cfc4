use yew::prelude::*;

use crate::Tab;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub active_tab: Tab,
    pub on_select: Callback<Tab>,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-1 px-4 gap-2">
                <i class="fas fa-chart-line text-primary text-xl"></i>
                <span class="text-xl font-bold">{"Vol"}<span class="text-primary">{"Stack"}</span></span>
            </div>
            <div class="flex-none join">
                { for Tab::ALL.iter().map(|&tab| {
                    let onclick = {
                        let on_select = props.on_select.clone();
                        Callback::from(move |_: MouseEvent| on_select.emit(tab))
                    };
                    html! {
                        <button
                            class={classes!(
                                "btn", "btn-sm", "join-item",
                                if tab == props.active_tab { "btn-active" } else { "btn-ghost" }
                            )}
                            onclick={onclick}
                        >
                            <i class={tab.icon()}></i>
                            <span class="hidden md:inline">{ tab.label() }</span>
                        </button>
                    }
                })}
            </div>
        </div>
    }
}
