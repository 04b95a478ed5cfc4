use yew::prelude::*;

use super::navbar::Navbar;
use crate::Tab;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub active_tab: Tab,
    pub on_select: Callback<Tab>,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="flex flex-col min-h-screen bg-base-200">
            <Navbar active_tab={props.active_tab} on_select={props.on_select.clone()} />
            <main class="flex-1 w-full max-w-4xl mx-auto px-4 py-6 md:py-8">
                <div class="mb-6">
                    <h1 class="text-xl md:text-2xl font-bold">{ props.active_tab.title() }</h1>
                    <p class="text-sm md:text-base text-base-content/60">{ props.active_tab.subtitle() }</p>
                </div>
                { for props.children.iter() }
            </main>
        </div>
    }
}
