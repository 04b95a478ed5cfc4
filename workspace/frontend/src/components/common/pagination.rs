use common::PageWindow;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub window: PageWindow,
    pub on_previous: Callback<()>,
    pub on_next: Callback<()>,
}

/// Previous / "Page X of Y" / Next. Hidden when there is nothing to page.
#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let window = props.window;
    if window.total_items() == 0 {
        return html! {};
    }

    let on_previous = {
        let on_previous = props.on_previous.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_previous.emit(());
        })
    };

    let on_next = {
        let on_next = props.on_next.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_next.emit(());
        })
    };

    html! {
        <div class="flex justify-between items-center px-6 py-3 border-t border-base-300">
            <button class="btn btn-sm btn-ghost" disabled={!window.has_previous()} onclick={on_previous}>
                <i class="fas fa-chevron-left"></i>
                {" Previous"}
            </button>

            <span class="text-xs font-mono text-base-content/60">
                {format!("Page {} of {}", window.page(), window.total_pages())}
            </span>

            <button class="btn btn-sm btn-ghost" disabled={!window.has_next()} onclick={on_next}>
                {"Next "}
                <i class="fas fa-chevron-right"></i>
            </button>
        </div>
    }
}
