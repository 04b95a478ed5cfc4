use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AdvisoryPanelProps {
    pub message: AttrValue,
}

/// Warning panel shown in place of content that could not be loaded.
#[function_component(AdvisoryPanel)]
pub fn advisory_panel(props: &AdvisoryPanelProps) -> Html {
    log::warn!("Displaying advisory: {}", props.message);

    html! {
        <div class="flex flex-col items-center justify-center py-12 gap-4">
            <div class="alert alert-warning max-w-lg">
                <i class="fas fa-triangle-exclamation text-2xl"></i>
                <span>{&props.message}</span>
            </div>
        </div>
    }
}
