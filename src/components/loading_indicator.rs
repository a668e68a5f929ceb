use crate::model::LoadStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LoadingIndicatorProps {
    pub status: LoadStatus,
    pub loading_label: String,
    pub error_label: String,
}

#[function_component(LoadingIndicator)]
pub fn loading_indicator(props: &LoadingIndicatorProps) -> Html {
    match &props.status {
        LoadStatus::Ready => html! { <div id="loading-indicator" style="display:none;"></div> },
        LoadStatus::Loading => html! {
            <div id="loading-indicator" class="text-center py-10 text-slate-500">
                <i class="ph-bold ph-spinner animate-spin text-3xl"></i>
                <p class="mt-2">{ props.loading_label.clone() }</p>
            </div>
        },
        LoadStatus::Failed(_) => html! {
            <div id="loading-indicator" class="text-center py-10">
                <p class="text-red-500">{ props.error_label.clone() }</p>
            </div>
        },
    }
}
