use crate::model::ToggleView;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ToggleButtonProps {
    /// `None` hides the whole container.
    pub view: Option<ToggleView>,
    pub show_all_label: String,
    pub collapse_label: String,
    pub on_toggle: Callback<()>,
}

#[function_component(ToggleButton)]
pub fn toggle_button(props: &ToggleButtonProps) -> Html {
    let toggle_cb = {
        let cb = props.on_toggle.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let (label, icon) = match props.view {
        Some(ToggleView::Collapse) => (props.collapse_label.clone(), "ph-caret-up"),
        _ => (props.show_all_label.clone(), "ph-caret-down"),
    };
    html! {
        <div id="btn-container" class={classes!("text-center", "mt-12", props.view.is_none().then_some("hidden"))}>
            <button id="load-more-btn" onclick={toggle_cb}
                class="inline-flex items-center bg-white border-2 border-primary text-primary px-8 py-3 rounded-full font-semibold hover:bg-primary hover:text-white transition">
                { label }
                <i class={classes!("ph-bold", icon, "ml-2")}></i>
            </button>
        </div>
    }
}
