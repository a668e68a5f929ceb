use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use super::{
    loading_indicator::LoadingIndicator, project_grid::ProjectGrid, toggle_button::ToggleButton,
};
use crate::animation;
use crate::config::SiteConfig;
use crate::model::{CatalogAction, CatalogState};

#[derive(Properties, PartialEq, Clone)]
pub struct PortfolioSectionProps {
    pub catalog: UseReducerHandle<CatalogState>,
}

#[function_component(PortfolioSection)]
pub fn portfolio_section(props: &PortfolioSectionProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let section_ref = use_node_ref();
    let grid_ref = use_node_ref();

    // Effect: after each rendered grid version, re-arm animations and finish a collapse scroll
    {
        let grid_ref = grid_ref.clone();
        let section_ref = section_ref.clone();
        let scroll_to_section = props.catalog.scroll_to_section;
        let delay = config.refresh_delay_ms;
        use_effect_with(props.catalog.version, move |version| {
            if *version > 0 && grid_ref.get().is_some() {
                animation::schedule_refresh(delay);
            }
            if scroll_to_section {
                if let Some(section) = section_ref.cast::<Element>() {
                    let opts = ScrollIntoViewOptions::new();
                    opts.set_behavior(ScrollBehavior::Smooth);
                    section.scroll_into_view_with_scroll_into_view_options(&opts);
                }
            }
            || ()
        });
    }

    let on_toggle = {
        let catalog = props.catalog.clone();
        Callback::from(move |_| catalog.dispatch(CatalogAction::Toggle))
    };

    html! {
        <section id="portfolio" ref={section_ref} class="py-20 bg-slate-50">
            <div class="max-w-6xl mx-auto px-4">
                <div class="text-center mb-12" data-aos="fade-up">
                    <h2 class="text-3xl md:text-4xl font-bold text-slate-900 mb-4">{ config.labels.portfolio_heading.clone() }</h2>
                </div>
                <LoadingIndicator
                    status={props.catalog.status.clone()}
                    loading_label={config.labels.loading.clone()}
                    error_label={config.labels.load_error.clone()}
                />
                <ProjectGrid cards={props.catalog.cards(config.reveal_step_ms)} grid_ref={grid_ref} />
                <ToggleButton
                    view={props.catalog.toggle_view()}
                    show_all_label={config.labels.show_all.clone()}
                    collapse_label={config.labels.collapse.clone()}
                    on_toggle={on_toggle}
                />
            </div>
        </section>
    }
}
