use super::project_card::ProjectCard;
use crate::model::CardView;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProjectGridProps {
    pub cards: Vec<CardView>,
    pub grid_ref: NodeRef,
}

#[function_component(ProjectGrid)]
pub fn project_grid(props: &ProjectGridProps) -> Html {
    let cards = props
        .cards
        .iter()
        .map(|card| {
            let key = card.index;
            html! { <ProjectCard key={key} card={card.clone()} /> }
        })
        .collect::<Html>();
    html! {
        <div id="project-grid" ref={props.grid_ref.clone()} class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
            { cards }
        </div>
    }
}
