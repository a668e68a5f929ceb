use web_sys::HtmlImageElement;
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::model::CardView;
use crate::util::{placeholder_url, take_fallback};

#[derive(Properties, PartialEq, Clone)]
pub struct ProjectCardProps {
    pub card: CardView,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let rec = &props.card.record;
    let fallback = placeholder_url(&config.placeholder_base, &rec.title);
    let src = if rec.image.trim().is_empty() {
        fallback.clone()
    } else {
        rec.image.clone()
    };
    let swapped = use_mut_ref(|| false);
    let on_img_error = {
        let fallback = fallback.clone();
        let swapped = swapped.clone();
        Callback::from(move |e: Event| {
            if !take_fallback(&mut swapped.borrow_mut()) {
                return;
            }
            if let Some(img) = e.target_dyn_into::<HtmlImageElement>() {
                img.set_src(&fallback);
            }
        })
    };
    let tags = rec
        .tags
        .iter()
        .map(|tag| html! { <span class="text-xs font-semibold bg-blue-50 text-blue-600 px-2 py-1 rounded">{ tag.clone() }</span> })
        .collect::<Html>();

    html! {
        <div class="bg-white rounded-xl overflow-hidden shadow-lg hover:shadow-2xl transition duration-300 group flex flex-col h-full"
             data-aos="fade-up"
             data-aos-delay={props.card.delay_ms.to_string()}>
            <div class="relative overflow-hidden aspect-video">
                <img src={src} alt={rec.title.clone()} onerror={on_img_error}
                     class="w-full h-full object-cover transform group-hover:scale-110 transition duration-500" />
                <div class="absolute inset-0 bg-black bg-opacity-40 opacity-0 group-hover:opacity-100 transition duration-300 flex items-center justify-center">
                    <a href={rec.link.clone()} target="_blank"
                       class="bg-white text-slate-900 px-6 py-2 rounded-full font-bold hover:bg-primary hover:text-white transition transform translate-y-4 group-hover:translate-y-0">
                        { config.labels.visit_overlay.clone() }
                    </a>
                </div>
            </div>
            <div class="p-6 flex-1 flex flex-col">
                <div class="flex gap-2 mb-3 flex-wrap">{ tags }</div>
                <h3 class="text-xl font-bold text-slate-900 mb-2">{ rec.title.clone() }</h3>
                <p class="text-slate-500 text-sm mb-4 flex-1">{ rec.desc.clone() }</p>
                <a href={rec.link.clone()} target="_blank"
                   class="text-primary font-semibold text-sm flex items-center gap-1 hover:gap-2 transition-all">
                    { config.labels.visit_link.clone() }
                    <i class="ph-bold ph-arrow-right"></i>
                </a>
            </div>
        </div>
    }
}
