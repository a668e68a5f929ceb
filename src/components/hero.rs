use crate::config::SiteConfig;
use yew::prelude::*;

#[function_component(Hero)]
pub fn hero() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    html! {
        <section id="home" class="pt-32 pb-20 bg-gradient-to-br from-slate-50 to-blue-50">
            <div class="max-w-6xl mx-auto px-4 text-center" data-aos="fade-up">
                <h1 class="text-4xl md:text-6xl font-bold text-slate-900 mb-6">{ config.labels.headline.clone() }</h1>
                <p class="text-lg text-slate-500 max-w-2xl mx-auto mb-8">{ config.labels.tagline.clone() }</p>
                <a href="#portfolio" class="inline-flex items-center bg-primary text-white px-8 py-3 rounded-full font-semibold hover:bg-blue-800 transition">
                    { config.labels.hero_cta.clone() }
                    <i class="ph-bold ph-arrow-down ml-2"></i>
                </a>
            </div>
        </section>
    }
}
