use super::{hero::Hero, navbar::Navbar, portfolio_section::PortfolioSection};
use crate::animation;
use crate::config::SiteConfig;
use crate::model::CatalogState;
use crate::services::load_catalog;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| SiteConfig::load());
    let limit = config.initial_limit;
    let catalog = use_reducer(move || CatalogState::new(limit));

    // Page ready: configure animations once, then start the single catalog fetch
    {
        let config = config.clone();
        let dispatcher = catalog.dispatcher();
        use_effect_with((), move |_| {
            animation::init(&config.animation);
            load_catalog(config.catalog_url.clone(), dispatcher);
            || ()
        });
    }

    html! {
        <ContextProvider<SiteConfig> context={(*config).clone()}>
            <Navbar />
            <main>
                <Hero />
                <PortfolioSection catalog={catalog.clone()} />
            </main>
            <footer id="contact" class="bg-slate-900 text-slate-400 py-10 text-center text-sm">
                { config.labels.footer.clone() }
            </footer>
        </ContextProvider<SiteConfig>>
    }
}
