use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use super::mobile_menu::MobileMenu;
use crate::config::SiteConfig;
use crate::state::{NavbarStyle, navbar_style};

pub const NAV_LINKS: [(&str, &str); 3] = [
    ("Home", "#home"),
    ("Portfolio", "#portfolio"),
    ("Contact", "#contact"),
];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let style = use_state(NavbarStyle::default);
    let menu_open = use_state(|| false);

    // Window scroll listener; re-evaluated on every event, no throttling
    {
        let style = style.clone();
        let threshold = config.navbar_threshold;
        let sticky = config.sticky_navbar_background;
        let last = use_mut_ref(NavbarStyle::default);
        use_effect_with((threshold, sticky), move |_| {
            let window = web_sys::window();
            let scroll_cb = window.as_ref().map(|win| {
                let win_inner = win.clone();
                let apply = move || {
                    let y = win_inner.scroll_y().unwrap_or(0.0);
                    let prev = *last.borrow();
                    let next = navbar_style(y, threshold, sticky, prev);
                    if next != prev {
                        *last.borrow_mut() = next;
                        style.set(next);
                    }
                };
                apply();
                let cb = Closure::wrap(Box::new(move |_e: web_sys::Event| apply())
                    as Box<dyn FnMut(_)>);
                let _ = win.add_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
                cb
            });
            move || {
                if let (Some(win), Some(cb)) = (window, scroll_cb) {
                    let _ = win.remove_event_listener_with_callback(
                        "scroll",
                        cb.as_ref().unchecked_ref(),
                    );
                    drop(cb);
                }
            }
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(false))
    };

    let desktop_links = NAV_LINKS
        .iter()
        .map(|(label, href)| html! {
            <a href={*href} class="text-slate-600 hover:text-primary font-medium transition">{ *label }</a>
        })
        .collect::<Html>();

    html! {
        <nav id="navbar" class={classes!("fixed", "top-0", "w-full", "z-50", "border-b", "transition", "duration-300", style.classes())}>
            <div class="max-w-6xl mx-auto px-4 flex justify-between items-center h-16">
                <a href="#home" class="text-2xl font-bold text-primary">{ config.labels.brand.clone() }</a>
                <div class="hidden md:flex space-x-8">{ desktop_links }</div>
                <button id="mobile-menu-btn" onclick={toggle_menu} class="md:hidden text-slate-700">
                    <i class="ph-bold ph-list text-2xl"></i>
                </button>
            </div>
            <MobileMenu open={*menu_open} links={NAV_LINKS.to_vec()} on_close={close_menu} />
        </nav>
    }
}
