use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MobileMenuProps {
    pub open: bool,
    pub links: Vec<(&'static str, &'static str)>,
    pub on_close: Callback<()>,
}

#[function_component(MobileMenu)]
pub fn mobile_menu(props: &MobileMenuProps) -> Html {
    let links = props
        .links
        .iter()
        .map(|(label, href)| {
            let close_cb = {
                let cb = props.on_close.clone();
                Callback::from(move |_| cb.emit(()))
            };
            html! {
                <a href={*href} onclick={close_cb}
                   class="block px-3 py-2 rounded-md text-slate-600 hover:text-primary hover:bg-blue-50">{ *label }</a>
            }
        })
        .collect::<Html>();
    html! {
        <div id="mobile-menu" class={classes!("md:hidden", "bg-white", "border-t", (!props.open).then_some("hidden"))}>
            <div class="px-4 pt-2 pb-4 space-y-1">{ links }</div>
        </div>
    }
}
