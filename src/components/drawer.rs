use yew::prelude::*;

use crate::content::{DRAWER_SECTIONS, Section};

#[derive(Properties, PartialEq, Clone)]
pub struct DrawerProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub on_nav: Callback<Section>,
    pub on_book_call: Callback<()>,
}

/// Slide-in mobile navigation panel plus its backdrop. Open/close state is
/// owned by the parent; this component only renders it.
#[function_component(Drawer)]
pub fn drawer(props: &DrawerProps) -> Html {
    let backdrop_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let brand_cb = {
        let cb = props.on_nav.clone();
        Callback::from(move |_| cb.emit(Section::Home))
    };
    let book_cb = {
        let cb = props.on_book_call.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <>
            <div
                class={classes!("drawer-backdrop", props.open.then_some("open"))}
                onclick={backdrop_cb}
            />
            <div class={classes!("drawer", props.open.then_some("open"))}>
                <div class="drawer-header">
                    <div class="drawer-brand" onclick={brand_cb}>
                        <img src="/awani-icon.png" alt="Awāni" class="drawer-logo" />
                        <span class="gradient-text">{"Awāni"}</span>
                    </div>
                    <button
                        class="drawer-close"
                        onclick={close_cb}
                        aria-label="Close navigation menu"
                    >
                        <i class="fa-solid fa-xmark"></i>
                    </button>
                </div>
                <div class="drawer-links">
                    { for DRAWER_SECTIONS.iter().map(|&(section, icon)| {
                        let cb = props.on_nav.clone();
                        let onclick = Callback::from(move |_| cb.emit(section));
                        html! {
                            <a {onclick}>
                                <i class={icon}></i>
                                { " " }
                                { section.drawer_label() }
                            </a>
                        }
                    }) }
                </div>
                <div class="drawer-footer">
                    <button class="drawer-cta" onclick={book_cb}>
                        <i class="fa-solid fa-phone"></i>
                        { " Book a Call" }
                    </button>
                </div>
            </div>
        </>
    }
}
