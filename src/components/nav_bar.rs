use yew::prelude::*;

use crate::content::{NAV_SECTIONS, Section};

#[derive(Properties, PartialEq, Clone)]
pub struct NavBarProps {
    pub on_open_drawer: Callback<()>,
    pub on_nav: Callback<Section>,
    pub on_book_call: Callback<()>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let open_cb = {
        let cb = props.on_open_drawer.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let home_cb = {
        let cb = props.on_nav.clone();
        Callback::from(move |_| cb.emit(Section::Home))
    };
    let book_cb = {
        let cb = props.on_book_call.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <nav class="nav">
            <div class="nav-content">
                <button
                    class="mobile-menu-toggle"
                    onclick={open_cb}
                    aria-label="Open navigation menu"
                >
                    <i class="fa-solid fa-bars"></i>
                </button>
                <div class="logo-container" onclick={home_cb}>
                    <img src="/awani-icon.png" alt="Awāni" class="logo-image" />
                    <span class="logo-text gradient-text">{"Awāni"}</span>
                </div>
                <div class="nav-links">
                    { for NAV_SECTIONS.iter().map(|&section| {
                        let cb = props.on_nav.clone();
                        let onclick = Callback::from(move |_| cb.emit(section));
                        html! {
                            <a href={format!("#{}", section.id())} {onclick}>
                                { section.nav_label() }
                            </a>
                        }
                    }) }
                </div>
                <button class="cta-button" onclick={book_cb}>{"Book Call"}</button>
            </div>
        </nav>
    }
}
