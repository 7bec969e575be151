use yew::prelude::*;

use crate::content::Section;

#[derive(Properties, PartialEq, Clone)]
pub struct FooterProps {
    pub on_nav: Callback<Section>,
}

const FOOTER_SECTIONS: [Section; 4] = [
    Section::Services,
    Section::CaseStudy,
    Section::Pricing,
    Section::Contact,
];

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let home_cb = {
        let cb = props.on_nav.clone();
        Callback::from(move |_| cb.emit(Section::Home))
    };

    html! {
        <footer class="footer">
            <div class="container">
                <div class="footer-content">
                    <div class="footer-left">
                        <div class="footer-brand" onclick={home_cb} style="cursor:pointer;">
                            <img src="/awani-icon.png" alt="Awāni" class="footer-logo" />
                            <span class="logo gradient-text">{"Awāni Product Consulting"}</span>
                        </div>
                        <p>{"Scaling to cover the globe..."}</p>
                    </div>
                    <div class="footer-links">
                        { for FOOTER_SECTIONS.iter().map(|&section| html! {
                            <a href={format!("#{}", section.id())}>{ section.nav_label() }</a>
                        }) }
                    </div>
                </div>
                <div class="footer-bottom">
                    <p class="shariah-notice">{"Committed to ethical business practices"}</p>
                    <p>{"© 2026 Awāni Product Consulting. All rights reserved."}</p>
                </div>
            </div>
        </footer>
    }
}
