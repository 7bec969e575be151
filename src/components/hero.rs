use yew::prelude::*;

use crate::content::Section;

#[derive(Properties, PartialEq, Clone)]
pub struct HeroProps {
    pub on_nav: Callback<Section>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let nav = |section: Section| {
        let cb = props.on_nav.clone();
        Callback::from(move |_| cb.emit(section))
    };

    html! {
        <section id={Section::Home.id()} class="hero">
            <div class="animated-bg">
                <div class="orb orb-1"></div>
                <div class="orb orb-2"></div>
                <div class="orb orb-3"></div>
            </div>
            <div class="hero-content">
                <div class="fade-in">
                    <div class="subtitle">
                        {"26+ Years Building Enterprise-Scale Systems | 360 degree Mobility Platform ~$360M+ Exit"}
                    </div>
                    <h1 class="hero-title">
                        {"Helping businesses build "}<br />
                        <span class="gradient-text">{"better software, faster"}</span>
                    </h1>
                    <p class="hero-description">
                        {"Carrier & Utility-Grade IoT • Voice AI • Enterprise Architecture • Fractional CTO"}
                    </p>
                    <div class="hero-buttons">
                        <button class="primary-button glow-button" onclick={nav(Section::Services)}>
                            {"View Solutions"}
                        </button>
                        <button class="secondary-button" onclick={nav(Section::Experts)}>
                            {"View Experts"}
                        </button>
                        <button class="secondary-button" onclick={nav(Section::CaseStudy)}>
                            {"See Case Studies"}
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
