use yew::prelude::*;

use crate::content::{EXPERTS, Section};

#[function_component(Experts)]
pub fn experts() -> Html {
    html! {
        <section id={Section::Experts.id()} class="section">
            <div class="container">
                <h2 class="section-title">{"Expert Consultants"}</h2>
                <p class="section-subtitle">{"World-class expertise across every discipline"}</p>
                <div class="experts-grid">
                    { for EXPERTS.iter().map(|expert| html! {
                        <div class="expert-card glass-card">
                            <div class="expert-icon"><i class={expert.icon}></i></div>
                            <h4>{ expert.title }</h4>
                            <p class="expert-experience">{ expert.experience }</p>
                            <p class="expert-description">{ expert.blurb }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
