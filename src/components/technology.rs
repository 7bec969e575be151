use yew::prelude::*;

use crate::content::{Section, TECH_CATEGORIES};

#[function_component(Technology)]
pub fn technology() -> Html {
    html! {
        <section id={Section::Technology.id()} class="section dark-section">
            <div class="container">
                <h2 class="section-title">{"Technology Expertise"}</h2>
                <div class="tech-categories">
                    { for TECH_CATEGORIES.iter().map(|cat| html! {
                        <div class="tech-category">
                            <h4>{ cat.name }</h4>
                            <div class="tech-tags">
                                { for cat.tags.iter().map(|t| html! {
                                    <span class="tech-tag">{ *t }</span>
                                }) }
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
