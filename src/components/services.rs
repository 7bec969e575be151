use yew::prelude::*;

use crate::content::{SERVICES, Section};

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id={Section::Services.id()} class="section">
            <div class="container">
                <h2 class="section-title">{"Solution Consulting"}</h2>
                <p class="section-subtitle">
                    {"Enterprise-grade solutions across AI, IoT, and software architecture"}
                </p>
                <div class="services-grid">
                    { for SERVICES.iter().map(|card| html! {
                        <div class="service-card glass-card">
                            <div class="service-icon-wrapper">
                                <div class="service-icon gradient-icon">{ card.icon }</div>
                            </div>
                            <h3>{ card.title }</h3>
                            <p>{ card.blurb }</p>
                            <ul class="service-features">
                                { for card.features.iter().map(|f| html! { <li>{ *f }</li> }) }
                            </ul>
                            <div class="service-price">{ card.price }</div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
