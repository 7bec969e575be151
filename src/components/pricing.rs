use yew::prelude::*;

use crate::content::{PRICING_TIERS, Section};

#[function_component(Pricing)]
pub fn pricing() -> Html {
    html! {
        <section id={Section::Pricing.id()} class="section">
            <div class="container">
                <h2 class="section-title">{"Pricing Tiers"}</h2>
                <p class="section-subtitle">{"Flexible pricing to match your needs"}</p>
                <div class="pricing-grid">
                    { for PRICING_TIERS.iter().map(|tier| html! {
                        <div class={classes!(
                            "pricing-card",
                            "glass-card",
                            tier.featured.then_some("featured"),
                        )}>
                            if tier.featured {
                                <div class="featured-badge">{"Most Popular"}</div>
                            }
                            <div class="pricing-header">
                                <h3>{ tier.name }</h3>
                                <div class="pricing-amount gradient-text">{ tier.amount }</div>
                                <div class="pricing-timeline">{ tier.timeline }</div>
                            </div>
                            <ul class="pricing-features">
                                { for tier.features.iter().map(|f| html! { <li>{ *f }</li> }) }
                            </ul>
                            <div class="pricing-badge">{ tier.badge }</div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
