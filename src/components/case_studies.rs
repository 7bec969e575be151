use yew::prelude::*;

use crate::content::{CASE_STUDIES, Section};

#[function_component(CaseStudies)]
pub fn case_studies() -> Html {
    html! {
        <section id={Section::CaseStudy.id()} class="section">
            <div class="container">
                <h2 class="section-title">{"Case Studies"}</h2>
                <p class="section-subtitle">{"Real projects, real results"}</p>
                <div class="case-studies-grid">
                    { for CASE_STUDIES.iter().map(|cs| html! {
                        <div class="case-study-card glass-card">
                            <div class="case-study-header">
                                <h3>{ cs.title }</h3>
                                <div class="case-study-tags">
                                    { for cs.tags.iter().map(|t| html! {
                                        <span class="tag">{ *t }</span>
                                    }) }
                                </div>
                            </div>
                            <div class="case-study-content">
                                <div class="case-study-section">
                                    <h4>{"Challenge"}</h4>
                                    <p>{ cs.challenge }</p>
                                </div>
                                <div class="case-study-section">
                                    <h4>{"Solution"}</h4>
                                    <ul>
                                        { for cs.solution.iter().map(|s| html! { <li>{ *s }</li> }) }
                                    </ul>
                                </div>
                                <div class="case-study-section">
                                    <h4>{"Results"}</h4>
                                    <div class="results-grid">
                                        { for cs.results.iter().map(|r| html! {
                                            <div class="result-item">
                                                <div class="result-value gradient-text">{ r.value }</div>
                                                <div class="result-label">{ r.label }</div>
                                            </div>
                                        }) }
                                    </div>
                                </div>
                                <div class="case-study-tech">
                                    <strong>{"Technologies: "}</strong>
                                    { cs.technologies }
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
