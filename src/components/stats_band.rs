use yew::prelude::*;

use crate::content::STATS;

#[function_component(StatsBand)]
pub fn stats_band() -> Html {
    html! {
        <section class="section dark-section">
            <div class="container">
                <div class="stats-grid">
                    { for STATS.iter().map(|stat| html! {
                        <div class="stat-item">
                            <div class="stat-value gradient-text">{ stat.value }</div>
                            <div class="stat-label">{ stat.label }</div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
