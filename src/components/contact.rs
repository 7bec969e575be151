use yew::prelude::*;

use crate::content::Section;

#[derive(Properties, PartialEq, Clone)]
pub struct ContactProps {
    pub on_book_call: Callback<()>,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let book_cb = {
        let cb = props.on_book_call.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section id={Section::Contact.id()} class="section">
            <div class="container">
                <div class="contact-card glass-card">
                    <h2 class="gradient-text">{"Let's Work Together"}</h2>
                    <p>{"Ready to transform your business with better software?"}</p>
                    <div class="contact-info">
                        <div class="contact-item">
                            <div class="contact-icon-box"><i class="fa-solid fa-envelope"></i></div>
                            <a href="mailto:consulting@awani.ai">{"consulting@awani.ai"}</a>
                        </div>
                        <div class="contact-item">
                            <div class="contact-icon-box"><i class="fa-solid fa-location-dot"></i></div>
                            <span>{"Ohio, USA (Serving clients globally)"}</span>
                        </div>
                        <div class="contact-item">
                            <div class="contact-icon-box"><i class="fa-solid fa-clock"></i></div>
                            <span>{"Available across all time zones"}</span>
                        </div>
                    </div>
                    <button class="primary-button glow-button" onclick={book_cb}>
                        {"Schedule Discovery Call"}
                    </button>
                </div>
            </div>
        </section>
    }
}
