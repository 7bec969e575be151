use awani_portfolio::components::app::App;

fn main() {
    awani_portfolio::util::clog("mounting awani-portfolio");
    yew::Renderer::<App>::new().render();
}
