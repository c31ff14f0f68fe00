mod components;
mod model;
mod runtime;
mod session;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
