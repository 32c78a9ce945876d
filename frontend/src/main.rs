use yew::prelude::*;
use log::info;

mod config;
mod error;
mod viewport;
mod behaviors {
    pub mod scroll_state;
    pub mod count_up;
    pub mod ticker;
}
mod components {
    pub mod nav;
    pub mod reveal;
    pub mod cards;
    pub mod stat_card;
}
mod pages {
    pub mod landing;
}

use components::nav::Nav;
use pages::landing::Landing;


#[function_component]
fn App() -> Html {
    info!("Rendering landing page");

    html! {
        <>
            <Nav />
            <Landing />
        </>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting MatchTrack");
    yew::Renderer::<App>::new().render();
}
