use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod hooks {
    pub mod reveal;
}
mod components {
    pub mod extension_mockup;
    pub mod mock_dashboard;
    pub mod nav;
    pub mod telegram_mockup;
    pub mod waitlist;
}
mod pages {
    pub mod landing;
}

use content::CLAWBOOKS;
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing content={&CLAWBOOKS} /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting to landing page");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter basename={config::router_basename()}>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // The page works without logging, so a failed init is not fatal
    let _ = console_log::init_with_level(config::log_level());

    info!("Starting ClawBooks landing page under {}", config::base_path());
    yew::Renderer::<App>::new().render();
}
