use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod particles;
mod storage;
mod intro {
    pub mod curtain;
    pub mod gate;
}
mod cursor {
    pub mod animated_cursor;
    pub mod bindings;
    pub mod interactive;
    pub mod pointer;
    pub mod suppression;
}
mod components {
    pub mod animated_card;
    pub mod buttons;
    pub mod floating_elements;
    pub mod glowing_text;
    pub mod reveal;
    pub mod text_reveal;
    pub mod thunder_border;
}
mod layout {
    pub mod footer;
    pub mod nav;
    pub mod shell;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod not_found;
    pub mod work;
}

use cursor::animated_cursor::AnimatedCursor;
use cursor::interactive::InteractiveTargetsProvider;
use intro::curtain::CurtainAnimation;
use layout::shell::Layout;
use pages::{about::About, contact::Contact, home::Home, not_found::NotFound, work::Work};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/work")]
    Work,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Work => {
            info!("Rendering Work page");
            html! { <Work /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let intro_done = use_state(|| false);

    let on_complete = {
        let intro_done = intro_done.clone();
        Callback::from(move |_| {
            info!("Intro finished, mounting site");
            intro_done.set(true);
        })
    };

    html! {
        <BrowserRouter>
            <InteractiveTargetsProvider>
                <AnimatedCursor />
                if *intro_done {
                    <Layout>
                        <Switch<Route> render={switch} />
                    </Layout>
                } else {
                    <CurtainAnimation {on_complete} />
                }
            </InteractiveTargetsProvider>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    if let Err(e) = config::INTRO_TIMING.validate() {
        gloo_console::error!(format!("intro timing misconfigured: {}", e));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
