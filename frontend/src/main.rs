use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod error;
mod hooks;
mod widgets {
    pub mod catalog;
    pub mod facet_filter;
    pub mod carousel;
    pub mod counter;
    pub mod parallax;
    pub mod contact;
}
mod components {
    pub mod neon_button;
    pub mod neon_card;
    pub mod neon_input;
    pub mod glitch_text;
    pub mod logo;
    pub mod reveal;
}
mod sections {
    pub mod hero;
    pub mod about;
    pub mod courses;
    pub mod events;
    pub mod achievements;
    pub mod contact;
}
mod layout {
    pub mod header;
    pub mod footer;
}

use layout::{footer::Footer, header::Header};
use sections::{
    about::AboutSection,
    achievements::AchievementsSection,
    contact::ContactSection,
    courses::CoursesSection,
    events::EventsSection,
    hero::HeroSection,
};


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
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[function_component(Home)]
fn home() -> Html {
    html! {
        <main>
            <HeroSection />
            <AboutSection />
            <CoursesSection />
            <EventsSection />
            <AchievementsSection />
            <ContactSection />
        </main>
    }
}


#[function_component]
fn App() -> Html {
    use_effect_with_deps(
        move |_| {
            if let Ok(document) = error::document() {
                document.set_title("Cyber Academy | Future of Education");
            }
            || ()
        },
        (),
    );

    html! {
        <BrowserRouter basename={config::base_path().map(AttrValue::from)}>
            <div class="app-shell">
                <div class="cyber-grid-overlay"></div>
                <Header />
                <Switch<Route> render={switch} />
                <Footer />
            </div>
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
    console_log::init_with_level(level).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
