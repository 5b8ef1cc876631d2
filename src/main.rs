use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod download;
mod theme;
mod components {
    pub mod case_overlay;
    pub mod counters;
    pub mod lead_form;
    pub mod menu;
    pub mod newsletter;
    pub mod ripple;
    pub mod scroll;
    pub mod tilt;
    pub mod typed;
}
mod wizard {
    pub mod engine;
    pub mod quiz;
    pub mod roi;
}
mod pages {
    pub mod home;
    pub mod blog;
}

use components::menu::MobileMenu;
use components::scroll::header_scrolled;
use pages::{
    home::Home,
    blog::{Blog, BlogPost},
};
use theme::{LocalStorage, ThemeController, ThemePreference};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/blog")]
    Blog,
    #[at("/blog/:slug")]
    BlogPost { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::NotFound => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        },
        Route::BlogPost { slug } => {
            info!("Rendering Blog post {}", slug);
            html! { <BlogPost {slug} /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_state(MobileMenu::default);
    let is_scrolled = use_state(|| {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .map(header_scrolled)
            .unwrap_or(false)
    });
    let controller = use_mut_ref(|| ThemeController::load(LocalStorage));
    let active_theme = use_state(|| controller.borrow().current());

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = Closure::wrap(Box::new(move || {
                if let Some(scroll_y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                    is_scrolled.set(header_scrolled(scroll_y));
                }
            }) as Box<dyn FnMut()>);

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_theme = {
        let active_theme = active_theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = controller.borrow_mut().toggle();
            theme::apply(next);
            active_theme.set(next);
        })
    };

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.set(menu.toggled());
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(MobileMenu::closed());
        })
    };

    let theme_label = match *active_theme {
        ThemePreference::Light => "Ativar tema escuro",
        ThemePreference::Dark => "Ativar tema claro",
    };

    html! {
        <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"M2 Estratégia"}
                </Link<Route>>

                <nav class={menu.menu_class()}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes="nav-link">{"Início"}</Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <a href="/#servicos" class="nav-link">{"Serviços"}</a>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Blog} classes="nav-link">{"Blog"}</Link<Route>>
                    </div>
                </nav>

                <button class="theme-toggle" aria-label={theme_label} onclick={toggle_theme}>
                    { if *active_theme == ThemePreference::Light { "☾" } else { "☀" } }
                </button>
                <button
                    class={menu.toggle_class()}
                    aria-expanded={menu.aria_expanded()}
                    aria-label={menu.aria_label()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </header>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    // Stored theme goes on before the first paint
    theme::apply(ThemeController::load(LocalStorage).current());

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
