use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;

mod config;
mod preferences;
mod animation {
    pub mod counter;
    pub mod drift;
    pub mod reveal;
    pub mod scroll;
    pub mod tilt;
}
mod hooks {
    pub mod counter;
    pub mod reveal;
    pub mod scroll;
}
mod components {
    pub mod features;
    pub mod hero;
    pub mod partners;
    pub mod pricing;
    pub mod section_header;
    pub mod steps;
}
mod pages {
    pub mod faq;
    pub mod landing;
}
mod waitlist {
    pub mod form;
    pub mod state;
}
mod easter_egg {
    pub mod konami;
    pub mod overlay;
}

use animation::scroll::nav_is_scrolled;
use hooks::scroll::{use_anchor_scrolling, use_scroll_y};
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
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

const NAV_LINKS: &[(&str, &str)] = &[
    ("#how-it-works", "How it works"),
    ("#crew", "Crew"),
    ("#pricing", "Pricing"),
    ("#faq", "FAQ"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let nav_ref = use_node_ref();
    let menu_open = use_state(|| false);
    let is_scrolled = nav_is_scrolled(use_scroll_y());
    use_anchor_scrolling(nav_ref.clone());

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchor clicks are handled by the window listener; this only folds the menu.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav ref={nav_ref} class={classes!("nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#home" class="nav-logo">{"SparkCrew"}</a>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav-link" onclick={close_menu.clone()}>{*label}</a>
                    }) }
                    <a href="#waitlist" class="nav-cta" onclick={close_menu.clone()}>{"Join waitlist"}</a>
                </div>
            </div>
            <style>
                {r#"
                .nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 1000;
                    background: rgba(10, 10, 15, 0.85);
                    backdrop-filter: blur(12px);
                    box-shadow: none;
                    transition: background var(--transition-smooth) ease, box-shadow var(--transition-smooth) ease;
                }

                .nav.scrolled {
                    background: rgba(10, 10, 15, 0.95);
                    box-shadow: 0 4px 20px rgba(0, 212, 255, 0.1);
                }

                .nav-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .nav-logo {
                    font-weight: 700;
                    font-size: 1.3rem;
                    color: var(--color-text);
                    text-decoration: none;
                }

                .nav-right {
                    display: flex;
                    gap: 1.5rem;
                    align-items: center;
                }

                .nav-link {
                    color: var(--color-text-secondary);
                    text-decoration: none;
                }

                .nav-link:hover {
                    color: var(--color-text);
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }

                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: var(--color-text);
                }

                @media (max-width: 900px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        padding: 1.5rem;
                        background: rgba(10, 10, 15, 0.95);
                    }
                }
                "#}
            </style>
        </nav>
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
    console_log::init_with_level(Level::Info).expect("error initializing log");

    preferences::apply_user_preferences();

    info!("SparkCrew landing page loaded");
    gloo_console::log!("💡 Try the Konami Code for a special surprise...");
    yew::Renderer::<App>::new().render();
}
