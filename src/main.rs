use gloo_timers::callback::Timeout;
use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod wizard {
    pub mod relay;
    pub mod scroll_lock;
    pub mod state;
    pub mod store;
}
mod components {
    pub mod awards;
    pub mod blog;
    pub mod faq;
    pub mod footer;
    pub mod hero;
    pub mod popup;
    pub mod portfolio;
    pub mod pricing;
    pub mod process_timeline;
    pub mod reveal;
    pub mod service_card;
    pub mod services_grid;
    pub mod testimonials;
    pub mod toast;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod projects;
    pub mod services;
}

use components::footer::Footer;
use components::popup::LeadPopup;
use components::toast::{Toast, ToastMessage};
use pages::{
    about::About, contact::Contact, home::Home, projects::Projects, services::Services,
};
use wizard::store::{should_auto_show, SharedFlags};

/// How long a first-time visitor browses before the quote popup offers
/// itself.
const AUTO_SHOW_DELAY_MS: u32 = 8_000;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/projects")]
    Projects,
    #[at("/contact")]
    Contact,
}

/// Handed down through context so any page section can open the quote
/// wizard.
#[derive(Clone, PartialEq)]
pub struct QuoteLauncher(pub Callback<()>);

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        }
        Route::Projects => {
            info!("Rendering Projects page");
            html! { <Projects /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_quote: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let route = use_route::<Route>();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 50);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let request_quote = {
        let menu_open = menu_open.clone();
        let on_quote = props.on_quote.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            on_quote.emit(());
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    let link = |to: Route, label: &str| {
        let active = route == Some(to.clone());
        html! {
            <div onclick={close_menu.clone()}>
                <Link<Route>
                    {to}
                    classes={classes!("nav-link", active.then_some("active"))}
                >
                    { label }
                </Link<Route>>
            </div>
        }
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: transparent;
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(0, 0, 0, 0.95);
                        backdrop-filter: blur(4px);
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        height: 4rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #D4AF37;
                    }
                    .nav-logo-mark {
                        width: 2rem;
                        height: 2rem;
                        border-radius: 9999px;
                        background: #D4AF37;
                        color: #000;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1rem;
                    }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #fff;
                        transition: color 0.2s ease;
                    }
                    .nav-link:hover { color: #D4AF37; }
                    .nav-link.active {
                        color: #D4AF37;
                        border-bottom: 2px solid #D4AF37;
                        padding-bottom: 0.25rem;
                    }
                    .nav-quote-button {
                        background: #D4AF37;
                        color: #000;
                        border: none;
                        padding: 0.5rem 1.25rem;
                        border-radius: 0.5rem;
                        font-weight: 600;
                        transition: background 0.3s ease;
                    }
                    .nav-quote-button:hover { background: #B8941F; }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 0.3rem;
                        background: none;
                        border: none;
                    }
                    .burger-menu span {
                        width: 1.5rem;
                        height: 2px;
                        background: #fff;
                    }
                    @media (max-width: 768px) {
                        .burger-menu { display: flex; }
                        .nav-right {
                            display: none;
                            position: absolute;
                            top: 4rem;
                            left: 0;
                            right: 0;
                            background: rgba(0, 0, 0, 0.97);
                            flex-direction: column;
                            padding: 1.5rem;
                            gap: 1.25rem;
                        }
                        .nav-right.mobile-menu-open { display: flex; }
                    }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="nav-logo-mark">{"H"}</span>
                    {"Home Sphere"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { link(Route::Home, "Home") }
                    { link(Route::About, "About") }
                    { link(Route::Services, "Services") }
                    { link(Route::Projects, "Projects") }
                    { link(Route::Contact, "Contact") }
                    <button class="nav-quote-button" onclick={request_quote}>
                        {"Get Free Quote"}
                    </button>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let popup_open = use_state(|| false);
    let toast = use_state(|| None::<ToastMessage>);
    let flags = use_memo(|_| SharedFlags::session(), ());

    // One-shot auto-show, suppressed for the rest of the session once the
    // popup has been seen.
    {
        let popup_open = popup_open.clone();
        let flags = (*flags).clone();
        use_effect_with_deps(
            move |_| {
                let timer = should_auto_show(&*flags)
                    .then(|| Timeout::new(AUTO_SHOW_DELAY_MS, move || popup_open.set(true)));
                move || drop(timer)
            },
            (),
        );
    }

    let open_popup = {
        let popup_open = popup_open.clone();
        Callback::from(move |_: ()| popup_open.set(true))
    };
    let close_popup = {
        let popup_open = popup_open.clone();
        Callback::from(move |_: ()| popup_open.set(false))
    };
    let show_toast = {
        let toast = toast.clone();
        Callback::from(move |message: ToastMessage| toast.set(Some(message)))
    };
    let dismiss_toast = {
        let toast = toast.clone();
        Callback::from(move |_: ()| toast.set(None))
    };

    let launcher = QuoteLauncher(open_popup.clone());

    html! {
        <BrowserRouter>
            <ContextProvider<QuoteLauncher> context={launcher}>
                <Nav on_quote={open_popup} />
                <Switch<Route> render={switch} />
                <Footer />
                <LeadPopup
                    open={*popup_open}
                    on_close={close_popup}
                    on_toast={show_toast}
                    flags={(*flags).clone()}
                />
                if let Some(message) = (*toast).clone() {
                    <Toast {message} on_dismiss={dismiss_toast} />
                }
            </ContextProvider<QuoteLauncher>>
        </BrowserRouter>
    }
}

fn main() {
    // Readable panics in the browser console before anything else runs.
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting Home Sphere frontend");
    yew::Renderer::<App>::new().render();
}
