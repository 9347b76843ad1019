use std::rc::Rc;

use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod dom;
mod styles;
mod components {
    pub mod notification;
    pub mod plan_card;
}
mod effects {
    pub mod hover;
    pub mod parallax;
    pub mod pulse;
    pub mod reveal;
    pub mod ripple;
    pub mod shortcuts;
}
mod pages {
    pub mod pricing;
}
#[cfg(all(test, target_arch = "wasm32"))]
mod test_support;

use config::InteractionConfig;
use pages::pricing::PricingPage;
use styles::InteractionStyles;

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
            info!("Rendering Pricing page");
            html! { <PricingPage /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting to Pricing page");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let config = use_memo(|_| InteractionConfig::load(), ());

    html! {
        <ContextProvider<Rc<InteractionConfig>> context={config}>
            <InteractionStyles />
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Rc<InteractionConfig>>>
    }
}

fn print_banner() {
    gloo_console::log!(
        "%c🍜 Nuôi Tôi",
        "font-size: 24px; font-weight: bold; background: linear-gradient(90deg, #FF6B35 0%, #F7931E 100%); -webkit-background-clip: text; -webkit-text-fill-color: transparent;"
    );
    gloo_console::log!(
        "%cCảm ơn bạn đã quan tâm đến dự án! 💖",
        "font-size: 14px; color: #666;"
    );
    gloo_console::log!(
        "%cTip: Nhấn phím 1, 2, hoặc 3 để chọn gói nhanh!",
        "font-size: 12px; color: #FF6B35;"
    );
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!("error initializing log:", e.to_string());
    }

    print_banner();
    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
