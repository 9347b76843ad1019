use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{Event, KeyboardEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::notification::{OverlayAction, OverlaySlot, Selection, SelectionNotification};
use crate::components::plan_card::PlanCard;
use crate::config::InteractionConfig;
use crate::dom;
use crate::effects::{parallax, pulse, reveal::RevealObserver, shortcuts};

#[function_component(PricingPage)]
pub fn pricing_page() -> Html {
    let config = use_context::<Rc<InteractionConfig>>().unwrap_or_default();
    let slot = use_reducer({
        let policy = config.notification.policy;
        move || OverlaySlot::new(policy)
    });

    // Cards are rendered from the plan list, so re-discover them when it changes.
    // Already revealed cards keep their marker and are skipped.
    {
        let reveal_config = config.reveal.clone();
        use_effect_with_deps(
            move |_| {
                let observer = RevealObserver::observe(".pricing-card", &reveal_config);
                move || drop(observer)
            },
            config.plans.clone(),
        );
    }

    // Initial parallax frame, for pages restored mid-scroll
    {
        let parallax_config = config.parallax.clone();
        use_effect_with_deps(
            move |_| {
                parallax::update_hero(&parallax_config);
                || ()
            },
            (),
        );
    }

    {
        let parallax_config = config.parallax.clone();
        use_event_with_window("scroll", move |_: Event| {
            parallax::update_hero(&parallax_config);
        });
    }

    let on_select = {
        let slot = slot.clone();
        Callback::from(move |selection: Selection| {
            slot.dispatch(OverlayAction::Open(selection));
        })
    };

    let on_close = {
        let slot = slot.clone();
        let fade_out_ms = config.notification.fade_out_ms;
        Callback::from(move |_: ()| {
            if !slot.is_open() {
                return;
            }
            let generation = slot.generation;
            slot.dispatch(OverlayAction::Close);
            let dispatcher = slot.dispatcher();
            Timeout::new(fade_out_ms, move || {
                dispatcher.dispatch(OverlayAction::Finish(generation));
            })
            .forget();
        })
    };

    {
        let shortcut_count = config.shortcuts.count;
        let close_on_escape = config.notification.close_on_escape;
        let on_close = on_close.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if !shortcuts::is_plain_page_key(&e) {
                return;
            }
            let key = e.key();
            if close_on_escape && shortcuts::is_escape(&key) {
                on_close.emit(());
            } else if let Some(index) = shortcuts::shortcut_index(&key, shortcut_count) {
                if shortcuts::activate_select_button(index) {
                    e.prevent_default();
                }
            }
        });
    }

    let on_support = {
        let animation = config.pulse.animation.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(section) = dom::query(".pricing-container") {
                dom::scroll_into_view_smooth(&section);
            }
            if let Some(featured) = dom::query(".pricing-card.featured") {
                pulse::restart(&featured, &animation);
            }
        })
    };

    let on_logo = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        dom::scroll_to_top_smooth();
    });

    let shortcut_count = usize::from(config.shortcuts.count);

    html! {
        <div class="pricing-page">
            <header class="site-header">
                <a class="logo" href="#" onclick={on_logo}>{"🍜 Nuôi Tôi"}</a>
                <button id="supportBtn" class="support-button" onclick={on_support}>
                    {"Ủng hộ ngay"}
                </button>
            </header>

            <section class="hero">
                <h1>{"Nuôi Tôi"}</h1>
                <p class="hero-subtitle">
                    {"Một tô phở, một ly cà phê, để dự án tiếp tục sống."}
                </p>
            </section>

            <section class="pricing-container">
                <h2 class="pricing-title">{"Chọn cách bạn muốn ủng hộ"}</h2>
                <div class="pricing-grid">
                    { for config.plans.iter().enumerate().map(|(i, plan)| html! {
                        <PlanCard
                            key={plan.name.clone()}
                            plan={plan.clone()}
                            shortcut={(i < shortcut_count).then_some(i)}
                            hover={config.hover.clone()}
                            ripple_ms={config.ripple.duration_ms}
                            on_select={on_select.clone()}
                        />
                    }) }
                </div>
                <p class="shortcut-hint">
                    {format!("Mẹo: nhấn phím 1 đến {} để chọn gói nhanh.", shortcut_count.min(config.plans.len()))}
                </p>
            </section>

            {
                match slot.selection() {
                    Some(selection) => html! {
                        <SelectionNotification
                            selection={selection.clone()}
                            closing={slot.is_closing()}
                            fade_out_ms={config.notification.fade_out_ms}
                            on_close={on_close.clone()}
                        />
                    },
                    None => html! {},
                }
            }

            <style>
                {PAGE_CSS}
            </style>
        </div>
    }
}

const PAGE_CSS: &str = r#"
.pricing-page {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    background: #fffaf5;
    color: #333;
    min-height: 100vh;
}

.site-header {
    position: sticky;
    top: 0;
    z-index: 100;
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 16px 32px;
    background: rgba(255, 250, 245, 0.9);
    backdrop-filter: blur(8px);
}

.logo {
    font-size: 22px;
    font-weight: bold;
    color: #FF6B35;
    text-decoration: none;
}

.support-button,
.btn-select {
    padding: 12px 28px;
    background: linear-gradient(90deg, #FF6B35 0%, #F7931E 100%);
    color: white;
    border: none;
    border-radius: 25px;
    font-size: 16px;
    font-weight: bold;
    cursor: pointer;
    transition: transform 0.2s, box-shadow 0.2s;
}

.support-button:hover,
.btn-select:hover {
    transform: translateY(-2px);
    box-shadow: 0 8px 20px rgba(255, 107, 53, 0.3);
}

.hero {
    text-align: center;
    padding: 120px 20px 80px;
    will-change: transform, opacity;
}

.hero h1 {
    font-size: 56px;
    margin: 0 0 16px;
    background: linear-gradient(90deg, #FF6B35 0%, #F7931E 100%);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}

.hero-subtitle {
    font-size: 20px;
    color: #666;
}

.pricing-container {
    max-width: 1100px;
    margin: 0 auto;
    padding: 60px 20px 120px;
}

.pricing-title {
    text-align: center;
    font-size: 32px;
    margin-bottom: 40px;
}

.pricing-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
    gap: 28px;
}

.pricing-card {
    position: relative;
    background: white;
    border-radius: 16px;
    padding: 32px;
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
    display: flex;
    flex-direction: column;
    opacity: 0;
    transform: translateY(30px);
    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
}

.pricing-card.featured {
    border: 2px solid #FF6B35;
}

.popular-tag {
    position: absolute;
    top: -14px;
    left: 50%;
    transform: translateX(-50%);
    padding: 4px 16px;
    border-radius: 12px;
    background: #FF6B35;
    color: white;
    font-size: 13px;
    font-weight: bold;
}

.plan-name {
    margin: 0 0 12px;
    font-size: 24px;
}

.price {
    font-size: 36px;
    font-weight: bold;
    color: #FF6B35;
}

.period {
    color: #999;
    margin-left: 4px;
}

.feature-list {
    list-style: none;
    padding: 0;
    margin: 24px 0;
    flex: 1;
}

.feature-item {
    padding: 8px 0;
    transition: all 0.3s ease-out;
}

.shortcut-hint {
    text-align: center;
    color: #999;
    margin-top: 32px;
    font-size: 14px;
}

@keyframes fadeIn {
    from { opacity: 0; }
    to { opacity: 1; }
}

@keyframes fadeOut {
    from { opacity: 1; }
    to { opacity: 0; }
}

@keyframes pulse {
    0% { box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08); }
    50% { box-shadow: 0 0 0 12px rgba(255, 107, 53, 0.25); }
    100% { box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08); }
}

@media (max-width: 600px) {
    .site-header {
        padding: 12px 16px;
    }
    .hero h1 {
        font-size: 40px;
    }
}
"#;
