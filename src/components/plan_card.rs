use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::components::notification::Selection;
use crate::config::{HoverConfig, Plan};
use crate::dom;
use crate::effects::{hover, ripple};

#[derive(Properties, PartialEq)]
pub struct PlanCardProps {
    pub plan: Plan,
    pub shortcut: Option<usize>,
    pub hover: HoverConfig,
    pub ripple_ms: u32,
    pub on_select: Callback<Selection>,
}

/// Reads the plan name and price out of the card that contains `button`.
fn read_selection(button: &Element) -> Option<Selection> {
    let card = button.closest(".pricing-card").ok().flatten()?;
    Some(Selection {
        plan_name: dom::text_within(&card, ".plan-name")?,
        price: dom::text_within(&card, ".price")?,
    })
}

#[function_component(PlanCard)]
pub fn plan_card(props: &PlanCardProps) -> Html {
    let card_ref = use_node_ref();
    let button_ref = use_node_ref();

    let onmouseenter = {
        let card_ref = card_ref.clone();
        let hover = props.hover.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(card) = card_ref.cast::<Element>() {
                hover::nudge_rows(&card, &hover);
            }
        })
    };

    let onmouseleave = {
        let card_ref = card_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(card) = card_ref.cast::<Element>() {
                hover::reset_rows(&card);
            }
        })
    };

    let onclick = {
        let button_ref = button_ref.clone();
        let on_select = props.on_select.clone();
        let ripple_ms = props.ripple_ms;
        Callback::from(move |e: MouseEvent| {
            let Some(button) = button_ref.cast::<HtmlElement>() else {
                return;
            };
            ripple::spawn(&button, e.client_x(), e.client_y(), ripple_ms);
            match read_selection(&button) {
                Some(selection) => {
                    log::info!("Selected plan {}", selection.plan_name);
                    on_select.emit(selection);
                }
                None => log::warn!("Select button is not inside a complete .pricing-card"),
            }
        })
    };

    let plan = &props.plan;
    let title = props
        .shortcut
        .map(|i| format!("Phím tắt: {}", i + 1))
        .unwrap_or_default();

    html! {
        <div
            class={classes!("pricing-card", plan.featured.then(|| "featured"))}
            ref={card_ref}
            {onmouseenter}
            {onmouseleave}
        >
            {
                if plan.featured {
                    html! { <div class="popular-tag">{"Phổ biến nhất"}</div> }
                } else {
                    html! {}
                }
            }
            <div class="card-header">
                <h3 class="plan-name">{plan.name.clone()}</h3>
                <div class="price-row">
                    <span class="price">{plan.price.clone()}</span>
                    <span class="period">{plan.period.clone()}</span>
                </div>
            </div>
            <ul class="feature-list">
                { for plan.features.iter().map(|feature| html! {
                    <li class="feature-item">{feature.clone()}</li>
                }) }
            </ul>
            <button class="btn-select" ref={button_ref} {title} {onclick}>
                {"Chọn gói này"}
            </button>
        </div>
    }
}
