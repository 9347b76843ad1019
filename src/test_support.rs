//! Browser fixtures shared by the `wasm-bindgen-test` modules.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::components::notification::Selection;
use crate::components::plan_card::PlanCard;
use crate::config::{HoverConfig, Plan};
use crate::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

/// A detached-on-drop container appended to `<body>`.
pub struct Fixture {
    root: HtmlElement,
    destroy: Option<Box<dyn FnOnce()>>,
}

fn mount_root() -> HtmlElement {
    let document = dom::document().expect("document");
    let root: HtmlElement = document
        .create_element("div")
        .expect("create div")
        .dyn_into()
        .expect("div is an HtmlElement");
    document
        .body()
        .expect("body")
        .append_child(&root)
        .expect("append fixture root");
    root
}

impl Fixture {
    pub fn html(markup: &str) -> Self {
        let root = mount_root();
        root.set_inner_html(markup);
        Self { root, destroy: None }
    }

    /// Renders `C` into the fixture. Await a zero timeout before inspecting the DOM.
    pub fn render<C>(props: C::Properties) -> Self
    where
        C: BaseComponent,
    {
        let root = mount_root();
        let host: Element = root.clone().into();
        let handle = yew::Renderer::<C>::with_root_and_props(host, props).render();
        Self {
            root,
            destroy: Some(Box::new(move || handle.destroy())),
        }
    }

    pub fn query_all(&self, selector: &str) -> Vec<HtmlElement> {
        dom::query_within(&self.root, selector)
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        if let Some(destroy) = self.destroy.take() {
            destroy();
        }
        self.root.remove();
    }
}

pub fn sample_plans() -> Vec<Plan> {
    [("Basic", "$5"), ("Pro", "$10"), ("Enterprise", "$20")]
        .into_iter()
        .map(|(name, price)| Plan {
            name: name.to_string(),
            price: price.to_string(),
            period: "/month".to_string(),
            features: vec!["Support".to_string(), "Updates".to_string()],
            featured: name == "Pro",
        })
        .collect()
}

/// Static markup with the same hooks the page renders.
pub const SAMPLE_CARDS: &str = r#"
    <div class="pricing-card"><h3 class="plan-name">Basic</h3><span class="price">$5</span><button class="btn-select">Chọn</button></div>
    <div class="pricing-card"><h3 class="plan-name">Pro</h3><span class="price">$10</span><button class="btn-select">Chọn</button></div>
    <div class="pricing-card"><h3 class="plan-name">Enterprise</h3><span class="price">$20</span><button class="btn-select">Chọn</button></div>
    <button class="stray-button">Chọn</button>
"#;

#[derive(Properties, PartialEq)]
pub struct PlanGridProps {
    pub plans: Vec<Plan>,
    pub on_select: Callback<Selection>,
}

#[function_component(PlanGrid)]
pub fn plan_grid(props: &PlanGridProps) -> Html {
    html! {
        <div class="pricing-grid">
            { for props.plans.iter().enumerate().map(|(i, plan)| html! {
                <PlanCard
                    key={plan.name.clone()}
                    plan={plan.clone()}
                    shortcut={Some(i)}
                    hover={HoverConfig::default()}
                    ripple_ms={600}
                    on_select={props.on_select.clone()}
                />
            }) }
        </div>
    }
}
