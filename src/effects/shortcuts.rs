use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, KeyboardEvent};

use crate::dom;

/// Maps a digit key onto a 0-based plan index: `"1"` is the first plan.
pub fn shortcut_index(key: &str, count: u8) -> Option<usize> {
    let mut chars = key.chars();
    let digit = chars.next()?.to_digit(10)?;
    if chars.next().is_some() {
        return None;
    }
    (1..=u32::from(count))
        .contains(&digit)
        .then(|| digit as usize - 1)
}

pub fn is_escape(key: &str) -> bool {
    key == "Escape" || key == "Esc"
}

/// Skips chords and keys typed into form fields.
pub fn is_plain_page_key(e: &KeyboardEvent) -> bool {
    if e.ctrl_key() || e.meta_key() || e.alt_key() {
        return false;
    }
    match e.target() {
        Some(target) => {
            !(target.dyn_ref::<HtmlInputElement>().is_some()
                || target.dyn_ref::<HtmlTextAreaElement>().is_some())
        }
        None => true,
    }
}

/// Clicks and focuses the `index`-th `.btn-select` currently in the document.
/// Buttons are looked up at call time, so re-rendered plan lists are picked up.
pub fn activate_select_button(index: usize) -> bool {
    match dom::query_all(".btn-select").get(index) {
        Some(button) => {
            button.click();
            let _ = button.focus();
            true
        }
        None => {
            log::debug!("No select button at index {}", index);
            false
        }
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;
    use yew::Callback;

    use super::*;
    use crate::components::notification::Selection;
    use crate::test_support::{sample_plans, Fixture, PlanGrid, PlanGridProps};

    #[wasm_bindgen_test]
    async fn second_shortcut_selects_the_second_plan() {
        let picked = Rc::new(RefCell::new(Vec::<Selection>::new()));
        let on_select = {
            let picked = picked.clone();
            Callback::from(move |selection: Selection| picked.borrow_mut().push(selection))
        };
        let fixture = Fixture::render::<PlanGrid>(PlanGridProps {
            plans: sample_plans(),
            on_select,
        });
        TimeoutFuture::new(0).await;

        let index = shortcut_index("2", 3).unwrap();
        assert!(activate_select_button(index));
        assert_eq!(
            *picked.borrow(),
            [Selection {
                plan_name: "Pro".to_string(),
                price: "$10".to_string(),
            }]
        );

        let focused = dom::document().and_then(|d| d.active_element()).map(JsValue::from);
        let second = fixture.query_all(".btn-select").remove(1);
        assert_eq!(focused, Some(JsValue::from(second)));
    }

    #[wasm_bindgen_test]
    async fn index_past_the_last_button_does_nothing() {
        let picked = Rc::new(RefCell::new(Vec::<Selection>::new()));
        let on_select = {
            let picked = picked.clone();
            Callback::from(move |selection: Selection| picked.borrow_mut().push(selection))
        };
        let _fixture = Fixture::render::<PlanGrid>(PlanGridProps {
            plans: sample_plans(),
            on_select,
        });
        TimeoutFuture::new(0).await;

        assert!(!activate_select_button(5));
        assert!(!activate_select_button(3));
        assert!(picked.borrow().is_empty());
    }
}
