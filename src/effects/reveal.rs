use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::RevealConfig;
use crate::dom;

/// Set on a card once it has been revealed; revealed cards are never observed again.
pub const REVEALED_ATTR: &str = "data-revealed";

pub fn root_margin(bottom_margin_px: u32) -> String {
    format!("0px 0px -{}px 0px", bottom_margin_px)
}

/// Reveal is one-way: only a pending element that has become visible moves on.
pub fn should_reveal(is_intersecting: bool, already_revealed: bool) -> bool {
    is_intersecting && !already_revealed
}

fn reveal(el: &HtmlElement) {
    dom::set_style(el, "opacity", "1");
    dom::set_style(el, "transform", "translateY(0)");
    let _ = el.set_attribute(REVEALED_ATTR, "true");
}

/// Shows every matched element at once, for when visibility cannot be observed.
fn reveal_all(selector: &str) {
    for card in dom::query_all(selector) {
        reveal(&card);
    }
}

/// Watches the matched elements and fades each in the first time it scrolls into view.
/// Dropping it disconnects the underlying observer.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn observe(selector: &str, config: &RevealConfig) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let target = entry.target();
                    let already = target.has_attribute(REVEALED_ATTR);
                    if !should_reveal(entry.is_intersecting(), already) {
                        continue;
                    }
                    observer.unobserve(&target);
                    if let Ok(el) = target.dyn_into::<HtmlElement>() {
                        reveal(&el);
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(config.threshold));
        init.set_root_margin(&root_margin(config.bottom_margin_px));

        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                Ok(observer) => observer,
                Err(e) => {
                    log::warn!("IntersectionObserver unavailable, revealing immediately: {:?}", e);
                    reveal_all(selector);
                    return None;
                }
            };

        let mut pending = 0;
        for card in dom::query_all(selector) {
            if !card.has_attribute(REVEALED_ATTR) {
                observer.observe(&card);
                pending += 1;
            }
        }
        log::debug!("Observing {} element(s) matching {}", pending, selector);

        Some(Self { observer, _callback: callback })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_line_sits_above_viewport_bottom() {
        assert_eq!(root_margin(50), "0px 0px -50px 0px");
        assert_eq!(root_margin(0), "0px 0px -0px 0px");
    }

    #[test]
    fn reveal_never_reverts() {
        assert!(should_reveal(true, false));
        assert!(!should_reveal(false, false));
        // leaving the viewport after a reveal does nothing
        assert!(!should_reveal(false, true));
        assert!(!should_reveal(true, true));
    }
}
