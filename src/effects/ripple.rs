use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{DomRect, HtmlElement};

use crate::dom;

/// Square ripple box in the button's own coordinate space, centred on the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    pub fn new(width: f64, height: f64, rect_left: f64, rect_top: f64, client_x: f64, client_y: f64) -> Self {
        let size = width.max(height);
        Self {
            size,
            left: client_x - rect_left - size / 2.0,
            top: client_y - rect_top - size / 2.0,
        }
    }

    pub fn from_rect(rect: &DomRect, client_x: i32, client_y: i32) -> Self {
        Self::new(
            rect.width(),
            rect.height(),
            rect.left(),
            rect.top(),
            f64::from(client_x),
            f64::from(client_y),
        )
    }

    pub fn style_properties(&self) -> [(&'static str, String); 4] {
        [
            ("width", format!("{}px", self.size)),
            ("height", format!("{}px", self.size)),
            ("left", format!("{}px", self.left)),
            ("top", format!("{}px", self.top)),
        ]
    }
}

/// Appends a `.ripple` span to `button` and removes it after `duration_ms`.
pub fn spawn(button: &HtmlElement, client_x: i32, client_y: i32, duration_ms: u32) {
    let Some(document) = dom::document() else {
        return;
    };
    let ripple = match document
        .create_element("span")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        Some(ripple) => ripple,
        None => return,
    };

    let geometry = RippleGeometry::from_rect(&button.get_bounding_client_rect(), client_x, client_y);
    for (property, value) in geometry.style_properties() {
        dom::set_style(&ripple, property, &value);
    }
    ripple.set_class_name("ripple");

    if let Err(e) = button.append_child(&ripple) {
        log::warn!("Failed to attach ripple: {:?}", e);
        return;
    }

    Timeout::new(duration_ms, move || ripple.remove()).forget();
}
