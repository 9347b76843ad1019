use web_sys::HtmlElement;

use crate::config::ParallaxConfig;
use crate::dom;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxFrame {
    pub offset_px: f64,
    pub opacity: f64,
}

impl ParallaxFrame {
    /// Hero position for a scroll offset. Opacity is `1 - scrollY / fade_distance` and goes
    /// below zero past the fade distance unless the config asks for clamping.
    pub fn at(scroll_y: f64, config: &ParallaxConfig) -> Self {
        let opacity = if config.fade_distance > 0.0 {
            1.0 - scroll_y / config.fade_distance
        } else {
            1.0
        };
        let opacity = if config.clamp_opacity {
            opacity.clamp(0.0, 1.0)
        } else {
            opacity
        };

        Self {
            offset_px: scroll_y * config.factor,
            opacity,
        }
    }

    pub fn transform(&self) -> String {
        format!("translateY({}px)", self.offset_px)
    }

    pub fn apply(&self, hero: &HtmlElement) {
        dom::set_style(hero, "transform", &self.transform());
        dom::set_style(hero, "opacity", &self.opacity.to_string());
    }
}

/// Scroll handler body: re-reads the hero on every call so a missing hero is a no-op.
pub fn update_hero(config: &ParallaxConfig) {
    if let Some(hero) = dom::query(".hero") {
        ParallaxFrame::at(dom::scroll_y(), config).apply(&hero);
    }
}
