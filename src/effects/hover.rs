use gloo_timers::callback::Timeout;
use web_sys::Element;

use crate::config::HoverConfig;
use crate::dom;

/// Row `i` starts moving at `i * step_ms`.
pub fn stagger_delays(rows: usize, step_ms: u32) -> impl Iterator<Item = u32> {
    (0..rows as u32).map(move |i| i * step_ms)
}

pub fn nudge_transform(px: f64) -> String {
    format!("translateX({}px)", px)
}

pub fn nudge_rows(card: &Element, config: &HoverConfig) {
    let rows = dom::query_within(card, ".feature-item");
    let delays = stagger_delays(rows.len(), config.step_ms);
    for (row, delay) in rows.into_iter().zip(delays) {
        let transform = nudge_transform(config.nudge_px);
        // the row may be gone by the time this fires; writing to a detached node is harmless
        Timeout::new(delay, move || dom::set_style(&row, "transform", &transform)).forget();
    }
}

/// Leaving the card resets every row at once.
pub fn reset_rows(card: &Element) {
    for row in dom::query_within(card, ".feature-item") {
        dom::set_style(&row, "transform", "translateX(0)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_rows_stagger_by_thirty_ms() {
        let delays: Vec<u32> = stagger_delays(4, 30).collect();
        assert_eq!(delays, [0, 30, 60, 90]);
    }

    #[test]
    fn no_rows_no_timers() {
        assert_eq!(stagger_delays(0, 30).count(), 0);
    }

    #[test]
    fn nudge_distance_is_configurable() {
        assert_eq!(nudge_transform(5.0), "translateX(5px)");
        assert_eq!(nudge_transform(2.5), "translateX(2.5px)");
    }
}
