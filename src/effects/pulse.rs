use web_sys::HtmlElement;

use crate::dom;

pub trait AnimationTarget {
    fn set_animation(&self, value: &str);
    /// Forces style recomputation so the previous write takes effect.
    fn commit(&self);
}

impl AnimationTarget for HtmlElement {
    fn set_animation(&self, value: &str) {
        dom::set_style(self, "animation", value);
    }

    fn commit(&self) {
        // reading layout flushes pending style changes
        let _ = self.offset_width();
    }
}

/// Replays `animation`. Without the commit between clearing and reapplying, the
/// browser coalesces both writes and the animation does not restart.
pub fn restart<T: AnimationTarget + ?Sized>(target: &T, animation: &str) {
    target.set_animation("none");
    target.commit();
    target.set_animation(animation);
}
