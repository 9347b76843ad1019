use std::rc::Rc;

use wasm_bindgen::JsValue;
use yew::prelude::*;

use crate::config::OverlayPolicy;

pub const DISCLAIMER: &str =
    "Cảm ơn bạn đã quan tâm! Đây là demo, chưa có chức năng thanh toán thực tế.";

/// What the visitor picked, read from the card at click time.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    pub plan_name: String,
    pub price: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum OverlayPhase {
    #[default]
    Empty,
    Open(Selection),
    /// Fading out; cleared by a matching `Finish`.
    Closing(Selection),
}

pub enum OverlayAction {
    Open(Selection),
    Close,
    /// Removes a closing overlay, but only if it is still the one identified by the generation.
    Finish(u32),
}

/// The one overlay slot of the page.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlaySlot {
    pub phase: OverlayPhase,
    pub generation: u32,
    policy: OverlayPolicy,
}

impl OverlaySlot {
    pub fn new(policy: OverlayPolicy) -> Self {
        Self {
            phase: OverlayPhase::Empty,
            generation: 0,
            policy,
        }
    }

    pub fn selection(&self) -> Option<&Selection> {
        match &self.phase {
            OverlayPhase::Empty => None,
            OverlayPhase::Open(s) | OverlayPhase::Closing(s) => Some(s),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.phase, OverlayPhase::Open(_))
    }

    pub fn is_closing(&self) -> bool {
        matches!(self.phase, OverlayPhase::Closing(_))
    }

    pub fn apply(&self, action: OverlayAction) -> Self {
        let mut next = self.clone();
        match action {
            OverlayAction::Open(selection) => {
                let occupied = !matches!(self.phase, OverlayPhase::Empty);
                if occupied && self.policy == OverlayPolicy::IgnoreWhileOpen {
                    return next;
                }
                next.phase = OverlayPhase::Open(selection);
                next.generation = self.generation.wrapping_add(1);
            }
            OverlayAction::Close => {
                if let OverlayPhase::Open(selection) = &self.phase {
                    next.phase = OverlayPhase::Closing(selection.clone());
                }
            }
            OverlayAction::Finish(generation) => {
                if self.is_closing() && generation == self.generation {
                    next.phase = OverlayPhase::Empty;
                }
            }
        }
        next
    }
}

impl Reducible for OverlaySlot {
    type Action = OverlayAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectionNotificationProps {
    pub selection: Selection,
    pub closing: bool,
    pub fade_out_ms: u32,
    pub on_close: Callback<()>,
}

#[function_component(SelectionNotification)]
pub fn selection_notification(props: &SelectionNotificationProps) -> Html {
    let overlay_ref = use_node_ref();

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    // only clicks that land on the backdrop itself close the overlay
    let on_background_click = {
        let on_close = props.on_close.clone();
        let overlay_ref = overlay_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let target = e.target().map(JsValue::from);
            let overlay = overlay_ref.get().map(JsValue::from);
            if target.is_some() && target == overlay {
                on_close.emit(());
            }
        })
    };

    let style = props
        .closing
        .then(|| format!("animation: fadeOut {}s ease-out;", f64::from(props.fade_out_ms) / 1000.0));

    html! {
        <div class="selection-notification" ref={overlay_ref} {style} onclick={on_background_click}>
            <div class="notification-content">
                <div class="notification-icon">{"✓"}</div>
                <h3>{format!("Bạn đã chọn {}", props.selection.plan_name)}</h3>
                <p>{props.selection.price.clone()}</p>
                <p class="notification-message">{DISCLAIMER}</p>
                <button class="notification-close" onclick={on_close_click}>{"Đóng"}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pick(name: &str, price: &str) -> Selection {
        Selection {
            plan_name: name.to_string(),
            price: price.to_string(),
        }
    }

    #[test]
    fn open_close_finish_cycle() {
        let slot = OverlaySlot::new(OverlayPolicy::Replace);
        let slot = slot.apply(OverlayAction::Open(pick("Pro", "$10")));
        assert!(slot.is_open());
        assert_eq!(slot.selection(), Some(&pick("Pro", "$10")));

        let slot = slot.apply(OverlayAction::Close);
        assert!(slot.is_closing());
        assert_eq!(slot.selection(), Some(&pick("Pro", "$10")));

        let slot = slot.apply(OverlayAction::Finish(slot.generation));
        assert_eq!(slot.phase, OverlayPhase::Empty);
        assert_eq!(slot.selection(), None);
    }

    #[test]
    fn replace_policy_swaps_the_current_overlay() {
        let slot = OverlaySlot::new(OverlayPolicy::Replace)
            .apply(OverlayAction::Open(pick("Basic", "$5")))
            .apply(OverlayAction::Open(pick("Enterprise", "$20")));
        assert_eq!(slot.selection(), Some(&pick("Enterprise", "$20")));
        assert_eq!(slot.generation, 2);
    }

    #[test]
    fn ignore_policy_keeps_the_first_overlay() {
        let slot = OverlaySlot::new(OverlayPolicy::IgnoreWhileOpen)
            .apply(OverlayAction::Open(pick("Basic", "$5")))
            .apply(OverlayAction::Open(pick("Enterprise", "$20")));
        assert_eq!(slot.selection(), Some(&pick("Basic", "$5")));
        assert_eq!(slot.generation, 1);

        let closing = slot.apply(OverlayAction::Close);
        let still = closing.apply(OverlayAction::Open(pick("Pro", "$10")));
        assert_eq!(still, closing);
    }

    #[test]
    fn stale_finish_does_not_remove_a_newer_overlay() {
        let slot = OverlaySlot::new(OverlayPolicy::Replace)
            .apply(OverlayAction::Open(pick("Basic", "$5")))
            .apply(OverlayAction::Close);
        let stale = slot.generation;
        let slot = slot.apply(OverlayAction::Open(pick("Pro", "$10")));
        let slot = slot.apply(OverlayAction::Finish(stale));
        assert!(slot.is_open());
        assert_eq!(slot.selection(), Some(&pick("Pro", "$10")));
    }

    #[test]
    fn finish_requires_a_close_first() {
        let slot = OverlaySlot::new(OverlayPolicy::Replace).apply(OverlayAction::Open(pick("Pro", "$10")));
        let after = slot.apply(OverlayAction::Finish(slot.generation));
        assert_eq!(after, slot);
    }

    #[test]
    fn close_on_empty_slot_is_a_no_op() {
        let slot = OverlaySlot::new(OverlayPolicy::Replace);
        assert_eq!(slot.apply(OverlayAction::Close), slot);
    }

    #[test]
    fn reducer_keeps_the_same_rc_when_nothing_changes() {
        let slot = Rc::new(OverlaySlot::new(OverlayPolicy::Replace));
        let next = slot.clone().reduce(OverlayAction::Close);
        assert!(Rc::ptr_eq(&slot, &next));
    }
}
