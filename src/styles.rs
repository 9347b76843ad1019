use yew::prelude::*;

/// Ripple and notification rules. Rendered once by the application root, never
/// per interaction, so opening and closing overlays leaves no style nodes behind.
pub const INTERACTION_CSS: &str = r#"
.btn-select {
    position: relative;
    overflow: hidden;
}

.ripple {
    position: absolute;
    border-radius: 50%;
    background: rgba(255, 255, 255, 0.6);
    transform: scale(0);
    animation: ripple-animation 0.6s ease-out;
    pointer-events: none;
}

@keyframes ripple-animation {
    to {
        transform: scale(4);
        opacity: 0;
    }
}

.selection-notification {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    bottom: 0;
    background: rgba(0, 0, 0, 0.7);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 10000;
    animation: fadeIn 0.3s ease-out;
}

.notification-content {
    background: white;
    padding: 40px;
    border-radius: 16px;
    text-align: center;
    max-width: 400px;
    box-shadow: 0 20px 60px rgba(0, 0, 0, 0.3);
    animation: slideUp 0.3s ease-out;
}

.notification-icon {
    width: 60px;
    height: 60px;
    background: linear-gradient(90deg, #FF6B35 0%, #F7931E 100%);
    color: white;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 32px;
    margin: 0 auto 20px;
}

.notification-content h3 {
    color: #FF6B35;
    margin-bottom: 10px;
    font-size: 24px;
}

.notification-content p {
    color: #666;
    margin-bottom: 10px;
}

.notification-message {
    font-size: 14px;
    margin-top: 20px;
    padding-top: 20px;
    border-top: 1px solid #eee;
}

.notification-close {
    margin-top: 20px;
    padding: 12px 32px;
    background: linear-gradient(90deg, #FF6B35 0%, #F7931E 100%);
    color: white;
    border: none;
    border-radius: 25px;
    font-size: 16px;
    font-weight: bold;
    cursor: pointer;
    transition: transform 0.2s;
}

.notification-close:hover {
    transform: translateY(-2px);
}

@keyframes slideUp {
    from {
        transform: translateY(50px);
        opacity: 0;
    }
    to {
        transform: translateY(0);
        opacity: 1;
    }
}
"#;

#[function_component(InteractionStyles)]
pub fn interaction_styles() -> Html {
    html! {
        <style id="interaction-styles">{INTERACTION_CSS}</style>
    }
}
