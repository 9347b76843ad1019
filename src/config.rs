use serde::Deserialize;
use web_sys::window;

/// Id of the optional `<script type="application/json">` block that overrides defaults.
pub const CONFIG_ELEMENT_ID: &str = "interaction-config";

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct InteractionConfig {
    pub reveal: RevealConfig,
    pub pulse: PulseConfig,
    pub ripple: RippleConfig,
    pub notification: NotificationConfig,
    pub hover: HoverConfig,
    pub parallax: ParallaxConfig,
    pub shortcuts: ShortcutConfig,
    pub plans: Vec<Plan>,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            reveal: RevealConfig::default(),
            pulse: PulseConfig::default(),
            ripple: RippleConfig::default(),
            notification: NotificationConfig::default(),
            hover: HoverConfig::default(),
            parallax: ParallaxConfig::default(),
            shortcuts: ShortcutConfig::default(),
            plans: default_plans(),
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RevealConfig {
    /// Visible fraction that triggers the reveal.
    pub threshold: f64,
    /// How far above the viewport bottom the trigger line sits.
    pub bottom_margin_px: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { threshold: 0.1, bottom_margin_px: 50 }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PulseConfig {
    pub animation: String,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self { animation: "pulse 0.5s ease-in-out".to_string() }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RippleConfig {
    pub duration_ms: u32,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self { duration_ms: 600 }
    }
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OverlayPolicy {
    /// A new selection takes over the slot, even while another overlay is showing.
    Replace,
    /// Selections are dropped until the current overlay has closed.
    IgnoreWhileOpen,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct NotificationConfig {
    pub fade_out_ms: u32,
    pub policy: OverlayPolicy,
    pub close_on_escape: bool,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            fade_out_ms: 300,
            policy: OverlayPolicy::Replace,
            close_on_escape: true,
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct HoverConfig {
    pub step_ms: u32,
    pub nudge_px: f64,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self { step_ms: 30, nudge_px: 5.0 }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ParallaxConfig {
    pub factor: f64,
    pub fade_distance: f64,
    /// Off by default: `1 - scrollY / fade_distance` is applied as is.
    pub clamp_opacity: bool,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            factor: 0.3,
            fade_distance: 500.0,
            clamp_opacity: false,
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ShortcutConfig {
    /// Digit keys `1..=count` select the matching plan button.
    pub count: u8,
}

impl Default for ShortcutConfig {
    fn default() -> Self {
        Self { count: 3 }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Plan {
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

fn plan(name: &str, price: &str, features: &[&str], featured: bool) -> Plan {
    Plan {
        name: name.to_string(),
        price: price.to_string(),
        period: "/tháng".to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
        featured,
    }
}

pub fn default_plans() -> Vec<Plan> {
    vec![
        plan(
            "Ly Cà Phê",
            "25.000đ",
            &["☕ Một ly cà phê mỗi tháng", "💌 Lời cảm ơn chân thành", "📰 Bản tin dự án"],
            false,
        ),
        plan(
            "Tô Phở",
            "50.000đ",
            &[
                "🍜 Một tô phở nóng hổi",
                "💌 Lời cảm ơn chân thành",
                "📰 Bản tin dự án",
                "🎁 Tên bạn trong danh sách ủng hộ",
            ],
            true,
        ),
        plan(
            "Bữa Tiệc",
            "200.000đ",
            &[
                "🎉 Cả một bữa tiệc",
                "💌 Lời cảm ơn chân thành",
                "📰 Bản tin dự án",
                "🎁 Tên bạn trong danh sách ủng hộ",
                "🤝 Góp ý tính năng mới",
            ],
            false,
        ),
    ]
}

impl InteractionConfig {
    /// Parses an override document. Sections left out keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let mut config: InteractionConfig = serde_json::from_str(raw)?;
        if config.plans.is_empty() {
            config.plans = default_plans();
        }
        Ok(config)
    }

    /// Reads the override block from the host page, falling back to defaults.
    pub fn load() -> Self {
        let raw = window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => match Self::from_json(&raw) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("Ignoring invalid #{}: {}", CONFIG_ELEMENT_ID, e);
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }
}
