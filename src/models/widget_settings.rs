use crate::errors::{AppError, AppResult};
use clap::ValueEnum;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Animation {
    None,
    Fade,
    Slide,
    Wave,
}

impl Animation {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Animation::None => "none",
            Animation::Fade => "fade",
            Animation::Slide => "slide",
            Animation::Wave => "wave",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "none" => Some(Animation::None),
            "fade" => Some(Animation::Fade),
            "slide" => Some(Animation::Slide),
            "wave" => Some(Animation::Wave),
            _ => None,
        }
    }

    /// CSS class applied to the widget root.
    pub fn css_class(&self) -> &'static str {
        match self {
            Animation::Fade => "animate-fade-in",
            Animation::Slide => "animate-slide-up",
            Animation::None | Animation::Wave => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BorderRadius {
    None,
    Small,
    Medium,
    Large,
    Pill,
}

impl BorderRadius {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            BorderRadius::None => "none",
            BorderRadius::Small => "small",
            BorderRadius::Medium => "medium",
            BorderRadius::Large => "large",
            BorderRadius::Pill => "pill",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "none" => Some(BorderRadius::None),
            "small" => Some(BorderRadius::Small),
            "medium" => Some(BorderRadius::Medium),
            "large" => Some(BorderRadius::Large),
            "pill" => Some(BorderRadius::Pill),
            _ => None,
        }
    }

    pub fn css(&self) -> &'static str {
        match self {
            BorderRadius::None => "0",
            BorderRadius::Small => "4px",
            BorderRadius::Medium => "8px",
            BorderRadius::Large => "16px",
            BorderRadius::Pill => "9999px",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Shadow {
    None,
    Small,
    Medium,
    Large,
}

impl Shadow {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Shadow::None => "none",
            Shadow::Small => "small",
            Shadow::Medium => "medium",
            Shadow::Large => "large",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "none" => Some(Shadow::None),
            "small" => Some(Shadow::Small),
            "medium" => Some(Shadow::Medium),
            "large" => Some(Shadow::Large),
            _ => None,
        }
    }

    pub fn css(&self) -> &'static str {
        match self {
            Shadow::None => "none",
            Shadow::Small => "0 1px 2px rgba(0,0,0,0.15)",
            Shadow::Medium => "0 4px 8px rgba(0,0,0,0.2)",
            Shadow::Large => "0 10px 24px rgba(0,0,0,0.25)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Default,
    Serif,
    Mono,
}

impl FontStyle {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            FontStyle::Default => "default",
            FontStyle::Serif => "serif",
            FontStyle::Mono => "mono",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "default" => Some(FontStyle::Default),
            "serif" => Some(FontStyle::Serif),
            "mono" => Some(FontStyle::Mono),
            _ => None,
        }
    }

    pub fn css(&self) -> &'static str {
        match self {
            FontStyle::Default => "system-ui, sans-serif",
            FontStyle::Serif => "Georgia, serif",
            FontStyle::Mono => "ui-monospace, monospace",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Standard,
    Compact,
    Minimal,
}

impl Layout {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Layout::Standard => "standard",
            Layout::Compact => "compact",
            Layout::Minimal => "minimal",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "standard" => Some(Layout::Standard),
            "compact" => Some(Layout::Compact),
            "minimal" => Some(Layout::Minimal),
            _ => None,
        }
    }

    pub fn padding(&self) -> &'static str {
        match self {
            Layout::Standard => "16px",
            Layout::Compact => "8px",
            Layout::Minimal => "4px",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BorderWidth {
    None,
    Thin,
    Medium,
    Thick,
}

impl BorderWidth {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            BorderWidth::None => "none",
            BorderWidth::Thin => "thin",
            BorderWidth::Medium => "medium",
            BorderWidth::Thick => "thick",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "none" => Some(BorderWidth::None),
            "thin" => Some(BorderWidth::Thin),
            "medium" => Some(BorderWidth::Medium),
            "thick" => Some(BorderWidth::Thick),
            _ => None,
        }
    }

    pub fn css(&self) -> &'static str {
        match self {
            BorderWidth::None => "0",
            BorderWidth::Thin => "1px",
            BorderWidth::Medium => "2px",
            BorderWidth::Thick => "4px",
        }
    }
}

/// Singleton appearance record for the embeddable widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetSettings {
    pub title: String,
    pub description: String,
    pub primary_color: String,
    pub accent_color: String,
    pub show_dates: bool,
    pub show_times: bool,
    pub show_icon: bool,
    pub animation: Animation,
    pub border_radius: BorderRadius,
    pub shadow: Shadow,
    pub font_style: FontStyle,
    pub layout: Layout,
    pub border_width: BorderWidth,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            title: "Alert: Unfavorable Weather Conditions".to_string(),
            description:
                "For the safety of everyone, operations will be suspended on the following dates:"
                    .to_string(),
            primary_color: "#0EA5E9".to_string(),
            accent_color: "#F59E0B".to_string(),
            show_dates: true,
            show_times: true,
            show_icon: true,
            animation: Animation::Wave,
            border_radius: BorderRadius::Medium,
            shadow: Shadow::Medium,
            font_style: FontStyle::Default,
            layout: Layout::Standard,
            border_width: BorderWidth::Thin,
        }
    }
}

fn hex_color_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("static regex"))
}

pub fn is_hex_color(s: &str) -> bool {
    hex_color_re().is_match(s)
}

impl WidgetSettings {
    pub fn validate(&self) -> AppResult<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::InvalidSetting("title must not be empty".into()));
        }
        for (name, value) in [
            ("primary color", &self.primary_color),
            ("accent color", &self.accent_color),
        ] {
            if !is_hex_color(value) {
                return Err(AppError::InvalidSetting(format!(
                    "{name} '{value}' is not a #RRGGBB color"
                )));
            }
        }
        Ok(())
    }
}

/// Partial update for the widget settings; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct WidgetSettingsPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub primary_color: Option<String>,
    pub accent_color: Option<String>,
    pub show_dates: Option<bool>,
    pub show_times: Option<bool>,
    pub show_icon: Option<bool>,
    pub animation: Option<Animation>,
    pub border_radius: Option<BorderRadius>,
    pub shadow: Option<Shadow>,
    pub font_style: Option<FontStyle>,
    pub layout: Option<Layout>,
    pub border_width: Option<BorderWidth>,
}

impl WidgetSettingsPatch {
    pub fn apply(self, mut s: WidgetSettings) -> WidgetSettings {
        if let Some(v) = self.title {
            s.title = v;
        }
        if let Some(v) = self.description {
            s.description = v;
        }
        if let Some(v) = self.primary_color {
            s.primary_color = v;
        }
        if let Some(v) = self.accent_color {
            s.accent_color = v;
        }
        if let Some(v) = self.show_dates {
            s.show_dates = v;
        }
        if let Some(v) = self.show_times {
            s.show_times = v;
        }
        if let Some(v) = self.show_icon {
            s.show_icon = v;
        }
        if let Some(v) = self.animation {
            s.animation = v;
        }
        if let Some(v) = self.border_radius {
            s.border_radius = v;
        }
        if let Some(v) = self.shadow {
            s.shadow = v;
        }
        if let Some(v) = self.font_style {
            s.font_style = v;
        }
        if let Some(v) = self.layout {
            s.layout = v;
        }
        if let Some(v) = self.border_width {
            s.border_width = v;
        }
        s
    }
}
