//! Social media cross-posting.
//!
//! Composes the post text for a disruption and reports a per-platform
//! outcome. No network call is made: a platform with a key configured is
//! reported as prepared.

use crate::config::SocialConfig;
use crate::models::Disruption;
use crate::utils::date::short_label;
use serde::Serialize;
use std::env;

pub const DEFAULT_MESSAGE: &str =
    "Alert: Our services will be disrupted due to weather conditions.";

pub const FACEBOOK_KEY_VAR: &str = "FACEBOOK_API_KEY";
pub const INSTAGRAM_KEY_VAR: &str = "INSTAGRAM_API_KEY";

#[derive(Debug, Clone, Default)]
pub struct ApiKeys {
    pub facebook: Option<String>,
    pub instagram: Option<String>,
}

impl ApiKeys {
    pub fn from_env() -> Self {
        let read = |var: &str| env::var(var).ok().filter(|v| !v.trim().is_empty());
        Self {
            facebook: read(FACEBOOK_KEY_VAR),
            instagram: read(INSTAGRAM_KEY_VAR),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Facebook,
    Instagram,
}

impl Platform {
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Facebook => "Facebook",
            Platform::Instagram => "Instagram",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformResult {
    pub success: bool,
    pub message: String,
}

impl PlatformResult {
    fn not_attempted() -> Self {
        Self {
            success: false,
            message: "Not attempted".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostOutcome {
    pub message: String,
    pub facebook: PlatformResult,
    pub instagram: PlatformResult,
}

/// Fill `{date}`, `{time}` and `{reason}` in the template, then append
/// the hashtags after a blank line.
pub fn compose_message(template: &str, d: &Disruption, hashtags: &[String]) -> String {
    let template = if template.trim().is_empty() {
        DEFAULT_MESSAGE
    } else {
        template
    };

    let mut message = template
        .replacen("{date}", &short_label(d.date), 1)
        .replacen("{time}", &d.time_label(), 1)
        .replacen("{reason}", &d.reason, 1);

    let tags: Vec<String> = hashtags
        .iter()
        .map(|t| t.trim().trim_start_matches('#'))
        .filter(|t| !t.is_empty())
        .map(|t| format!("#{t}"))
        .collect();
    if !tags.is_empty() {
        message.push_str("\n\n");
        message.push_str(&tags.join(" "));
    }

    message
}

fn attempt(platform: Platform, target_id: &str, key: Option<&str>) -> PlatformResult {
    match key {
        None => PlatformResult {
            success: false,
            message: format!("{} API key not configured", platform.name()),
        },
        Some(_) => {
            tracing::info!(platform = platform.name(), target = target_id, "social post prepared");
            PlatformResult {
                success: true,
                message: "Post created successfully (simulated)".to_string(),
            }
        }
    }
}

/// Build the post and the outcome for each platform.
///
/// A platform is only attempted when it is enabled and has a page or
/// account id.
pub fn publish(d: &Disruption, social: &SocialConfig, keys: &ApiKeys) -> PostOutcome {
    let message = compose_message(&social.message, d, &social.hashtags);

    let facebook = match social.facebook_page_id.as_deref() {
        Some(id) if social.facebook_enabled && !id.is_empty() => {
            attempt(Platform::Facebook, id, keys.facebook.as_deref())
        }
        _ => PlatformResult::not_attempted(),
    };

    let instagram = match social.instagram_account_id.as_deref() {
        Some(id) if social.instagram_enabled && !id.is_empty() => {
            attempt(Platform::Instagram, id, keys.instagram.as_deref())
        }
        _ => PlatformResult::not_attempted(),
    };

    PostOutcome {
        message,
        facebook,
        instagram,
    }
}
