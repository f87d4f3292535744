//! Public alert widget: what is shown and how it is rendered.

use crate::core::state::AppState;
use crate::db::DisruptionStore;
use crate::errors::AppResult;
use crate::models::{Animation, Disruption, WidgetSettings, WidgetSettingsPatch};
use crate::utils::date::short_label;
use crate::utils::formatting::join_labels;
use chrono::NaiveDate;
use serde::Serialize;

/// Line shown under the description, e.g. `Sat, Jun 1 and Sun, Jun 2`.
pub fn dates_headline(active: &[&Disruption]) -> String {
    let labels: Vec<String> = active.iter().map(|d| short_label(d.date)).collect();
    join_labels(&labels)
}

/// JSON view consumed by `/api/disruptions/active`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveDisruption {
    pub id: i64,
    pub date: NaiveDate,
    pub date_label: String,
    pub time_label: String,
    pub is_full_day: bool,
    pub reason: String,
}

pub fn active_view(state: &AppState, today: NaiveDate) -> Vec<ActiveDisruption> {
    state
        .active(today)
        .into_iter()
        .map(|d| ActiveDisruption {
            id: d.id,
            date: d.date,
            date_label: short_label(d.date),
            time_label: d.time_label(),
            is_full_day: d.is_full_day,
            reason: d.reason.clone(),
        })
        .collect()
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const ICON_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3"/><path d="M12 9v4"/><path d="M12 17h.01"/></svg>"#;

/// Render the widget markup. Empty when nothing is active.
pub fn render_widget_html(s: &WidgetSettings, active: &[&Disruption]) -> String {
    if active.is_empty() {
        return String::new();
    }

    let style = format!(
        "background-color:{};border:{} solid {};border-radius:{};box-shadow:{};font-family:{};padding:{}",
        s.primary_color,
        s.border_width.css(),
        s.accent_color,
        s.border_radius.css(),
        s.shadow.css(),
        s.font_style.css(),
        s.layout.padding(),
    );

    let mut html = format!(
        r#"<div class="alert-widget {}" style="{}"><div class="alert-body">"#,
        s.animation.css_class(),
        style
    );

    if s.show_icon {
        html.push_str(&format!(
            r#"<span class="alert-icon" style="color:{}">{}</span>"#,
            s.accent_color, ICON_SVG
        ));
    }

    html.push_str("<div>");
    html.push_str(&format!("<h3>{}</h3>", escape_html(&s.title)));
    html.push_str(&format!(
        r#"<p class="alert-description">{}</p>"#,
        escape_html(&s.description)
    ));

    if s.show_dates {
        html.push_str(&format!(
            r#"<p class="alert-dates"><strong>{}</strong></p>"#,
            escape_html(&dates_headline(active))
        ));
    }

    if s.show_times {
        html.push_str(r#"<div class="alert-times">"#);
        for d in active {
            html.push_str(&format!(
                "<div><strong>{}:</strong> {}</div>",
                escape_html(&short_label(d.date)),
                escape_html(&d.time_label())
            ));
        }
        html.push_str("</div>");
    }

    html.push_str("</div></div>");

    if s.animation == Animation::Wave {
        html.push_str(&format!(
            r#"<div class="wave-animation" style="--wave-color:{}"></div>"#,
            s.accent_color
        ));
    }

    html.push_str("</div>");
    html
}

/// Merge `patch` into the stored settings (or the defaults) and upsert.
pub fn update_settings(
    store: &mut dyn DisruptionStore,
    state: &mut AppState,
    patch: WidgetSettingsPatch,
) -> AppResult<WidgetSettings> {
    let current = store.get_widget_settings()?.unwrap_or_default();
    let merged = patch.apply(current);
    merged.validate()?;

    store.set_widget_settings(&merged)?;
    state.widget_settings = merged.clone();
    store.record("widget", "settings", &format!("title: {}", merged.title));

    Ok(merged)
}
