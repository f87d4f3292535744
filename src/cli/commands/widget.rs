use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::state::AppState;
use crate::core::widget::{render_widget_html, update_settings};
use crate::errors::AppResult;
use crate::models::WidgetSettingsPatch;
use crate::ui::messages::{info, success};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Widget {
        show,
        preview,
        title,
        description,
        primary_color,
        accent_color,
        show_dates,
        show_times,
        show_icon,
        animation,
        border_radius,
        shadow,
        font_style,
        layout,
        border_width,
    } = cmd
    {
        let mut pool = open_pool(cfg)?;
        let mut state = AppState::load(&mut pool)?;

        let patch = WidgetSettingsPatch {
            title: title.clone(),
            description: description.clone(),
            primary_color: primary_color.clone(),
            accent_color: accent_color.clone(),
            show_dates: *show_dates,
            show_times: *show_times,
            show_icon: *show_icon,
            animation: *animation,
            border_radius: *border_radius,
            shadow: *shadow,
            font_style: *font_style,
            layout: *layout,
            border_width: *border_width,
        };

        let changed = patch_has_changes(&patch);
        if changed {
            update_settings(&mut pool, &mut state, patch)?;
            success("Widget settings saved.");
        }

        if *show || (!changed && !*preview) {
            println!("{}", serde_json::to_string_pretty(&state.widget_settings)?);
        }

        if *preview {
            let active = state.active(date::today());
            if active.is_empty() {
                info("No active disruptions: the widget is hidden.");
            } else {
                println!("{}", render_widget_html(&state.widget_settings, &active));
            }
        }
    }

    Ok(())
}

fn patch_has_changes(p: &WidgetSettingsPatch) -> bool {
    p.title.is_some()
        || p.description.is_some()
        || p.primary_color.is_some()
        || p.accent_color.is_some()
        || p.show_dates.is_some()
        || p.show_times.is_some()
        || p.show_icon.is_some()
        || p.animation.is_some()
        || p.border_radius.is_some()
        || p.shadow.is_some()
        || p.font_style.is_some()
        || p.layout.is_some()
        || p.border_width.is_some()
}
