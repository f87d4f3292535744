use crate::config::Config;
use crate::core::embed;
use crate::core::state::AppState;
use crate::core::widget::{ActiveDisruption, active_view, render_widget_html};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::WidgetSettings;
use crate::server::ServerState;
use crate::utils::date;
use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Read the store on the blocking pool; each request gets its own connection.
async fn load_state(config: Arc<Config>) -> AppResult<AppState> {
    tokio::task::spawn_blocking(move || {
        let mut pool = DbPool::new(&config.database)?;
        AppState::load(&mut pool)
    })
    .await
    .map_err(|e| AppError::Server(format!("store task failed: {e}")))?
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /embed
pub async fn embed_page(State(state): State<ServerState>) -> AppResult<Html<String>> {
    let app = load_state(state.config).await?;
    let active = app.active(date::today());
    let widget = render_widget_html(&app.widget_settings, &active);
    Ok(Html(embed::embed_page(&widget)))
}

/// GET /embed.js
pub async fn embed_script(State(state): State<ServerState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        embed::embed_script(&state.config.public_base_url),
    )
}

/// GET /api/disruptions/active
pub async fn active_disruptions(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<ActiveDisruption>>> {
    let app = load_state(state.config).await?;
    Ok(Json(active_view(&app, date::today())))
}

/// GET /api/widget-settings
pub async fn widget_settings(State(state): State<ServerState>) -> AppResult<Json<WidgetSettings>> {
    let app = load_state(state.config).await?;
    Ok(Json(app.widget_settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;
    use crate::db::queries::insert_disruption;
    use crate::models::{DisruptionFields, NewDisruption};
    use crate::server::router;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use chrono::NaiveDate;
    use std::env;
    use tower::ServiceExt;

    fn test_state(name: &str) -> ServerState {
        let path = env::temp_dir().join(format!("{name}_safesailing_server.sqlite"));
        std::fs::remove_file(&path).ok();
        let db = path.to_string_lossy().to_string();

        let pool = DbPool::new(&db).unwrap();
        init_db(&pool.conn).unwrap();
        insert_disruption(
            &pool.conn,
            &NewDisruption {
                date: NaiveDate::from_ymd_opt(2099, 6, 1).unwrap(),
                fields: DisruptionFields {
                    is_full_day: true,
                    start_time: None,
                    end_time: None,
                    reason: "Storm front".into(),
                    refund_provided: false,
                    refund_amount: 0.0,
                },
                created_by_email: None,
            },
        )
        .unwrap();

        ServerState {
            config: Arc::new(Config {
                database: db,
                public_base_url: "https://alerts.example.com".into(),
                ..Default::default()
            }),
        }
    }

    async fn get(state: ServerState, uri: &str) -> (StatusCode, String) {
        let resp = router(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn health_reports_version() {
        let (status, body) = get(test_state("health"), "/health").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn active_endpoint_lists_future_disruptions() {
        let (status, body) = get(test_state("active"), "/api/disruptions/active").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json[0]["timeLabel"], "All Day");
        assert_eq!(json[0]["reason"], "Storm front");
    }

    #[tokio::test]
    async fn embed_page_contains_widget_and_reporter() {
        let (status, body) = get(test_state("embed_page"), "/embed").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Alert: Unfavorable Weather Conditions"));
        assert!(body.contains(embed::HEIGHT_MESSAGE_TYPE));
    }

    #[tokio::test]
    async fn embed_script_points_at_public_url() {
        let (status, body) = get(test_state("embed_js"), "/embed.js").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("https://alerts.example.com"));
    }

    #[tokio::test]
    async fn settings_default_when_never_saved() {
        let (_, body) = get(test_state("settings"), "/api/widget-settings").await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["animation"], "wave");
        assert_eq!(json["primaryColor"], "#0EA5E9");
    }
}
