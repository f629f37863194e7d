use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use chrono::{DateTime, Utc};
use hand_rom_wasm::{analyze, Frame, HtmlPresenter, Mode, Presenter, RomReport, TextPresenter};
use serde::{Deserialize, Serialize};

use crate::extractors::JsonBody;
use crate::response::{ok, AppError};
use crate::state::AppState;
use crate::validation::validate_frames;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/analyze", post(analyze_frames))
        .route("/render", post(render_frames))
}

/// 帧按采集顺序排列，最后一帧最新
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub frames: Vec<Frame>,
    #[serde(default)]
    pub mode: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeResponse {
    #[serde(flatten)]
    report: RomReport,
    analyzed_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct RenderQuery {
    format: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RenderFormat {
    Html,
    Text,
}

impl RenderFormat {
    fn parse(raw: Option<&str>) -> Result<Self, AppError> {
        match raw.map(str::trim) {
            None | Some("") | Some("html") => Ok(RenderFormat::Html),
            Some("text") => Ok(RenderFormat::Text),
            Some(other) => Err(AppError::bad_request(
                "INVALID_FORMAT",
                &format!("Unsupported format '{other}', expected 'html' or 'text'"),
            )),
        }
    }

    fn presenter(self) -> &'static dyn Presenter {
        match self {
            RenderFormat::Html => &HtmlPresenter,
            RenderFormat::Text => &TextPresenter,
        }
    }
}

async fn analyze_frames(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<AnalyzeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let report = run_analysis(&state, &req)?;
    Ok(ok(AnalyzeResponse {
        report,
        analyzed_at: Utc::now(),
    }))
}

async fn render_frames(
    State(state): State<AppState>,
    Query(q): Query<RenderQuery>,
    JsonBody(req): JsonBody<AnalyzeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let presenter = RenderFormat::parse(q.format.as_deref())?.presenter();
    let report = run_analysis(&state, &req)?;
    Ok((
        [(header::CONTENT_TYPE, presenter.content_type())],
        presenter.render(&report),
    ))
}

fn run_analysis(state: &AppState, req: &AnalyzeRequest) -> Result<RomReport, AppError> {
    validate_frames(&req.frames, state.max_frames_per_request())
        .map_err(|msg| AppError::bad_request("VALIDATION_ERROR", &msg))?;

    let mode = Mode::parse(&req.mode);
    tracing::debug!(?mode, available = req.frames.len(), "ROM analysis start");

    let report = analyze(&req.frames, mode, state.window_policy()).inspect_err(|e| {
        tracing::info!(error = %e, available = req.frames.len(), "ROM analysis skipped");
    })?;

    tracing::info!(
        ?mode,
        available = req.frames.len(),
        frames_used = report.frames_used,
        "ROM analysis finished"
    );
    Ok(report)
}
