use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::{Json, Router, routing::post};
use base64::Engine;
use image::ImageEncoder;
use image::codecs::png::PngEncoder;
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use triangulation::arithmetic;
use triangulation::config::Params;
use triangulation::render;

#[derive(Deserialize)]
struct SequenceRequest {
    n: usize,
    k: usize,
    cell: Option<usize>,
    cap_factor: Option<usize>,
}

#[derive(Serialize)]
struct SequenceResponse {
    n: usize,
    k: usize,
    sequence: Vec<usize>,
    length: usize,
    closed_form_length: usize,
    grid: String,
    image: String,
    timings: Vec<TimingEntry>,
}

#[derive(Serialize)]
struct TimingEntry {
    name: String,
    ms: f64,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

const MAX_N: usize = 10_000;
const MIN_CELL: usize = 4;
const MAX_CELL: usize = 128;
const MAX_CAP_FACTOR: usize = 64;
const MAX_PIXELS: usize = 16_000_000;

fn api_error(status: StatusCode, msg: impl ToString) -> ApiError {
    (status, Json(ErrorResponse { error: msg.to_string() }))
}

fn encode_png(rgba: &[u8], w: usize, h: usize) -> Result<String, image::ImageError> {
    let mut buf = Vec::new();
    let encoder = PngEncoder::new(&mut buf);
    encoder.write_image(rgba, w as u32, h as u32, image::ExtendedColorType::Rgba8)?;
    let b64 = base64::engine::general_purpose::STANDARD.encode(&buf);
    Ok(format!("data:image/png;base64,{}", b64))
}

/// Reject requests whose graph or image would be unreasonably large.
fn validate(n: usize, cell: usize, cap_factor: usize) -> Result<(), ApiError> {
    let unprocessable =
        |msg: String| -> Result<(), ApiError> { Err(api_error(StatusCode::UNPROCESSABLE_ENTITY, msg)) };
    if n > MAX_N {
        return unprocessable(format!("n must be at most {MAX_N}"));
    }
    if !(MIN_CELL..=MAX_CELL).contains(&cell) {
        return unprocessable(format!("cell must be between {MIN_CELL} and {MAX_CELL}"));
    }
    if cap_factor > MAX_CAP_FACTOR {
        return unprocessable(format!("cap_factor must be at most {MAX_CAP_FACTOR}"));
    }
    if n * cell * cell > MAX_PIXELS {
        return unprocessable(format!("image for n = {n} at cell = {cell} exceeds {MAX_PIXELS} pixels"));
    }
    Ok(())
}

async fn sequence_handler(
    Json(req): Json<SequenceRequest>,
) -> Result<Json<SequenceResponse>, ApiError> {
    let defaults = Params::default();
    let params = Params {
        cell_size: req.cell.unwrap_or(defaults.cell_size),
        cap_factor: req.cap_factor.unwrap_or(defaults.cap_factor),
        ..defaults
    };
    let (n, k) = (req.n, req.k);
    validate(n, params.cell_size, params.cap_factor)?;

    let response = tokio::task::spawn_blocking(move || {
        let (tri, timings) = triangulation::generate(n, k, &params)
            .map_err(|e| api_error(StatusCode::UNPROCESSABLE_ENTITY, e))?;

        let (rgba, w, h) =
            render::render_path(&tri.graph, &tri.sequence, params.cell_size, params.dot_radius);
        let image = encode_png(&rgba, w, h)
            .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, e))?;

        let timing_entries = timings
            .iter()
            .map(|t| TimingEntry {
                name: t.name.to_string(),
                ms: t.ms,
            })
            .collect();

        Ok(SequenceResponse {
            n,
            k,
            length: tri.sequence.len(),
            closed_form_length: arithmetic::sequence_len(k, n / k),
            grid: render::render_text(&tri.graph),
            image,
            sequence: tri.sequence,
            timings: timing_entries,
        })
    })
    .await
    .map_err(|e| {
        error!("sequence task failed: {e}");
        api_error(StatusCode::INTERNAL_SERVER_ERROR, e)
    })??;

    Ok(Json(response))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let frontend = ServeDir::new("frontend");

    let app = Router::new()
        .route("/api/sequence", post(sequence_handler))
        .layer(CorsLayer::permissive())
        .fallback_service(frontend);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("triangulation server at http://{}", addr);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("failed to bind {addr}: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
    }
}
