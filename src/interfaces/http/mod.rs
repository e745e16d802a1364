use std::sync::Arc;

use actix_cors::Cors;
use actix_multipart::Multipart;
use actix_web::dev::Server;
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpResponse, HttpServer};
use futures_util::TryStreamExt;
use tracing::{error, info};

use crate::application::{UploadIngestionUseCase, UploadSummary};
use crate::domain::error::AppError;
use crate::infrastructure::config::Settings;
use crate::infrastructure::db::TableStore;

pub struct HttpState {
    pub ingestion: UploadIngestionUseCase,
    pub store: Arc<dyn TableStore + Send + Sync>,
    pub max_upload_bytes: usize,
}

/// One uploaded file: the client-supplied name plus the raw bytes.
struct UploadedFile {
    file_name: String,
    bytes: Vec<u8>,
}

async fn upload(data: web::Data<HttpState>, payload: Multipart) -> HttpResponse {
    match handle_upload(&data, payload).await {
        Ok(summary) => {
            info!(
                "upload complete (file={} rows={})",
                summary.file_name, summary.row_count
            );
            HttpResponse::Ok()
                .content_type("text/plain; charset=utf-8")
                .body(summary_body(&summary))
        }
        Err(err) => {
            error!("upload failed: {}", err);
            error_response(&err)
        }
    }
}

async fn handle_upload(data: &HttpState, payload: Multipart) -> Result<UploadSummary, AppError> {
    let file = read_file_field(payload, data.max_upload_bytes).await?;
    info!(
        "received file: {} ({} bytes)",
        file.file_name,
        file.bytes.len()
    );
    data.ingestion.execute(&file.file_name, &file.bytes).await
}

/// Pull the `file` field out of the multipart form, bounded by the upload
/// budget. Fields with any other name are skipped.
async fn read_file_field(mut payload: Multipart, limit: usize) -> Result<UploadedFile, AppError> {
    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| AppError::Request(format!("failed to parse multipart form: {}", e)))?
    {
        if field.name() != "file" {
            continue;
        }

        let file_name = field
            .content_disposition()
            .get_filename()
            .map(|s| s.to_string())
            .ok_or_else(|| AppError::Request("file field has no filename".to_string()))?;

        let mut bytes = Vec::new();
        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|e| AppError::Request(format!("failed to read file field: {}", e)))?
        {
            if bytes.len() + chunk.len() > limit {
                return Err(AppError::Request(format!(
                    "file exceeds the {} byte upload limit",
                    limit
                )));
            }
            bytes.extend_from_slice(&chunk);
        }

        return Ok(UploadedFile { file_name, bytes });
    }

    Err(AppError::Request(
        "multipart form has no file field".to_string(),
    ))
}

fn summary_body(summary: &UploadSummary) -> String {
    format!(
        "Received file: {}, size: {} bytes\nColumns: [{}]\nRows: {}\n",
        summary.file_name,
        summary.byte_size,
        summary.headers.join(", "),
        summary.row_count
    )
}

async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed()
        .content_type("text/plain; charset=utf-8")
        .body("POST is required for /upload\n")
}

async fn health(data: web::Data<HttpState>) -> HttpResponse {
    match data.store.ping().await {
        Ok(()) => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body("ok\n"),
        Err(err) => {
            error!("health check failed: {}", err);
            error_response(&err)
        }
    }
}

/// The only place error kinds become HTTP status codes.
fn error_response(err: &AppError) -> HttpResponse {
    let status = match err {
        AppError::Request(_) | AppError::Format(_) => StatusCode::BAD_REQUEST,
        AppError::Schema(_) | AppError::Load(_) => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::Config(_) | AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    HttpResponse::build(status)
        .content_type("text/plain; charset=utf-8")
        .body(format!("{}\n", err))
}

fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/upload")
            .route(web::post().to(upload))
            .route(web::route().to(method_not_allowed)),
    )
    .route("/health", web::get().to(health));
}

pub fn start_server(
    settings: &Settings,
    store: Arc<dyn TableStore + Send + Sync>,
) -> std::io::Result<Server> {
    let state = web::Data::new(HttpState {
        ingestion: UploadIngestionUseCase::new(store.clone(), settings.upload_table.clone()),
        store,
        max_upload_bytes: settings.max_upload_bytes,
    });

    let server = HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .configure(configure_routes)
    })
    .bind(settings.bind_addr.as_str())?
    .run();

    Ok(server)
}
