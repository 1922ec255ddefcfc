//! HTTP surface: upload form, cleaning endpoint, download endpoint, and
//! health probe.
//!
//! The handlers are thin collaborators around the pure cleaning core:
//! multipart intake and CSV parse errors short-circuit with a 4xx before
//! [`clean`] runs, and delivery goes through the session-keyed
//! [`ResultStore`].

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use actix_cors::Cors;
use actix_multipart::Multipart;
use actix_web::dev::Server;
use actix_web::{get, post, web, App, HttpResponse, HttpServer, Responder};
use futures_util::TryStreamExt;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::cleaning::{clean, CleanSummary};
use crate::config::AppConfig;
use crate::csvio::{read_csv_from_bytes, write_csv_to_bytes};
use crate::error::ServiceError;
use crate::store::{CleanedFile, ResultStore};

/// Shared application state.
pub struct AppState {
    /// Cleaned payloads awaiting retrieval.
    pub store: Arc<ResultStore>,
    /// Upper bound on an uploaded file, in bytes.
    pub max_upload_bytes: usize,
}

const UPLOAD_FORM: &str = r#"<!doctype html>
<title>Upload CSV for Cleaning</title>
<h1>Upload CSV for Cleaning</h1>
<form action="/clean" method="post" enctype="multipart/form-data">
  <input type="file" name="file" required>
  <input type="submit" value="Clean">
</form>
"#;

/// Response body for a successful cleaning request.
#[derive(Debug, Serialize)]
pub struct CleanResponse {
    /// Session id to pass to `GET /download`.
    pub session: String,
    /// Download filename of the cleaned artifact.
    pub filename: String,
    /// What the cleaning run changed.
    pub summary: CleanSummary,
}

#[derive(Debug, Deserialize)]
struct DownloadQuery {
    session: String,
}

struct Upload {
    filename: String,
    bytes: Vec<u8>,
}

#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(UPLOAD_FORM)
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

#[post("/clean")]
async fn clean_upload(state: web::Data<AppState>, mut payload: Multipart) -> impl Responder {
    let upload = match read_upload(&mut payload, state.max_upload_bytes).await {
        Ok(Some(upload)) => upload,
        Ok(None) => return HttpResponse::BadRequest().body("no file uploaded"),
        Err(err @ ServiceError::UploadTooLarge { .. }) => {
            return HttpResponse::PayloadTooLarge().body(err.to_string());
        }
        Err(err) => return HttpResponse::BadRequest().body(err.to_string()),
    };

    let table = match read_csv_from_bytes(&upload.bytes) {
        Ok(table) => table,
        Err(err) => {
            warn!(filename = %upload.filename, error = %err, "rejecting unparseable upload");
            return HttpResponse::BadRequest().body(format!("could not parse CSV: {err}"));
        }
    };

    let (cleaned, summary) = clean(&table);

    let bytes = match write_csv_to_bytes(&cleaned) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(filename = %upload.filename, error = %err, "failed to serialize cleaned table");
            return HttpResponse::InternalServerError().body(err.to_string());
        }
    };

    let filename = cleaned_filename(&upload.filename);
    let session = state.store.put(CleanedFile {
        filename: filename.clone(),
        bytes,
        summary,
    });
    info!(
        filename = %filename,
        original_rows = summary.original_row_count,
        rows_removed = summary.rows_removed,
        "cleaned upload"
    );

    HttpResponse::Ok().json(CleanResponse {
        session: session.to_string(),
        filename,
        summary,
    })
}

#[get("/download")]
async fn download(state: web::Data<AppState>, query: web::Query<DownloadQuery>) -> impl Responder {
    let id = match Uuid::parse_str(&query.session) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("invalid session id"),
    };

    match state.store.take(&id) {
        Some(file) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header((
                "Content-Disposition",
                format!("attachment; filename=\"{}\"", file.filename),
            ))
            .body(file.bytes),
        None => HttpResponse::NotFound().body(ServiceError::NoResultPending.to_string()),
    }
}

/// Pull the `file` field out of the multipart payload, bounded by
/// `max_bytes`. Returns `Ok(None)` when the payload carries no file field.
async fn read_upload(
    payload: &mut Multipart,
    max_bytes: usize,
) -> Result<Option<Upload>, ServiceError> {
    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|err| ServiceError::InvalidUpload(err.to_string()))?
    {
        let filename = {
            let disposition = field.content_disposition();
            if disposition.get_name() != Some("file") {
                continue;
            }
            disposition
                .get_filename()
                .map(ToOwned::to_owned)
                .unwrap_or_else(|| "upload.csv".to_string())
        };

        let mut bytes = Vec::new();
        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|err| ServiceError::InvalidUpload(err.to_string()))?
        {
            if bytes.len() + chunk.len() > max_bytes {
                return Err(ServiceError::UploadTooLarge { limit: max_bytes });
            }
            bytes.extend_from_slice(&chunk);
        }
        return Ok(Some(Upload { filename, bytes }));
    }
    Ok(None)
}

/// Download name for a cleaned artifact: the upload's base name with a
/// `cleaned_` prefix. Any path components a client smuggles into the
/// filename are discarded.
fn cleaned_filename(original: &str) -> String {
    let base = Path::new(original)
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("upload.csv");
    format!("cleaned_{base}")
}

/// Register the service routes. Shared by [`start_server`] and the HTTP
/// tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(health)
        .service(clean_upload)
        .service(download);
}

/// Build and start the HTTP server.
pub fn start_server(config: &AppConfig) -> std::io::Result<Server> {
    let store = Arc::new(ResultStore::new(Duration::from_secs(config.result_ttl_secs)));
    let state = web::Data::new(AppState {
        store,
        max_upload_bytes: config.max_upload_bytes,
    });

    let server = HttpServer::new(move || {
        let cors = Cors::permissive(); // Allow all origins for a local tool

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run();

    Ok(server)
}
