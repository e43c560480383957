use std::collections::HashMap;

use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use futures_util::stream::StreamExt;
use serde_json::{json, Map, Value};

use crate::excel::ingest_file_named;
use crate::server::ServerState;
use crate::storage::{self, confirm::PendingAction};

/// Lee el primer campo de fichero del multipart y devuelve (nombre, bytes).
async fn read_upload(payload: &mut Multipart) -> Result<(String, Vec<u8>), String> {
    while let Some(field_res) = payload.next().await {
        let mut field = match field_res {
            Ok(f) => f,
            Err(e) => return Err(format!("multipart field error: {}", e)),
        };

        let filename = match field.content_disposition().get_filename() {
            Some(name) => name.to_string(),
            None => {
                // campo sin fichero (p. ej. un flag de formulario): drenar y seguir
                while let Some(chunk) = field.next().await {
                    if chunk.is_err() {
                        break;
                    }
                }
                continue;
            }
        };
        if filename.contains("..") {
            return Err("invalid filename".to_string());
        }

        let mut bytes: Vec<u8> = Vec::new();
        while let Some(chunk) = field.next().await {
            match chunk {
                Ok(b) => bytes.extend_from_slice(&b),
                Err(e) => return Err(format!("upload stream error: {}", e)),
            }
        }
        return Ok((filename, bytes));
    }
    Err("no file field in upload".to_string())
}

/// POST /upload?auto_delete=true|false
/// Subida de horario desde la vista home: parsea el CSV/planilla, reemplaza
/// el preview completo y archiva los bytes originales con marca de tiempo.
/// Con `auto_delete` el preview y el archivo se descartan tras guardarse.
pub async fn upload_timetable_handler(
    state: web::Data<ServerState>,
    mut payload: Multipart,
    query: web::Query<HashMap<String, String>>,
) -> impl Responder {
    let (filename, bytes) = match read_upload(&mut payload).await {
        Ok(pair) => pair,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": e})),
    };

    // Un fallo de parseo aborta sin tocar el preview guardado.
    let rows = match ingest_file_named(&bytes, &filename) {
        Ok(rows) => rows,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": e.to_string()})),
    };

    if let Err(e) = storage::save_collection(&state.paths.uploaded(), &rows) {
        return HttpResponse::InternalServerError()
            .json(json!({"error": format!("failed to save uploaded preview: {}", e)}));
    }

    let archive = state.paths.archived_upload(&filename);
    if let Err(e) = std::fs::write(&archive, &bytes) {
        log::warn!("failed to archive upload {}: {}", archive.display(), e);
    }

    let auto_delete = query
        .get("auto_delete")
        .map(|s| s == "true" || s == "1")
        .unwrap_or(false);
    if auto_delete {
        storage::safe_unlink(&state.paths.uploaded());
        storage::safe_unlink(&archive);
    }

    HttpResponse::Ok().json(json!({
        "status": "ok",
        "rows": rows.len(),
        "auto_deleted": auto_delete
    }))
}

pub async fn get_uploaded_handler(state: web::Data<ServerState>) -> impl Responder {
    let rows: Vec<Map<String, Value>> = storage::load_or_empty(&state.paths.uploaded());
    HttpResponse::Ok().json(json!({"preview": rows}))
}

pub async fn delete_uploaded_handler(state: web::Data<ServerState>) -> impl Responder {
    let mut confirms = state.confirms.lock().unwrap_or_else(|e| e.into_inner());
    let message = "Delete the uploaded preview?".to_string();
    let key = confirms.request(PendingAction::DeleteUploadedPreview, message.clone());
    HttpResponse::Ok().json(json!({
        "status": "confirmation_required",
        "key": key,
        "message": message
    }))
}

/// POST /dataset/upload — igual que la subida de horario pero hacia el
/// dataset ad-hoc, sin copia archivada.
pub async fn upload_dataset_handler(
    state: web::Data<ServerState>,
    mut payload: Multipart,
) -> impl Responder {
    let (filename, bytes) = match read_upload(&mut payload).await {
        Ok(pair) => pair,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": e})),
    };

    let rows = match ingest_file_named(&bytes, &filename) {
        Ok(rows) => rows,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": e.to_string()})),
    };

    if let Err(e) = storage::save_collection(&state.paths.dataset(), &rows) {
        return HttpResponse::InternalServerError()
            .json(json!({"error": format!("failed to save dataset: {}", e)}));
    }

    HttpResponse::Ok().json(json!({"status": "ok", "rows": rows.len()}))
}

pub async fn get_dataset_handler(state: web::Data<ServerState>) -> impl Responder {
    let rows: Vec<Map<String, Value>> = storage::load_or_empty(&state.paths.dataset());
    HttpResponse::Ok().json(json!({"dataset": rows}))
}

pub async fn delete_dataset_handler(state: web::Data<ServerState>) -> impl Responder {
    let mut confirms = state.confirms.lock().unwrap_or_else(|e| e.into_inner());
    let message = "Delete dataset file?".to_string();
    let key = confirms.request(PendingAction::DeleteDataset, message.clone());
    HttpResponse::Ok().json(json!({
        "status": "confirmation_required",
        "key": key,
        "message": message
    }))
}
