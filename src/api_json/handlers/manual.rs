use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::algorithm::add_manual_entry;
use crate::api_json::validate_manual_entry;
use crate::excel;
use crate::models::ScheduleRow;
use crate::server::ServerState;
use crate::storage::{self, confirm::PendingAction};

/// POST /manual
/// Alta manual de una fila. Se anexa sin control de choques con filas
/// existentes del mismo (día, bloque); ese es el contrato del log manual.
pub async fn add_manual_handler(
    state: web::Data<ServerState>,
    body: web::Json<ScheduleRow>,
) -> impl Responder {
    let row = body.into_inner();
    if let Err(e) = validate_manual_entry(&row) {
        return HttpResponse::BadRequest().json(json!({"error": e}));
    }

    let path = state.paths.manual();
    let entries: Vec<ScheduleRow> = storage::load_or_empty(&path);
    let entries = add_manual_entry(entries, row);
    if let Err(e) = storage::save_collection(&path, &entries) {
        return HttpResponse::InternalServerError()
            .json(json!({"error": format!("failed to save manual entries: {}", e)}));
    }
    excel::refresh_schedule_mirror(&state.paths.manual_xlsx(), &entries);

    HttpResponse::Ok().json(json!({"status": "ok", "count": entries.len()}))
}

pub async fn get_manual_handler(state: web::Data<ServerState>) -> impl Responder {
    let entries: Vec<ScheduleRow> = storage::load_or_empty(&state.paths.manual());
    HttpResponse::Ok().json(json!({"entries": entries}))
}

pub async fn delete_manual_handler(state: web::Data<ServerState>) -> impl Responder {
    let mut confirms = state.confirms.lock().unwrap_or_else(|e| e.into_inner());
    let message = "Delete all manual entries?".to_string();
    let key = confirms.request(PendingAction::DeleteManual, message.clone());
    HttpResponse::Ok().json(json!({
        "status": "confirmation_required",
        "key": key,
        "message": message
    }))
}

/// GET /manual/export — descarga el espejo .xlsx si existe.
pub async fn download_manual_handler(state: web::Data<ServerState>) -> impl Responder {
    super::generated::serve_xlsx(&state.paths.manual_xlsx(), "manual_timetable.xlsx").await
}
