use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::algorithm::generar_horario;
use crate::api_json::{validate_generate_params, GenerateParams};
use crate::excel;
use crate::models::{FacultyRecord, RoomRecord, ScheduleRow};
use crate::server::ServerState;
use crate::storage::{self, confirm::PendingAction};

/// POST /generate
/// Genera el horario completo, lo persiste y refresca el espejo .xlsx.
/// Sin docentes o sin salas la operación se omite con una advertencia.
pub async fn generate_handler(
    state: web::Data<ServerState>,
    body: web::Json<GenerateParams>,
) -> impl Responder {
    let params = body.into_inner();
    let lunch = match validate_generate_params(&params) {
        Ok(l) => l,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": e})),
    };

    let faculties: Vec<FacultyRecord> = storage::load_or_empty(&state.paths.faculties());
    let rooms: Vec<RoomRecord> = storage::load_or_empty(&state.paths.rooms());

    let rows = match generar_horario(&params.days, &params.slots, &lunch, &faculties, &rooms) {
        Ok(rows) => rows,
        Err(e) => return HttpResponse::BadRequest().json(json!({"warning": e.to_string()})),
    };

    if let Err(e) = storage::save_collection(&state.paths.generated(), &rows) {
        return HttpResponse::InternalServerError()
            .json(json!({"error": format!("failed to save generated timetable: {}", e)}));
    }
    excel::refresh_schedule_mirror(&state.paths.generated_xlsx(), &rows);

    log::info!("generated timetable with {} rows", rows.len());
    HttpResponse::Ok().json(json!({"status": "ok", "count": rows.len(), "rows": rows}))
}

pub async fn get_generated_handler(state: web::Data<ServerState>) -> impl Responder {
    let rows: Vec<ScheduleRow> = storage::load_or_empty(&state.paths.generated());
    HttpResponse::Ok().json(json!({"rows": rows}))
}

pub async fn delete_generated_handler(state: web::Data<ServerState>) -> impl Responder {
    let mut confirms = state.confirms.lock().unwrap_or_else(|e| e.into_inner());
    let message = "Delete generated timetable?".to_string();
    let key = confirms.request(PendingAction::DeleteGenerated, message.clone());
    HttpResponse::Ok().json(json!({
        "status": "confirmation_required",
        "key": key,
        "message": message
    }))
}

/// GET /generated/export — descarga el espejo .xlsx si existe.
pub async fn download_generated_handler(state: web::Data<ServerState>) -> impl Responder {
    serve_xlsx(&state.paths.generated_xlsx(), "generated_timetable.xlsx").await
}

pub(super) async fn serve_xlsx(path: &std::path::Path, download_name: &str) -> HttpResponse {
    if !path.exists() {
        return HttpResponse::NotFound().json(json!({"error": "spreadsheet export not available"}));
    }
    match tokio::fs::read(path).await {
        Ok(bytes) => HttpResponse::Ok()
            .content_type("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet")
            .append_header((
                actix_web::http::header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", download_name),
            ))
            .body(bytes),
        Err(e) => HttpResponse::InternalServerError()
            .json(json!({"error": format!("failed to read export: {}", e)})),
    }
}
