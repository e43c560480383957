use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::api_json::{normalize_faculty, normalize_room, DeleteParams};
use crate::models::{FacultyRecord, RoomRecord};
use crate::server::ServerState;
use crate::storage::{self, confirm::PendingAction};

pub async fn list_faculties_handler(state: web::Data<ServerState>) -> impl Responder {
    let faculties: Vec<FacultyRecord> = storage::load_or_empty(&state.paths.faculties());
    HttpResponse::Ok().json(json!({"faculties": faculties}))
}

pub async fn add_faculty_handler(
    state: web::Data<ServerState>,
    body: web::Json<FacultyRecord>,
) -> impl Responder {
    let record = match normalize_faculty(body.into_inner()) {
        Ok(r) => r,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": e})),
    };

    let path = state.paths.faculties();
    let mut faculties: Vec<FacultyRecord> = storage::load_or_empty(&path);
    faculties.push(record);
    if let Err(e) = storage::save_collection(&path, &faculties) {
        return HttpResponse::InternalServerError()
            .json(json!({"error": format!("failed to save faculties: {}", e)}));
    }
    HttpResponse::Ok().json(json!({"status": "ok", "count": faculties.len()}))
}

/// Primer paso del borrado de docentes: registra la intención y devuelve la
/// clave que `/confirm` espera. La mutación recién ocurre al confirmar.
pub async fn delete_faculty_handler(
    state: web::Data<ServerState>,
    body: web::Json<DeleteParams>,
) -> impl Responder {
    let faculties: Vec<FacultyRecord> = storage::load_or_empty(&state.paths.faculties());
    let (action, message) = match body.index {
        Some(index) => {
            let name = faculties
                .get(index)
                .map(|f| f.faculty.clone())
                .unwrap_or_default();
            (
                PendingAction::DeleteFaculty(index),
                format!("Delete faculty '{}'?", name),
            )
        }
        None => (
            PendingAction::DeleteAllFaculties,
            "Delete ALL faculties? This cannot be undone.".to_string(),
        ),
    };

    let mut confirms = state.confirms.lock().unwrap_or_else(|e| e.into_inner());
    let key = confirms.request(action, message.clone());
    HttpResponse::Ok().json(json!({
        "status": "confirmation_required",
        "key": key,
        "message": message
    }))
}

pub async fn list_rooms_handler(state: web::Data<ServerState>) -> impl Responder {
    let rooms: Vec<RoomRecord> = storage::load_or_empty(&state.paths.rooms());
    HttpResponse::Ok().json(json!({"rooms": rooms}))
}

pub async fn add_room_handler(
    state: web::Data<ServerState>,
    body: web::Json<RoomRecord>,
) -> impl Responder {
    let record = match normalize_room(body.into_inner()) {
        Ok(r) => r,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": e})),
    };

    let path = state.paths.rooms();
    let mut rooms: Vec<RoomRecord> = storage::load_or_empty(&path);
    rooms.push(record);
    if let Err(e) = storage::save_collection(&path, &rooms) {
        return HttpResponse::InternalServerError()
            .json(json!({"error": format!("failed to save rooms: {}", e)}));
    }
    HttpResponse::Ok().json(json!({"status": "ok", "count": rooms.len()}))
}

pub async fn delete_room_handler(
    state: web::Data<ServerState>,
    body: web::Json<DeleteParams>,
) -> impl Responder {
    let rooms: Vec<RoomRecord> = storage::load_or_empty(&state.paths.rooms());
    let (action, message) = match body.index {
        Some(index) => {
            let id = rooms.get(index).map(|r| r.room.clone()).unwrap_or_default();
            (
                PendingAction::DeleteRoom(index),
                format!("Delete room '{}'?", id),
            )
        }
        None => (
            PendingAction::DeleteAllRooms,
            "Delete ALL rooms? This cannot be undone.".to_string(),
        ),
    };

    let mut confirms = state.confirms.lock().unwrap_or_else(|e| e.into_inner());
    let key = confirms.request(action, message.clone());
    HttpResponse::Ok().json(json!({
        "status": "confirmation_required",
        "key": key,
        "message": message
    }))
}
