use std::collections::HashMap;
use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use serde_json::{json, Map, Value};

use crate::api_json::handlers::{
    add_faculty_handler, add_manual_handler, add_room_handler, confirm_handler,
    delete_dataset_handler, delete_faculty_handler, delete_generated_handler,
    delete_manual_handler, delete_room_handler, delete_uploaded_handler,
    download_generated_handler, download_manual_handler, generate_handler, get_dataset_handler,
    get_generated_handler, get_manual_handler, get_uploaded_handler, help_handler,
    list_faculties_handler, list_rooms_handler, upload_dataset_handler, upload_timetable_handler,
};
use crate::models::{FacultyRecord, RoomRecord, ScheduleRow};
use crate::storage::{self, confirm::ConfirmRegistry, DataPaths};

/// Estado compartido entre handlers: rutas de datos e intenciones de borrado.
/// Las colecciones en sí no viven aquí: cada handler relee y reescribe su
/// fichero, conservando la semántica last-write-wins del flujo original.
pub struct ServerState {
    pub paths: DataPaths,
    pub confirms: Mutex<ConfirmRegistry>,
}

/// GET /?view=home|generated|manual|dataset
/// Router de vistas: devuelve el snapshot de datos de la vista pedida.
async fn view_handler(
    state: web::Data<ServerState>,
    query: web::Query<HashMap<String, String>>,
) -> impl Responder {
    let view = query
        .get("view")
        .and_then(|s| {
            if s.trim().is_empty() {
                None
            } else {
                Some(s.clone())
            }
        })
        .unwrap_or_else(|| "home".to_string());

    match view.as_str() {
        "home" => {
            let faculties: Vec<FacultyRecord> = storage::load_or_empty(&state.paths.faculties());
            let rooms: Vec<RoomRecord> = storage::load_or_empty(&state.paths.rooms());
            HttpResponse::Ok().json(json!({
                "view": "home",
                "faculties": faculties,
                "rooms": rooms
            }))
        }
        "generated" => {
            let rows: Vec<ScheduleRow> = storage::load_or_empty(&state.paths.generated());
            HttpResponse::Ok().json(json!({"view": "generated", "rows": rows}))
        }
        "manual" => {
            let entries: Vec<ScheduleRow> = storage::load_or_empty(&state.paths.manual());
            HttpResponse::Ok().json(json!({"view": "manual", "entries": entries}))
        }
        "dataset" => {
            let preview: Vec<Map<String, Value>> = storage::load_or_empty(&state.paths.uploaded());
            let dataset: Vec<Map<String, Value>> = storage::load_or_empty(&state.paths.dataset());
            HttpResponse::Ok().json(json!({
                "view": "dataset",
                "uploaded_preview": preview,
                "dataset": dataset
            }))
        }
        other => {
            HttpResponse::BadRequest().json(json!({"error": format!("unknown view '{}'", other)}))
        }
    }
}

pub async fn run_server(bind_addr: &str, paths: DataPaths) -> std::io::Result<()> {
    if let Err(e) = std::fs::create_dir_all(paths.base()) {
        log::warn!("failed to create data dir {}: {}", paths.base().display(), e);
    }

    let state = web::Data::new(ServerState {
        paths,
        confirms: Mutex::new(ConfirmRegistry::new()),
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Cors::permissive())
            .route("/", web::get().to(view_handler))
            .route("/help", web::get().to(help_handler))
            .route("/faculties", web::get().to(list_faculties_handler))
            .route("/faculties", web::post().to(add_faculty_handler))
            .route("/faculties/delete", web::post().to(delete_faculty_handler))
            .route("/rooms", web::get().to(list_rooms_handler))
            .route("/rooms", web::post().to(add_room_handler))
            .route("/rooms/delete", web::post().to(delete_room_handler))
            .route("/generate", web::post().to(generate_handler))
            .route("/generated", web::get().to(get_generated_handler))
            .route("/generated/delete", web::post().to(delete_generated_handler))
            .route("/generated/export", web::get().to(download_generated_handler))
            .route("/manual", web::post().to(add_manual_handler))
            .route("/manual", web::get().to(get_manual_handler))
            .route("/manual/delete", web::post().to(delete_manual_handler))
            .route("/manual/export", web::get().to(download_manual_handler))
            .route("/upload", web::post().to(upload_timetable_handler))
            .route("/uploaded", web::get().to(get_uploaded_handler))
            .route("/uploaded/delete", web::post().to(delete_uploaded_handler))
            .route("/dataset/upload", web::post().to(upload_dataset_handler))
            .route("/dataset", web::get().to(get_dataset_handler))
            .route("/dataset/delete", web::post().to(delete_dataset_handler))
            .route("/confirm", web::post().to(confirm_handler))
    })
    .bind(bind_addr)?
    .run()
    .await
}
