use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::api_json::ConfirmParams;
use crate::server::ServerState;
use crate::storage::{self, confirm::ResolveOutcome};

/// POST /confirm
/// Segundo paso de un borrado: aplica o descarta la intención registrada.
/// La intención se consume en ambos casos, así que repetir la confirmación
/// no vuelve a mutar nada.
pub async fn confirm_handler(
    state: web::Data<ServerState>,
    body: web::Json<ConfirmParams>,
) -> impl Responder {
    let params = body.into_inner();

    let outcome = {
        let mut confirms = state.confirms.lock().unwrap_or_else(|e| e.into_inner());
        confirms.resolve(&params.key, params.accept)
    };

    match outcome {
        ResolveOutcome::NotPending => HttpResponse::Ok().json(json!({
            "status": "noop",
            "key": params.key,
            "message": "nothing pending for this key"
        })),
        ResolveOutcome::Cancelled => HttpResponse::Ok().json(json!({
            "status": "cancelled",
            "key": params.key
        })),
        ResolveOutcome::Confirmed(action) => {
            match storage::apply_pending_action(&state.paths, &action) {
                Ok(message) => {
                    log::info!("confirmed '{}': {}", params.key, message);
                    HttpResponse::Ok().json(json!({
                        "status": "ok",
                        "key": params.key,
                        "message": message
                    }))
                }
                Err(e) => HttpResponse::InternalServerError()
                    .json(json!({"error": format!("failed to apply '{}': {}", params.key, e)})),
            }
        }
    }
}
