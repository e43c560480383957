use actix_web::{HttpResponse, Responder};
use serde_json::json;

use crate::api_json::GenerateParams;
use crate::models::{DAYS, LUNCH_CHOICES, SLOTS};

/// GET /help — formato de los cuerpos esperados y mapa de rutas.
pub async fn help_handler() -> impl Responder {
    let example = GenerateParams {
        days: DAYS[..5].iter().map(|d| d.to_string()).collect(),
        slots: SLOTS.iter().map(|s| s.to_string()).collect(),
        lunch: format!("Fixed: {}", LUNCH_CHOICES[0]),
    };

    let help = json!({
        "description": "API de horarios institucionales. Los recursos (docentes y salas) se registran en home; /generate produce el horario semanal aleatorio; /manual acumula filas escritas a mano; las subidas CSV/xlsx alimentan el preview y el dataset. Los borrados son en dos pasos: el endpoint de delete devuelve una clave y /confirm la aplica o cancela.",
        "generate_example": example,
        "lunch_modes": [format!("Fixed: {}", LUNCH_CHOICES[0]), format!("Fixed: {}", LUNCH_CHOICES[1]), "Random", "None"],
        "days": DAYS,
        "slots": SLOTS,
        "views": ["home", "generated", "manual", "dataset"],
        "routes": {
            "GET /?view=home|generated|manual|dataset": "snapshot de la vista",
            "GET|POST /faculties": "lista / alta de docentes ({Faculty, Subject})",
            "POST /faculties/delete": "pedido de borrado ({index} opcional; ausente = todos)",
            "GET|POST /rooms": "lista / alta de salas ({Room, Capacity})",
            "POST /rooms/delete": "pedido de borrado",
            "POST /generate": "genera y persiste el horario",
            "GET /generated": "horario generado actual",
            "POST /generated/delete": "pedido de borrado del horario generado",
            "GET /generated/export": "descarga del espejo .xlsx",
            "POST /manual": "alta manual ({Day, Slot, Subject, Faculty, Room})",
            "GET /manual": "entradas manuales",
            "POST /manual/delete": "pedido de borrado de entradas manuales",
            "GET /manual/export": "descarga del espejo .xlsx",
            "POST /upload?auto_delete=": "subida de horario (multipart, CSV/xlsx)",
            "GET /uploaded": "preview de la última subida",
            "POST /uploaded/delete": "pedido de borrado del preview",
            "POST /dataset/upload": "subida de dataset (multipart)",
            "GET /dataset": "dataset actual",
            "POST /dataset/delete": "pedido de borrado del dataset",
            "POST /confirm": "resuelve un pedido pendiente ({key, accept})"
        }
    });

    HttpResponse::Ok().json(help)
}
