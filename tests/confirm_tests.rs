// El flujo de borrado en dos pasos debe poder probarse sin montar el server:
// registry + apply_pending_action son el comando completo.

use tempfile::TempDir;

use timelyflow::models::FacultyRecord;
use timelyflow::storage::{
    apply_pending_action,
    confirm::{ConfirmRegistry, PendingAction, ResolveOutcome},
    load_collection, save_collection, DataPaths,
};

fn fac(name: &str, subject: &str) -> FacultyRecord {
    FacultyRecord {
        faculty: name.to_string(),
        subject: subject.to_string(),
    }
}

fn seeded_paths(dir: &TempDir) -> DataPaths {
    let paths = DataPaths::new(dir.path());
    save_collection(&paths.faculties(), &[fac("A", "Math"), fac("B", "Phys")])
        .expect("debe guardar");
    paths
}

#[test]
fn test_pedir_sin_confirmar_no_muta() {
    let dir = TempDir::new().expect("tempdir");
    let paths = seeded_paths(&dir);
    let mut registry = ConfirmRegistry::new();

    let key = registry.request(PendingAction::DeleteAllFaculties, "Delete ALL faculties?");
    assert!(registry.is_pending(&key));
    assert_eq!(registry.message(&key), Some("Delete ALL faculties?"));

    // nada se aplicó todavía
    let faculties: Vec<FacultyRecord> = load_collection(&paths.faculties()).expect("debe cargar");
    assert_eq!(faculties.len(), 2);
}

#[test]
fn test_confirmar_aplica_exactamente_una_vez() {
    let dir = TempDir::new().expect("tempdir");
    let paths = seeded_paths(&dir);
    let mut registry = ConfirmRegistry::new();

    let key = registry.request(PendingAction::DeleteFaculty(0), "Delete faculty 'A'?");

    match registry.resolve(&key, true) {
        ResolveOutcome::Confirmed(action) => {
            apply_pending_action(&paths, &action).expect("debe aplicar");
        }
        other => panic!("esperaba Confirmed, fue {:?}", other),
    }
    let faculties: Vec<FacultyRecord> = load_collection(&paths.faculties()).expect("debe cargar");
    assert_eq!(faculties, vec![fac("B", "Phys")]);

    // replay de la misma clave: la intención ya fue consumida
    assert_eq!(registry.resolve(&key, true), ResolveOutcome::NotPending);
    let faculties: Vec<FacultyRecord> = load_collection(&paths.faculties()).expect("debe cargar");
    assert_eq!(faculties, vec![fac("B", "Phys")]);
}

#[test]
fn test_cancelar_deja_el_estado_intacto() {
    let dir = TempDir::new().expect("tempdir");
    let paths = seeded_paths(&dir);
    let mut registry = ConfirmRegistry::new();

    let key = registry.request(PendingAction::DeleteAllFaculties, "Delete ALL faculties?");
    assert_eq!(registry.resolve(&key, false), ResolveOutcome::Cancelled);
    assert!(!registry.is_pending(&key));

    let faculties: Vec<FacultyRecord> = load_collection(&paths.faculties()).expect("debe cargar");
    assert_eq!(faculties.len(), 2);
}

#[test]
fn test_clave_desconocida_no_hace_nada() {
    let mut registry = ConfirmRegistry::new();
    assert_eq!(registry.resolve("del_dataset", true), ResolveOutcome::NotPending);
    assert_eq!(registry.resolve("", false), ResolveOutcome::NotPending);
}

#[test]
fn test_claves_estables_por_accion() {
    assert_eq!(PendingAction::DeleteFaculty(3).key(), "del_fac_3");
    assert_eq!(PendingAction::DeleteAllFaculties.key(), "del_all_fac");
    assert_eq!(PendingAction::DeleteRoom(0).key(), "del_room_0");
    assert_eq!(PendingAction::DeleteAllRooms.key(), "del_all_rooms");
    assert_eq!(PendingAction::DeleteGenerated.key(), "del_generated");
    assert_eq!(PendingAction::DeleteManual.key(), "del_manual");
    assert_eq!(PendingAction::DeleteUploadedPreview.key(), "del_preview");
    assert_eq!(PendingAction::DeleteDataset.key(), "del_dataset");
}
