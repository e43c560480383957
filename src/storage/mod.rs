//! Persistencia de colecciones en ficheros JSON.
//!
//! Cada colección vive en un fichero propio bajo el directorio de datos y se
//! reescribe completa tras cada mutación (last write wins, sin bloqueo). La
//! carga estricta distingue `Absent` de `Corrupt` para que el caller elija su
//! política de recuperación; `load_or_empty` aplica la política histórica
//! (cualquiera de los dos casos se trata como colección vacía).

pub mod confirm;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::{FacultyRecord, RoomRecord};
use confirm::PendingAction;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("data file not found: {0}")]
    Absent(PathBuf),
    #[error("data file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Carga estricta de un fichero JSON con un array de objetos.
/// Un fichero existente pero vacío cuenta como colección vacía.
pub fn load_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    if !path.exists() {
        return Err(StoreError::Absent(path.to_path_buf()));
    }
    let contents = fs::read_to_string(path).map_err(|e| StoreError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(&contents).map_err(|e| StoreError::Corrupt {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Política de recuperación del flujo original: fichero ausente o corrupto se
/// trata como colección vacía. El caso corrupto queda registrado en el log,
/// porque el contenido previo se pierde en la siguiente escritura.
pub fn load_or_empty<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    match load_collection(path) {
        Ok(v) => v,
        Err(StoreError::Absent(_)) => Vec::new(),
        Err(e) => {
            log::warn!("{}; continuing with an empty collection", e);
            Vec::new()
        }
    }
}

/// Reescritura completa del fichero (pretty-printed, como los JSON históricos).
pub fn save_collection<T: Serialize>(path: &Path, data: &[T]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;
        }
    }
    let text = serde_json::to_string_pretty(data).map_err(|e| StoreError::Serialize {
        path: path.to_path_buf(),
        source: e,
    })?;
    fs::write(path, text).map_err(|e| StoreError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Borrado por posición. Fuera de rango es un no-op y devuelve `None`.
pub fn remove_at<T>(list: &mut Vec<T>, index: usize) -> Option<T> {
    if index < list.len() {
        Some(list.remove(index))
    } else {
        None
    }
}

/// Elimina un fichero si existe; nunca falla hacia el caller.
pub fn safe_unlink(path: &Path) -> bool {
    fs::remove_file(path).is_ok()
}

/// Rutas de todos los ficheros de datos del servicio.
#[derive(Debug, Clone)]
pub struct DataPaths {
    base: PathBuf,
}

impl DataPaths {
    pub fn new<P: Into<PathBuf>>(base: P) -> Self {
        DataPaths { base: base.into() }
    }

    /// Resuelve el directorio de datos desde `TIMELYFLOW_DATA_DIR`,
    /// con `data` como valor por defecto.
    pub fn from_env() -> Self {
        let base = std::env::var("TIMELYFLOW_DATA_DIR").unwrap_or_else(|_| "data".to_string());
        DataPaths::new(base)
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn faculties(&self) -> PathBuf {
        self.base.join("faculties.json")
    }

    pub fn rooms(&self) -> PathBuf {
        self.base.join("rooms.json")
    }

    pub fn generated(&self) -> PathBuf {
        self.base.join("generated_timetable.json")
    }

    pub fn manual(&self) -> PathBuf {
        self.base.join("manual_entries.json")
    }

    pub fn uploaded(&self) -> PathBuf {
        self.base.join("uploaded_timetable.json")
    }

    pub fn dataset(&self) -> PathBuf {
        self.base.join("dataset.json")
    }

    pub fn generated_xlsx(&self) -> PathBuf {
        self.base.join("generated_timetable.xlsx")
    }

    pub fn manual_xlsx(&self) -> PathBuf {
        self.base.join("manual_timetable.xlsx")
    }

    /// Copia archivada de una subida, con marca de tiempo en el nombre para
    /// no pisar subidas anteriores del mismo fichero.
    pub fn archived_upload(&self, original_name: &str) -> PathBuf {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        self.base.join(format!("uploaded_{}_{}", stamp, original_name))
    }
}

/// Aplica una acción de borrado ya confirmada contra el estado persistido.
/// Devuelve el mensaje de resultado que el handler muestra al usuario.
///
/// El contrato replica el flujo original: borrar todos los registros de un
/// pool reescribe el fichero con `[]`, mientras que borrar un horario o un
/// dataset elimina el fichero (y su espejo .xlsx cuando existe).
pub fn apply_pending_action(
    paths: &DataPaths,
    action: &PendingAction,
) -> Result<&'static str, StoreError> {
    match action {
        PendingAction::DeleteFaculty(index) => {
            let path = paths.faculties();
            let mut faculties: Vec<FacultyRecord> = load_or_empty(&path);
            // fuera de rango: se persiste la colección intacta
            remove_at(&mut faculties, *index);
            save_collection(&path, &faculties)?;
            Ok("faculty deleted")
        }
        PendingAction::DeleteAllFaculties => {
            save_collection(&paths.faculties(), &Vec::<FacultyRecord>::new())?;
            Ok("all faculties deleted")
        }
        PendingAction::DeleteRoom(index) => {
            let path = paths.rooms();
            let mut rooms: Vec<RoomRecord> = load_or_empty(&path);
            remove_at(&mut rooms, *index);
            save_collection(&path, &rooms)?;
            Ok("room deleted")
        }
        PendingAction::DeleteAllRooms => {
            save_collection(&paths.rooms(), &Vec::<RoomRecord>::new())?;
            Ok("all rooms deleted")
        }
        PendingAction::DeleteGenerated => {
            safe_unlink(&paths.generated());
            safe_unlink(&paths.generated_xlsx());
            Ok("generated timetable deleted")
        }
        PendingAction::DeleteManual => {
            safe_unlink(&paths.manual());
            safe_unlink(&paths.manual_xlsx());
            Ok("manual entries deleted")
        }
        PendingAction::DeleteUploadedPreview => {
            safe_unlink(&paths.uploaded());
            Ok("uploaded preview deleted")
        }
        PendingAction::DeleteDataset => {
            safe_unlink(&paths.dataset());
            Ok("dataset deleted")
        }
    }
}
