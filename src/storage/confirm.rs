//! Confirmación en dos pasos para los borrados.
//!
//! El primer paso registra la intención (clave + mensaje) y se la devuelve al
//! cliente; el segundo la resuelve con `accept` true/false. La intención se
//! descarta al resolverse, de modo que reenviar la misma confirmación no
//! vuelve a aplicar la acción.

use std::collections::HashMap;

/// Borrado pendiente de confirmación. Las claves generadas (`del_fac_3`,
/// `del_all_rooms`, `del_generated`, ...) son las mismas que usaba el flujo
/// original, una por acción posible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    DeleteFaculty(usize),
    DeleteAllFaculties,
    DeleteRoom(usize),
    DeleteAllRooms,
    DeleteGenerated,
    DeleteManual,
    DeleteUploadedPreview,
    DeleteDataset,
}

impl PendingAction {
    /// Clave estable con la que el cliente confirma o cancela la acción.
    pub fn key(&self) -> String {
        match self {
            PendingAction::DeleteFaculty(i) => format!("del_fac_{}", i),
            PendingAction::DeleteAllFaculties => "del_all_fac".to_string(),
            PendingAction::DeleteRoom(i) => format!("del_room_{}", i),
            PendingAction::DeleteAllRooms => "del_all_rooms".to_string(),
            PendingAction::DeleteGenerated => "del_generated".to_string(),
            PendingAction::DeleteManual => "del_manual".to_string(),
            PendingAction::DeleteUploadedPreview => "del_preview".to_string(),
            PendingAction::DeleteDataset => "del_dataset".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
struct PendingConfirm {
    action: PendingAction,
    message: String,
}

/// Resultado de resolver una clave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// La clave no tenía intención registrada (o ya fue resuelta).
    NotPending,
    /// Había intención y el usuario la descartó; el estado queda intacto.
    Cancelled,
    /// Había intención y fue aceptada: el caller debe aplicar la acción.
    Confirmed(PendingAction),
}

/// Registro en memoria de las intenciones de borrado de la sesión.
#[derive(Debug, Default)]
pub struct ConfirmRegistry {
    pending: HashMap<String, PendingConfirm>,
}

impl ConfirmRegistry {
    pub fn new() -> Self {
        ConfirmRegistry::default()
    }

    /// Registra la intención y devuelve su clave. Una intención previa con la
    /// misma clave se reemplaza (último pedido gana).
    pub fn request(&mut self, action: PendingAction, message: impl Into<String>) -> String {
        let key = action.key();
        self.pending.insert(
            key.clone(),
            PendingConfirm {
                action,
                message: message.into(),
            },
        );
        key
    }

    pub fn is_pending(&self, key: &str) -> bool {
        self.pending.contains_key(key)
    }

    pub fn message(&self, key: &str) -> Option<&str> {
        self.pending.get(key).map(|p| p.message.as_str())
    }

    /// Resuelve y descarta la intención. Tras esta llamada la clave deja de
    /// estar pendiente, acepte o no el usuario.
    pub fn resolve(&mut self, key: &str, accept: bool) -> ResolveOutcome {
        match self.pending.remove(key) {
            None => ResolveOutcome::NotPending,
            Some(entry) if accept => ResolveOutcome::Confirmed(entry.action),
            Some(_) => ResolveOutcome::Cancelled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmar_consume_la_intencion() {
        let mut registry = ConfirmRegistry::new();
        let key = registry.request(PendingAction::DeleteAllRooms, "Delete ALL rooms?");
        assert_eq!(key, "del_all_rooms");
        assert!(registry.is_pending(&key));

        let outcome = registry.resolve(&key, true);
        assert_eq!(outcome, ResolveOutcome::Confirmed(PendingAction::DeleteAllRooms));

        // replay: la intención ya no existe, no debe reaplicarse
        assert_eq!(registry.resolve(&key, true), ResolveOutcome::NotPending);
        assert!(!registry.is_pending(&key));
    }

    #[test]
    fn test_cancelar_descarta_sin_aplicar() {
        let mut registry = ConfirmRegistry::new();
        let key = registry.request(PendingAction::DeleteFaculty(2), "Delete faculty?");
        assert_eq!(registry.resolve(&key, false), ResolveOutcome::Cancelled);
        assert_eq!(registry.resolve(&key, true), ResolveOutcome::NotPending);
    }

    #[test]
    fn test_clave_desconocida_es_noop() {
        let mut registry = ConfirmRegistry::new();
        assert_eq!(registry.resolve("del_generated", true), ResolveOutcome::NotPending);
    }
}
