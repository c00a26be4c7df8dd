use super::phase::Action;
use crate::error::{IntakeError, ServiceError};

/// A handled failure the UI should tell the user about.
///
/// Notices never change the phase on their own: a service failure leaves the
/// workflow exactly where it was so the action can be retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    UnreadableFile(IntakeError),
    ServiceFailure { action: Action, error: ServiceError },
}

impl Notice {
    /// Message shown to the user. Transport details stay in the logs.
    pub fn message(&self) -> String {
        match self {
            Notice::UnreadableFile(err) => format!("Não foi possível ler o arquivo: {err}."),
            Notice::ServiceFailure {
                action: Action::Validate,
                ..
            } => "Falha ao validar os produtos. Tente novamente.".to_string(),
            Notice::ServiceFailure {
                action: Action::Update,
                ..
            } => "Falha ao atualizar os produtos. Tente novamente.".to_string(),
        }
    }
}
