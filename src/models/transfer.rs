use serde::{Deserialize, Serialize};
use crate::utils::{MSG_AWAITING_CONFIRMATION, MSG_PROCESSING, MSG_SUCCESS};

/// Datos del formulario de transferencia tal como los escribió el usuario
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransferRequest {
    pub recipient: String,
    pub amount: String,
}

impl TransferRequest {
    pub fn new(recipient: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            amount: amount.into(),
        }
    }

    /// Ambos campos tienen contenido (ignorando espacios)
    pub fn is_complete(&self) -> bool {
        !self.recipient.trim().is_empty() && !self.amount.trim().is_empty()
    }
}

/// Identidad de un envío. Cada submit recibe uno nuevo y mayor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SubmissionId(pub u64);

impl SubmissionId {
    pub fn next(self) -> Self {
        SubmissionId(self.0 + 1)
    }
}

/// Fase de la transferencia
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransferPhase {
    #[default]
    Idle,
    AwaitingConfirmation,
    Processing,
    Success { tx_hash: String },
    Failed { reason: String },
}

impl TransferPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TransferPhase::Success { .. } | TransferPhase::Failed { .. })
    }

    /// Hay una escritura en curso (el formulario se bloquea)
    pub fn is_busy(&self) -> bool {
        matches!(self, TransferPhase::AwaitingConfirmation | TransferPhase::Processing)
    }
}

/// Tono visual del mensaje de estado
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Info,
    Success,
    Error,
}

impl StatusTone {
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusTone::Info => "transfer-status transfer-status--info",
            StatusTone::Success => "transfer-status transfer-status--success",
            StatusTone::Error => "transfer-status transfer-status--error",
        }
    }
}

/// Resultado vivo de la última transferencia
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransferOutcome {
    /// Envío al que pertenece la fase actual (None antes del primer submit)
    pub submission: Option<SubmissionId>,
    pub phase: TransferPhase,
}

impl TransferOutcome {
    /// Mensaje de estado para el usuario. Vacío en Idle.
    pub fn status_message(&self) -> String {
        match &self.phase {
            TransferPhase::Idle => String::new(),
            TransferPhase::AwaitingConfirmation => MSG_AWAITING_CONFIRMATION.to_string(),
            TransferPhase::Processing => MSG_PROCESSING.to_string(),
            TransferPhase::Success { .. } => MSG_SUCCESS.to_string(),
            TransferPhase::Failed { reason } => reason.clone(),
        }
    }

    pub fn tone(&self) -> Option<StatusTone> {
        match self.phase {
            TransferPhase::Idle => None,
            TransferPhase::AwaitingConfirmation | TransferPhase::Processing => Some(StatusTone::Info),
            TransferPhase::Success { .. } => Some(StatusTone::Success),
            TransferPhase::Failed { .. } => Some(StatusTone::Error),
        }
    }

    /// ¿Este evento pertenece al envío vivo?
    pub fn is_live(&self, submission: SubmissionId) -> bool {
        self.submission == Some(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_completeness() {
        assert!(TransferRequest::new("0xabc", "1").is_complete());
        assert!(!TransferRequest::new("", "1").is_complete());
        assert!(!TransferRequest::new("0xabc", "   ").is_complete());
    }

    #[test]
    fn test_status_messages() {
        let mut outcome = TransferOutcome::default();
        assert_eq!(outcome.status_message(), "");
        assert_eq!(outcome.tone(), None);

        outcome.phase = TransferPhase::Processing;
        assert_eq!(outcome.status_message(), "Processing transaction...");
        assert!(outcome.phase.is_busy());

        outcome.phase = TransferPhase::Failed { reason: "User denied transaction signature.".into() };
        assert_eq!(outcome.status_message(), "User denied transaction signature.");
        assert_eq!(outcome.tone(), Some(StatusTone::Error));
        assert!(outcome.phase.is_terminal());
    }
}
