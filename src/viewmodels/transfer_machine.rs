// ============================================================================
// TRANSFER MACHINE - Máquina de estados de la transferencia (pura)
// ============================================================================
// reduce(outcome, evento) -> (nuevo outcome, efectos). Sin DOM ni timers:
// el TransferViewModel ejecuta los efectos.
// ============================================================================

use alloy_primitives::U256;
use crate::models::{SubmissionId, TransferOutcome, TransferPhase, TransferRequest};
use crate::utils::{
    parse_units, FAILURE_RESET_MS, MSG_FILL_ALL_FIELDS, MSG_TRANSFER_FAILED, SUCCESS_RESET_MS,
};

/// Eventos que mueven la máquina
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferEvent {
    /// El usuario pulsó "Send Tokens"
    Submit { submission: SubmissionId, request: TransferRequest },
    /// La wallet recibió la solicitud y está pendiente
    WritePending { submission: SubmissionId },
    /// La wallet devolvió (o no) un hash de transacción
    WriteSucceeded { submission: SubmissionId, tx_hash: Option<String> },
    /// La escritura falló; mensaje del colaborador si lo hay
    WriteFailed { submission: SubmissionId, message: Option<String> },
    /// Venció el timer de auto-reset
    ResetElapsed { submission: SubmissionId },
}

/// Efectos a ejecutar fuera del reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferEffect {
    CancelReset,
    SendTransfer { submission: SubmissionId, recipient: String, amount: U256 },
    ClearForm,
    RefetchBalance,
    ScheduleReset { submission: SubmissionId, after_ms: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub outcome: TransferOutcome,
    pub effects: Vec<TransferEffect>,
}

impl Transition {
    fn unchanged(current: &TransferOutcome) -> Self {
        Self { outcome: current.clone(), effects: Vec::new() }
    }

    fn to(submission: SubmissionId, phase: TransferPhase, effects: Vec<TransferEffect>) -> Self {
        Self {
            outcome: TransferOutcome { submission: Some(submission), phase },
            effects,
        }
    }
}

/// Reducer de la transferencia. `decimals` es el exponente del token.
///
/// Los eventos de envíos que no son el vivo se ignoran; un Submit siempre
/// reemplaza el envío vivo y cancela su timer.
pub fn reduce(current: &TransferOutcome, event: &TransferEvent, decimals: u8) -> Transition {
    match event {
        TransferEvent::Submit { submission, request } => {
            if !request.is_complete() {
                return Transition::to(
                    *submission,
                    TransferPhase::Failed { reason: MSG_FILL_ALL_FIELDS.to_string() },
                    vec![TransferEffect::CancelReset],
                );
            }

            match parse_units(&request.amount, decimals) {
                Ok(amount) => Transition::to(
                    *submission,
                    TransferPhase::AwaitingConfirmation,
                    vec![
                        TransferEffect::CancelReset,
                        TransferEffect::SendTransfer {
                            submission: *submission,
                            recipient: request.recipient.trim().to_string(),
                            amount,
                        },
                    ],
                ),
                Err(e) => Transition::to(
                    *submission,
                    TransferPhase::Failed { reason: e.to_string() },
                    vec![TransferEffect::CancelReset],
                ),
            }
        }

        TransferEvent::WritePending { submission } => {
            if current.is_live(*submission) && current.phase == TransferPhase::AwaitingConfirmation {
                Transition::to(*submission, TransferPhase::Processing, Vec::new())
            } else {
                Transition::unchanged(current)
            }
        }

        TransferEvent::WriteSucceeded { submission, tx_hash } => {
            if !current.is_live(*submission) || !current.phase.is_busy() {
                return Transition::unchanged(current);
            }
            match tx_hash.as_deref().map(str::trim).filter(|h| !h.is_empty()) {
                Some(hash) => Transition::to(
                    *submission,
                    TransferPhase::Success { tx_hash: hash.to_string() },
                    vec![
                        TransferEffect::ClearForm,
                        TransferEffect::RefetchBalance,
                        TransferEffect::ScheduleReset { submission: *submission, after_ms: SUCCESS_RESET_MS },
                    ],
                ),
                None => failed(*submission, None),
            }
        }

        TransferEvent::WriteFailed { submission, message } => {
            if !current.is_live(*submission) || !current.phase.is_busy() {
                return Transition::unchanged(current);
            }
            failed(*submission, message.as_deref())
        }

        TransferEvent::ResetElapsed { submission } => {
            if current.is_live(*submission) && current.phase.is_terminal() {
                Transition::to(*submission, TransferPhase::Idle, Vec::new())
            } else {
                Transition::unchanged(current)
            }
        }
    }
}

fn failed(submission: SubmissionId, message: Option<&str>) -> Transition {
    let reason = message
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or(MSG_TRANSFER_FAILED)
        .to_string();
    Transition::to(
        submission,
        TransferPhase::Failed { reason },
        vec![TransferEffect::ScheduleReset { submission, after_ms: FAILURE_RESET_MS }],
    )
}

/// Máquina con estado: guarda el outcome vivo y asigna ids de envío
#[derive(Debug, Clone)]
pub struct TransferMachine {
    decimals: u8,
    outcome: TransferOutcome,
    last_submission: SubmissionId,
}

impl TransferMachine {
    pub fn new(decimals: u8) -> Self {
        Self {
            decimals,
            outcome: TransferOutcome::default(),
            last_submission: SubmissionId(0),
        }
    }

    pub fn outcome(&self) -> &TransferOutcome {
        &self.outcome
    }

    /// Registrar un nuevo envío. Devuelve su id y los efectos.
    pub fn submit(&mut self, request: TransferRequest) -> (SubmissionId, Vec<TransferEffect>) {
        self.last_submission = self.last_submission.next();
        let submission = self.last_submission;
        let effects = self.dispatch(TransferEvent::Submit { submission, request });
        (submission, effects)
    }

    /// Aplicar un evento y devolver los efectos resultantes
    pub fn dispatch(&mut self, event: TransferEvent) -> Vec<TransferEffect> {
        let transition = reduce(&self.outcome, &event, self.decimals);
        if transition.outcome != self.outcome {
            log::debug!("🔁 [TRANSFER] {:?} -> {:?}", self.outcome.phase, transition.outcome.phase);
        }
        self.outcome = transition.outcome;
        transition.effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::MSG_SUCCESS;

    const RECIPIENT: &str = "0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

    fn machine() -> TransferMachine {
        TransferMachine::new(18)
    }

    fn sends(effects: &[TransferEffect]) -> usize {
        effects.iter().filter(|e| matches!(e, TransferEffect::SendTransfer { .. })).count()
    }

    #[test]
    fn test_empty_fields_never_send() {
        for (recipient, amount) in [("", "1"), (RECIPIENT, ""), ("", ""), ("  ", " ")] {
            let mut m = machine();
            let (_, effects) = m.submit(TransferRequest::new(recipient, amount));
            assert_eq!(sends(&effects), 0);
            assert_eq!(m.outcome().status_message(), "Please fill in all fields");
            assert!(!effects.iter().any(|e| matches!(e, TransferEffect::ScheduleReset { .. })));
        }
    }

    #[test]
    fn test_amount_converted_before_write() {
        let mut m = machine();
        let (submission, effects) = m.submit(TransferRequest::new(RECIPIENT, "1.5"));
        assert_eq!(
            effects,
            vec![
                TransferEffect::CancelReset,
                TransferEffect::SendTransfer {
                    submission,
                    recipient: RECIPIENT.to_string(),
                    amount: U256::from(1_500_000_000_000_000_000u64),
                },
            ]
        );
        assert_eq!(m.outcome().status_message(), "Awaiting confirmation...");
    }

    #[test]
    fn test_invalid_amount_is_local_failure() {
        let mut m = machine();
        let (_, effects) = m.submit(TransferRequest::new(RECIPIENT, "abc"));
        assert_eq!(sends(&effects), 0);
        assert_eq!(m.outcome().status_message(), "Invalid amount: unexpected character 'a'");
    }

    #[test]
    fn test_success_flow_and_reset() {
        let mut m = machine();
        let (id, _) = m.submit(TransferRequest::new(RECIPIENT, "2"));

        assert!(m.dispatch(TransferEvent::WritePending { submission: id }).is_empty());
        assert_eq!(m.outcome().status_message(), "Processing transaction...");

        let effects = m.dispatch(TransferEvent::WriteSucceeded {
            submission: id,
            tx_hash: Some("0xfeed".into()),
        });
        assert_eq!(
            effects,
            vec![
                TransferEffect::ClearForm,
                TransferEffect::RefetchBalance,
                TransferEffect::ScheduleReset { submission: id, after_ms: 3000 },
            ]
        );
        assert_eq!(m.outcome().status_message(), MSG_SUCCESS);
        assert_eq!(m.outcome().phase, TransferPhase::Success { tx_hash: "0xfeed".into() });

        // Un segundo éxito duplicado no vuelve a pedir el balance
        let again = m.dispatch(TransferEvent::WriteSucceeded {
            submission: id,
            tx_hash: Some("0xfeed".into()),
        });
        assert!(again.is_empty());

        m.dispatch(TransferEvent::ResetElapsed { submission: id });
        assert_eq!(m.outcome().phase, TransferPhase::Idle);
        assert_eq!(m.outcome().status_message(), "");
    }

    #[test]
    fn test_failure_uses_collaborator_message() {
        let mut m = machine();
        let (id, _) = m.submit(TransferRequest::new(RECIPIENT, "1"));
        m.dispatch(TransferEvent::WritePending { submission: id });
        let effects = m.dispatch(TransferEvent::WriteFailed {
            submission: id,
            message: Some("User denied transaction signature.".into()),
        });
        assert_eq!(effects, vec![TransferEffect::ScheduleReset { submission: id, after_ms: 5000 }]);
        assert_eq!(m.outcome().status_message(), "User denied transaction signature.");

        m.dispatch(TransferEvent::ResetElapsed { submission: id });
        assert_eq!(m.outcome().phase, TransferPhase::Idle);
    }

    #[test]
    fn test_failure_fallback_message() {
        for message in [None, Some(String::new()), Some("   ".to_string())] {
            let mut m = machine();
            let (id, _) = m.submit(TransferRequest::new(RECIPIENT, "1"));
            m.dispatch(TransferEvent::WriteFailed { submission: id, message });
            assert_eq!(m.outcome().status_message(), "Transaction failed");
        }
    }

    #[test]
    fn test_success_without_hash_is_failure() {
        let mut m = machine();
        let (id, _) = m.submit(TransferRequest::new(RECIPIENT, "1"));
        let effects = m.dispatch(TransferEvent::WriteSucceeded { submission: id, tx_hash: None });
        assert_eq!(effects, vec![TransferEffect::ScheduleReset { submission: id, after_ms: 5000 }]);
        assert!(!effects.contains(&TransferEffect::RefetchBalance));
        assert_eq!(m.outcome().status_message(), "Transaction failed");
    }

    #[test]
    fn test_new_submission_clears_previous_terminal_state() {
        let mut m = machine();
        let (first, _) = m.submit(TransferRequest::new(RECIPIENT, "1"));
        m.dispatch(TransferEvent::WriteFailed { submission: first, message: Some("reverted".into()) });

        let (second, effects) = m.submit(TransferRequest::new(RECIPIENT, "2"));
        assert_eq!(effects[0], TransferEffect::CancelReset);
        assert_eq!(m.outcome().status_message(), "Awaiting confirmation...");

        // El timer del primer envío ya no puede pisar al segundo
        m.dispatch(TransferEvent::ResetElapsed { submission: first });
        assert_eq!(m.outcome().submission, Some(second));
        assert_eq!(m.outcome().phase, TransferPhase::AwaitingConfirmation);
    }

    #[test]
    fn test_latest_submission_wins_regardless_of_resolution_order() {
        // Segundo resuelve primero, luego llega el primero
        let mut m = machine();
        let (first, _) = m.submit(TransferRequest::new(RECIPIENT, "1"));
        m.dispatch(TransferEvent::WritePending { submission: first });
        let (second, _) = m.submit(TransferRequest::new(RECIPIENT, "2"));
        m.dispatch(TransferEvent::WritePending { submission: second });

        m.dispatch(TransferEvent::WriteSucceeded { submission: second, tx_hash: Some("0x02".into()) });
        let stale = m.dispatch(TransferEvent::WriteFailed { submission: first, message: Some("boom".into()) });
        assert!(stale.is_empty());
        assert_eq!(m.outcome().phase, TransferPhase::Success { tx_hash: "0x02".into() });

        // Orden inverso: el primero resuelve primero
        let mut m = machine();
        let (first, _) = m.submit(TransferRequest::new(RECIPIENT, "1"));
        m.dispatch(TransferEvent::WritePending { submission: first });
        let (second, _) = m.submit(TransferRequest::new(RECIPIENT, "2"));
        m.dispatch(TransferEvent::WritePending { submission: second });

        let stale = m.dispatch(TransferEvent::WriteSucceeded { submission: first, tx_hash: Some("0x01".into()) });
        assert!(stale.is_empty());
        m.dispatch(TransferEvent::WriteFailed { submission: second, message: Some("boom".into()) });
        assert_eq!(m.outcome().status_message(), "boom");
    }

    #[test]
    fn test_reset_ignored_while_processing() {
        let mut m = machine();
        let (id, _) = m.submit(TransferRequest::new(RECIPIENT, "1"));
        m.dispatch(TransferEvent::WritePending { submission: id });
        m.dispatch(TransferEvent::ResetElapsed { submission: id });
        assert_eq!(m.outcome().phase, TransferPhase::Processing);
    }

    #[test]
    fn test_reduce_is_pure() {
        let outcome = TransferOutcome::default();
        let event = TransferEvent::Submit {
            submission: SubmissionId(7),
            request: TransferRequest::new(RECIPIENT, "1"),
        };
        assert_eq!(reduce(&outcome, &event, 18), reduce(&outcome, &event, 18));
        assert_eq!(outcome, TransferOutcome::default());
    }
}
