// ============================================================================
// TRANSFER VIEWMODEL - Ejecuta los efectos de la máquina de transferencia
// ============================================================================
// La TransferMachine decide; aquí se hacen las llamadas a la wallet, el
// vaciado del formulario, el refetch del balance y los timers de reset.
// Nunca se mantiene un borrow de RefCell a través de un await.
// ============================================================================

use alloy_primitives::U256;
use wasm_bindgen_futures::spawn_local;
use crate::errors::ContractError;
use crate::models::SubmissionId;
use crate::services::ContractClient;
use crate::state::AppState;
use crate::viewmodels::transfer_machine::{TransferEffect, TransferEvent};
use crate::viewmodels::BalanceViewModel;

pub struct TransferViewModel;

impl TransferViewModel {
    pub fn new() -> Self {
        Self
    }

    /// "Send Tokens": registrar un envío nuevo con el formulario actual
    pub fn submit(&self, state: &AppState) {
        let request = state.transfer.get_request();
        let (submission, effects) = state.transfer.machine.borrow_mut().submit(request);
        log::info!("📝 [TRANSFER] Envío #{}", submission.0);

        self.run_effects(state, effects);
        state.notify_subscribers();
    }

    /// Aplicar un evento a la máquina y ejecutar sus efectos
    pub fn dispatch(&self, state: &AppState, event: TransferEvent) {
        let effects = state.transfer.machine.borrow_mut().dispatch(event);
        self.run_effects(state, effects);
        state.notify_subscribers();
    }

    fn run_effects(&self, state: &AppState, effects: Vec<TransferEffect>) {
        for effect in effects {
            match effect {
                TransferEffect::CancelReset => state.transfer.cancel_reset(),
                TransferEffect::SendTransfer { submission, recipient, amount } => {
                    self.send(state, submission, recipient, amount);
                }
                TransferEffect::ClearForm => state.transfer.clear_form(),
                TransferEffect::RefetchBalance => BalanceViewModel::new().refetch(state),
                TransferEffect::ScheduleReset { submission, after_ms } => {
                    let timer_state = state.clone();
                    state.transfer.schedule_reset(
                        after_ms,
                        Box::new(move || {
                            TransferViewModel::new()
                                .dispatch(&timer_state, TransferEvent::ResetElapsed { submission });
                        }),
                    );
                }
            }
        }
    }

    fn send(&self, state: &AppState, submission: SubmissionId, recipient: String, amount: U256) {
        let state = state.clone();
        spawn_local(async move {
            let vm = TransferViewModel::new();

            let from = state.wallet.get_session().active_address();
            let client = ContractClient::from_config(&state.config);
            let (from, client) = match (from, client) {
                (Some(from), Ok(client)) => (from, client),
                (None, _) => {
                    vm.fail(&state, submission, ContractError::NotConnected);
                    return;
                }
                (_, Err(e)) => {
                    vm.fail(&state, submission, e);
                    return;
                }
            };

            vm.dispatch(&state, TransferEvent::WritePending { submission });

            match client.write_transfer(from, &recipient, amount).await {
                Ok(tx_hash) => {
                    log::info!("✅ [TRANSFER] Envío #{} aceptado: {:?}", submission.0, tx_hash);
                    vm.dispatch(&state, TransferEvent::WriteSucceeded { submission, tx_hash });
                }
                Err(e) => vm.fail(&state, submission, e),
            }
        });
    }

    fn fail(&self, state: &AppState, submission: SubmissionId, error: ContractError) {
        log::error!("❌ [TRANSFER] Envío #{} falló: {}", submission.0, error);
        self.dispatch(
            state,
            TransferEvent::WriteFailed { submission, message: Some(error.to_string()) },
        );
    }
}

impl Default for TransferViewModel {
    fn default() -> Self {
        Self::new()
    }
}
