// ============================================================================
// BALANCE VIEWMODEL - Lectura del balance FROST
// ============================================================================
// Solo lanza `balanceOf` cuando el QueryCache lo pide: re-renderizar con la
// misma (contrato, cuenta) no genera llamadas.
// ============================================================================

use wasm_bindgen_futures::spawn_local;
use crate::services::{BalanceQueryKey, ContractClient};
use crate::state::AppState;

pub struct BalanceViewModel;

impl BalanceViewModel {
    pub fn new() -> Self {
        Self
    }

    /// Clave de la consulta para el estado actual (None = no hay nada que leer)
    pub fn query_key(state: &AppState) -> Option<BalanceQueryKey> {
        let owner = state.wallet.get_session().active_address()?;
        let contract = state.config.contract().ok()?;
        Some(BalanceQueryKey { contract, owner })
    }

    /// Sincronizar el caché con la sesión actual y leer si hace falta
    pub fn sync(&self, state: &AppState) {
        let key = Self::query_key(state);
        let ticket = state.balance.cache.borrow_mut().plan_fetch(key);
        let Some(ticket) = ticket else {
            return;
        };

        log::info!("💰 [BALANCE] Leyendo balance de {}", ticket.key.owner);
        state.notify_subscribers();

        let state = state.clone();
        spawn_local(async move {
            let client = ContractClient::new(ticket.key.contract);
            let result = client
                .read_balance(ticket.key.owner)
                .await
                .map_err(|e| e.to_string());

            if let Err(e) = &result {
                log::warn!("⚠️ [BALANCE] Error leyendo balance: {}", e);
            }

            let applied = state.balance.cache.borrow_mut().resolve(ticket, result);
            if !applied {
                return;
            }

            let needs_refetch = state.balance.cache.borrow().needs_refetch();
            if needs_refetch {
                BalanceViewModel::new().sync(&state);
            }
            state.notify_subscribers();
        });
    }

    /// Invalidar y volver a leer (después de una transferencia)
    pub fn refetch(&self, state: &AppState) {
        state.balance.cache.borrow_mut().invalidate();
        self.sync(state);
    }
}

impl Default for BalanceViewModel {
    fn default() -> Self {
        Self::new()
    }
}
