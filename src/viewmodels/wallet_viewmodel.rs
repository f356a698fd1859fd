// ============================================================================
// WALLET VIEWMODEL - Conectar / desconectar / eventos del provider
// ============================================================================

use crate::errors::WalletError;
use crate::models::WalletSession;
use crate::services::{WalletEvent, WalletService};
use crate::state::AppState;
use crate::viewmodels::BalanceViewModel;

pub struct WalletViewModel {
    wallet_service: WalletService,
}

impl WalletViewModel {
    pub fn new() -> Self {
        Self {
            wallet_service: WalletService::new(),
        }
    }

    /// Conectar la wallet. El error de la wallet se muestra tal cual y el
    /// botón vuelve a habilitarse.
    pub async fn connect(&self, state: &AppState) {
        if state.wallet.get_connecting() {
            log::warn!("⚠️ [WALLET] Conexión ya en curso");
            return;
        }

        state.wallet.set_connecting(true);
        state.wallet.set_connect_error(None);
        state.notify_subscribers();

        let expected_chain = state.config.chain_id.clone();
        let result = self.wallet_service.connect(&expected_chain).await;
        self.finish_connect(state, result);
    }

    /// Aplicar el resultado de un connect y rehabilitar el botón
    pub fn finish_connect(&self, state: &AppState, result: Result<WalletSession, WalletError>) {
        match result {
            Ok(session) => state.wallet.set_session(session),
            Err(e) => {
                if matches!(&e, WalletError::Provider(p) if p.is_user_rejection()) {
                    log::info!("🙅 [WALLET] El usuario rechazó la conexión");
                } else {
                    log::error!("❌ [WALLET] Error conectando: {}", e);
                }
                state.wallet.set_connect_error(Some(e.to_string()));
            }
        }

        state.wallet.set_connecting(false);
        BalanceViewModel::new().sync(state);
        state.notify_subscribers();
    }

    /// Olvidar la sesión local
    pub fn disconnect(&self, state: &AppState) {
        state.wallet.set_session(self.wallet_service.disconnect());
        state.wallet.set_connect_error(None);
        BalanceViewModel::new().sync(state);
        state.notify_subscribers();
    }

    /// Reconectar al cargar si la wallet ya autorizó el sitio
    pub async fn restore(&self, state: &AppState) {
        let Some(session) = self.wallet_service.restore().await else {
            log::info!("ℹ️ [WALLET] Sin sesión previa");
            return;
        };

        // Un connect manual que terminó antes gana
        if state.wallet.is_connected() || state.wallet.get_connecting() {
            return;
        }
        state.wallet.set_session(session);
        BalanceViewModel::new().sync(state);
        state.notify_subscribers();
    }

    /// Registrar los listeners `accountsChanged` / `chainChanged`
    pub fn watch_provider(&self, state: &AppState) {
        let state = state.clone();
        let result = self.wallet_service.watch(move |event| {
            let current = state.wallet.get_session();
            if let Some(next) = apply_wallet_event(&current, &event) {
                log::info!("🔄 [WALLET] {:?}", event);
                state.wallet.set_session(next);
                BalanceViewModel::new().sync(&state);
                state.notify_subscribers();
            }
        });

        if let Err(e) = result {
            log::warn!("⚠️ [WALLET] No se pudieron registrar listeners: {}", e);
        }
    }
}

impl Default for WalletViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Nueva sesión tras un evento del provider. None = ignorar el evento.
/// Con la sesión local desconectada los eventos no reconectan.
pub fn apply_wallet_event(current: &WalletSession, event: &WalletEvent) -> Option<WalletSession> {
    if !current.connected {
        return None;
    }

    let next = match event {
        WalletEvent::AccountsChanged(accounts) => current.with_accounts(accounts),
        WalletEvent::ChainChanged(chain) => current.with_chain(chain),
    };

    if &next == current {
        None
    } else {
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::errors::ProviderError;
    use crate::utils::parse_address;

    const ALICE: &str = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed";
    const BOB: &str = "0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359";

    fn alice_session() -> WalletSession {
        WalletSession::connected(parse_address(ALICE).unwrap(), Some("0xaa36a7".into()))
    }

    #[test]
    fn test_failed_connect_reenables_button() {
        let state = AppState::new(AppConfig::default());
        state.wallet.set_connecting(true);

        let rejected = WalletError::from(ProviderError::Rpc {
            code: Some(4001),
            message: "User rejected the request".to_string(),
        });
        WalletViewModel::new().finish_connect(&state, Err(rejected));

        assert!(!state.wallet.get_connecting());
        assert!(!state.wallet.is_connected());
        assert_eq!(state.wallet.get_connect_error().as_deref(), Some("User rejected the request"));
    }

    #[test]
    fn test_successful_connect_sets_session() {
        let state = AppState::new(AppConfig::default());
        state.wallet.set_connecting(true);

        WalletViewModel::new().finish_connect(&state, Ok(alice_session()));

        assert!(!state.wallet.get_connecting());
        assert_eq!(state.wallet.get_session().active_address(), parse_address(ALICE));
        assert_eq!(state.wallet.get_connect_error(), None);
    }

    #[test]
    fn test_disconnect_clears_session() {
        let state = AppState::new(AppConfig::default());
        state.wallet.set_session(alice_session());
        WalletViewModel::new().disconnect(&state);
        assert!(!state.wallet.is_connected());
    }

    #[test]
    fn test_account_switch() {
        let next = apply_wallet_event(&alice_session(), &WalletEvent::AccountsChanged(vec![BOB.into()]))
            .expect("account changed");
        assert_eq!(next.active_address(), parse_address(BOB));
        assert_eq!(next.chain_id.as_deref(), Some("0xaa36a7"));
    }

    #[test]
    fn test_empty_accounts_disconnects() {
        let next = apply_wallet_event(&alice_session(), &WalletEvent::AccountsChanged(vec![])).unwrap();
        assert!(!next.connected);
        assert_eq!(next.active_address(), None);
    }

    #[test]
    fn test_chain_change() {
        let next = apply_wallet_event(&alice_session(), &WalletEvent::ChainChanged("0x1".into())).unwrap();
        assert!(!next.is_on_chain("0xaa36a7"));
        assert!(next.is_on_chain("0x1"));
    }

    #[test]
    fn test_events_ignored_when_disconnected_or_unchanged() {
        let disconnected = WalletSession::disconnected();
        assert_eq!(
            apply_wallet_event(&disconnected, &WalletEvent::AccountsChanged(vec![ALICE.into()])),
            None
        );
        assert_eq!(
            apply_wallet_event(&alice_session(), &WalletEvent::AccountsChanged(vec![ALICE.into()])),
            None
        );
        assert_eq!(
            apply_wallet_event(&alice_session(), &WalletEvent::ChainChanged("0xAA36A7".into())),
            None
        );
    }
}
