// ============================================================================
// WALLET SERVICE - Conexión de la wallet (stateless)
// ============================================================================
// connect / restore / disconnect + eventos del provider. No guarda estado:
// el WalletViewModel actualiza WalletState con lo que devuelve.
// ============================================================================

use std::cell::Cell;
use serde_json::{json, Value};
use wasm_bindgen::{JsCast, JsValue};
use crate::errors::{ProviderError, WalletError};
use crate::models::WalletSession;
use crate::services::ethereum_provider::EthereumProvider;
use crate::utils::parse_address;

thread_local! {
    // Los listeners del provider se registran una sola vez por proceso
    static LISTENERS_REGISTERED: Cell<bool> = Cell::new(false);
}

/// Eventos que la wallet empuja sin que los pidamos
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletEvent {
    AccountsChanged(Vec<String>),
    ChainChanged(String),
}

#[derive(Clone, Default)]
pub struct WalletService;

impl WalletService {
    pub fn new() -> Self {
        Self
    }

    /// Conectar: cambiar a la red esperada y pedir cuentas.
    /// Cualquier error de la wallet se devuelve con su mensaje original.
    pub async fn connect(&self, expected_chain: &str) -> Result<WalletSession, WalletError> {
        let provider = EthereumProvider::detect()?;

        log::info!("🔗 [WALLET] Solicitando cambio a la red {}", expected_chain);
        provider
            .request("wallet_switchEthereumChain", json!([{ "chainId": expected_chain }]))
            .await?;

        let accounts = provider.request_json("eth_requestAccounts", Value::Null).await?;
        let address = first_account(&accounts)?;

        let chain_id = read_chain_id(&provider).await;
        log::info!("✅ [WALLET] Conectado {} en {:?}", address, chain_id);
        Ok(WalletSession::connected(address, chain_id))
    }

    /// Reconectar sin prompt si la wallet ya autorizó este sitio (`eth_accounts`)
    pub async fn restore(&self) -> Option<WalletSession> {
        let provider = EthereumProvider::detect().ok()?;
        let accounts = provider.request_json("eth_accounts", Value::Null).await.ok()?;
        let address = first_account(&accounts).ok()?;
        let chain_id = read_chain_id(&provider).await;
        log::info!("♻️ [WALLET] Sesión restaurada para {}", address);
        Some(WalletSession::connected(address, chain_id))
    }

    /// Desconectar. Las wallets inyectadas no exponen un disconnect remoto:
    /// solo se olvida la sesión local.
    pub fn disconnect(&self) -> WalletSession {
        log::info!("👋 [WALLET] Desconectando sesión local");
        WalletSession::disconnected()
    }

    /// Escuchar `accountsChanged` y `chainChanged`. Solo registra una vez.
    pub fn watch<F>(&self, handler: F) -> Result<(), ProviderError>
    where
        F: Fn(WalletEvent) + Clone + 'static,
    {
        if LISTENERS_REGISTERED.with(|flag| flag.replace(true)) {
            log::warn!("⚠️ [WALLET] Listeners ya registrados, ignorando llamada duplicada");
            return Ok(());
        }

        let provider = match EthereumProvider::detect() {
            Ok(p) => p,
            Err(e) => {
                LISTENERS_REGISTERED.with(|flag| flag.set(false));
                return Err(e);
            }
        };

        let on_accounts = handler.clone();
        provider.on("accountsChanged", move |value: JsValue| {
            on_accounts(WalletEvent::AccountsChanged(accounts_from_js(&value)));
        })?;

        provider.on("chainChanged", move |value: JsValue| {
            if let Some(chain) = value.as_string() {
                handler(WalletEvent::ChainChanged(chain));
            }
        })?;

        log::info!("✅ [WALLET] Listeners del provider registrados");
        Ok(())
    }
}

async fn read_chain_id(provider: &EthereumProvider) -> Option<String> {
    match provider.request_json("eth_chainId", Value::Null).await {
        Ok(Value::String(chain)) => Some(chain),
        Ok(other) => {
            log::warn!("⚠️ [WALLET] eth_chainId inesperado: {}", other);
            None
        }
        Err(e) => {
            log::warn!("⚠️ [WALLET] No se pudo leer eth_chainId: {}", e);
            None
        }
    }
}

/// Primera cuenta de una respuesta `eth_requestAccounts` / `eth_accounts`
pub fn first_account(accounts: &Value) -> Result<alloy_primitives::Address, WalletError> {
    let list = accounts
        .as_array()
        .ok_or_else(|| ProviderError::Malformed(format!("expected account list, got {}", accounts)))?;
    let first = list
        .first()
        .and_then(Value::as_str)
        .ok_or(WalletError::NoAccounts)?;
    parse_address(first).ok_or_else(|| WalletError::InvalidAccount(first.to_string()))
}

fn accounts_from_js(value: &JsValue) -> Vec<String> {
    value
        .dyn_ref::<js_sys::Array>()
        .map(|array| array.iter().filter_map(|a| a.as_string()).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_account() {
        let accounts = json!(["0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed", "0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359"]);
        let address = first_account(&accounts).unwrap();
        assert_eq!(address, parse_address("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap());
    }

    #[test]
    fn test_first_account_errors() {
        assert_eq!(first_account(&json!([])), Err(WalletError::NoAccounts));
        assert_eq!(
            first_account(&json!(["nope"])),
            Err(WalletError::InvalidAccount("nope".to_string()))
        );
        assert!(matches!(
            first_account(&json!({"accounts": []})),
            Err(WalletError::Provider(ProviderError::Malformed(_)))
        ));
    }
}
