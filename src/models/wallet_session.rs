use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use crate::utils::parse_address;

/// Sesión de wallet conectada. Solo vive en memoria durante la pestaña.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WalletSession {
    pub address: Option<Address>,
    pub connected: bool,
    /// Chain ID en hex tal como lo reporta la wallet ("0xaa36a7")
    pub chain_id: Option<String>,
}

impl WalletSession {
    /// Sesión desconectada
    pub fn disconnected() -> Self {
        Self::default()
    }

    /// Sesión conectada a `address` en `chain_id`
    pub fn connected(address: Address, chain_id: Option<String>) -> Self {
        Self {
            address: Some(address),
            connected: true,
            chain_id: chain_id.map(|c| c.to_lowercase()),
        }
    }

    /// Aplicar un evento `accountsChanged`: lista vacía = desconectado,
    /// si no la primera cuenta válida pasa a ser la activa.
    pub fn with_accounts(&self, accounts: &[String]) -> Self {
        match accounts.iter().find_map(|a| parse_address(a)) {
            Some(address) => Self::connected(address, self.chain_id.clone()),
            None => Self::disconnected(),
        }
    }

    /// Aplicar un evento `chainChanged`
    pub fn with_chain(&self, chain_id: &str) -> Self {
        Self {
            chain_id: Some(chain_id.to_lowercase()),
            ..self.clone()
        }
    }

    /// ¿La wallet está en la red esperada?
    pub fn is_on_chain(&self, expected: &str) -> bool {
        self.chain_id
            .as_deref()
            .map(|c| c.eq_ignore_ascii_case(expected))
            .unwrap_or(false)
    }

    /// Dirección solo si la sesión está conectada
    pub fn active_address(&self) -> Option<Address> {
        if self.connected {
            self.address
        } else {
            None
        }
    }
}
