// ============================================================================
// ERRORES - Tipos de error por colaborador
// ============================================================================
// Los mensajes Display son los que se muestran al usuario tal cual.
// ============================================================================

use thiserror::Error;

/// Errores del provider EIP-1193 inyectado (`window.ethereum`)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("No injected wallet found. Install MetaMask or another EIP-1193 wallet.")]
    NotInstalled,
    /// Error devuelto por la wallet (`{ code, message }`), mensaje verbatim
    #[error("{message}")]
    Rpc { code: Option<i64>, message: String },
    #[error("Unexpected wallet response: {0}")]
    Malformed(String),
}

impl ProviderError {
    /// Código EIP-1193 4001: el usuario rechazó la solicitud
    pub fn is_user_rejection(&self) -> bool {
        matches!(self, ProviderError::Rpc { code: Some(4001), .. })
    }
}

/// Errores de conexión de la wallet
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error("The wallet did not return any account")]
    NoAccounts,
    #[error("Invalid account address: {0}")]
    InvalidAccount(String),
}

/// Errores de lectura/escritura contra el contrato
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    #[error("Contract address is not configured")]
    NotConfigured,
    #[error("Invalid contract address: {0}")]
    InvalidContract(String),
    #[error("Invalid recipient address: {0}")]
    InvalidRecipient(String),
    #[error("Wallet is not connected")]
    NotConnected,
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error("Could not decode contract response: {0}")]
    Decode(String),
}

/// Errores de conversión de montos decimales a unidades mínimas
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitsError {
    #[error("Invalid amount: empty value")]
    Empty,
    #[error("Invalid amount: unexpected character '{0}'")]
    InvalidCharacter(char),
    #[error("Invalid amount: more than {max} decimal places")]
    TooManyDecimals { max: u8 },
    #[error("Invalid amount: value is too large")]
    Overflow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_messages_are_verbatim() {
        let rejected = WalletError::from(ProviderError::Rpc {
            code: Some(4001),
            message: "User rejected the request".to_string(),
        });
        assert_eq!(rejected.to_string(), "User rejected the request");
        assert!(matches!(&rejected, WalletError::Provider(p) if p.is_user_rejection()));
    }

    #[test]
    fn test_contract_errors_wrap_provider() {
        let err = ContractError::from(ProviderError::Rpc {
            code: Some(-32000),
            message: "insufficient funds for gas".to_string(),
        });
        assert_eq!(err.to_string(), "insufficient funds for gas");
        assert!(!ProviderError::NotInstalled.is_user_rejection());
    }
}
