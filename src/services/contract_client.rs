// ============================================================================
// CONTRACT CLIENT - Llamadas al contrato FROST (ERC-20)
// ============================================================================
// Lectura `balanceOf` vía eth_call y escritura `transfer` vía
// eth_sendTransaction. La firma y el envío los hace la wallet.
// ============================================================================

use alloy_primitives::{hex, Address, U256};
use alloy_sol_types::{sol, SolCall};
use serde_json::{json, Value};
use crate::config::AppConfig;
use crate::errors::ContractError;
use crate::services::ethereum_provider::EthereumProvider;
use crate::utils::parse_address;

sol! {
    interface IFrostToken {
        function balanceOf(address owner) external view returns (uint256);
        function transfer(address to, uint256 amount) external returns (bool);
    }
}

/// Cliente del contrato del token (stateless salvo la dirección)
#[derive(Debug, Clone)]
pub struct ContractClient {
    contract: Address,
}

impl ContractClient {
    pub fn new(contract: Address) -> Self {
        Self { contract }
    }

    /// Cliente para el contrato configurado
    pub fn from_config(config: &AppConfig) -> Result<Self, ContractError> {
        Ok(Self::new(config.contract()?))
    }

    /// Leer el balance de `owner` en unidades mínimas
    pub async fn read_balance(&self, owner: Address) -> Result<U256, ContractError> {
        let provider = EthereumProvider::detect()?;
        let result = provider
            .request_json("eth_call", self.call_params(balance_of_calldata(owner)))
            .await?;

        let raw = result
            .as_str()
            .ok_or_else(|| ContractError::Decode(format!("expected hex string, got {}", result)))?;
        decode_uint256(raw)
    }

    /// Enviar `transfer(recipient, amount)` firmado por `from`.
    /// Devuelve el hash de la transacción. Un destinatario inválido falla
    /// antes de tocar la wallet.
    pub async fn write_transfer(
        &self,
        from: Address,
        recipient: &str,
        amount: U256,
    ) -> Result<Option<String>, ContractError> {
        let to = parse_address(recipient)
            .ok_or_else(|| ContractError::InvalidRecipient(recipient.to_string()))?;

        let provider = EthereumProvider::detect()?;
        log::info!("📤 [CONTRACT] transfer({}, {}) desde {}", to, amount, from);

        let result = provider
            .request_json("eth_sendTransaction", self.send_params(from, transfer_calldata(to, amount)))
            .await?;

        Ok(result.as_str().map(str::to_string))
    }

    /// Params de `eth_call` contra el bloque "latest"
    pub fn call_params(&self, data: Vec<u8>) -> Value {
        json!([
            {
                "to": self.contract.to_checksum(None),
                "data": hex::encode_prefixed(data),
            },
            "latest"
        ])
    }

    /// Params de `eth_sendTransaction`. Gas y fees los estima la wallet.
    pub fn send_params(&self, from: Address, data: Vec<u8>) -> Value {
        json!([
            {
                "from": from.to_checksum(None),
                "to": self.contract.to_checksum(None),
                "data": hex::encode_prefixed(data),
            }
        ])
    }
}

/// Calldata de `balanceOf(owner)`
pub fn balance_of_calldata(owner: Address) -> Vec<u8> {
    IFrostToken::balanceOfCall { owner }.abi_encode()
}

/// Calldata de `transfer(to, amount)`
pub fn transfer_calldata(to: Address, amount: U256) -> Vec<u8> {
    IFrostToken::transferCall { to, amount }.abi_encode()
}

/// Decodificar una palabra ABI `uint256` ("0x" + 64 dígitos hex)
pub fn decode_uint256(raw: &str) -> Result<U256, ContractError> {
    let bytes = hex::decode(raw.trim()).map_err(|e| ContractError::Decode(e.to_string()))?;
    if bytes.len() < 32 {
        return Err(ContractError::Decode(format!(
            "expected 32 bytes, got {} (is the contract deployed on this network?)",
            bytes.len()
        )));
    }
    Ok(U256::from_be_slice(&bytes[..32]))
}
