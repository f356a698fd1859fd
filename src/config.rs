use serde::{Deserialize, Serialize};
use alloy_primitives::Address;
use crate::errors::ContractError;
use crate::utils::parse_address;

/// Sepolia
pub const DEFAULT_CHAIN_ID: &str = "0xaa36a7";
pub const DEFAULT_TOKEN_SYMBOL: &str = "FROST";
pub const DEFAULT_TOKEN_DECIMALS: u8 = 18;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub contract_address: String,
    pub chain_id: String,
    pub token: TokenConfig,
    pub enable_logging: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenConfig {
    pub symbol: String,
    pub decimals: u8,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            symbol: DEFAULT_TOKEN_SYMBOL.to_string(),
            decimals: DEFAULT_TOKEN_DECIMALS,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            contract_address: String::new(),
            chain_id: DEFAULT_CHAIN_ID.to_string(),
            token: TokenConfig::default(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            "CONTRACT_ADDRESS" => option_env!("CONTRACT_ADDRESS"),
            "CHAIN_ID" => option_env!("CHAIN_ID"),
            "TOKEN_SYMBOL" => option_env!("TOKEN_SYMBOL"),
            "TOKEN_DECIMALS" => option_env!("TOKEN_DECIMALS"),
            "ENABLE_LOGGING" => option_env!("ENABLE_LOGGING"),
            _ => None,
        })
    }

    /// Construye la configuración a partir de una función de búsqueda KEY -> valor.
    /// Los valores vacíos o inválidos caen al default.
    pub fn from_lookup<'a, F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let defaults = Self::default();
        let value = |key: &str| lookup(key).map(str::trim).filter(|v| !v.is_empty());

        Self {
            contract_address: value("CONTRACT_ADDRESS")
                .map(str::to_string)
                .unwrap_or(defaults.contract_address),
            chain_id: value("CHAIN_ID")
                .and_then(normalize_chain_id)
                .unwrap_or(defaults.chain_id),
            token: TokenConfig {
                symbol: value("TOKEN_SYMBOL")
                    .map(str::to_string)
                    .unwrap_or(defaults.token.symbol),
                decimals: value("TOKEN_DECIMALS")
                    .and_then(|v| v.parse().ok())
                    .filter(|d| *d <= 77)
                    .unwrap_or(defaults.token.decimals),
            },
            enable_logging: value("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
        }
    }

    /// Dirección del contrato del token
    pub fn contract(&self) -> Result<Address, ContractError> {
        if self.contract_address.trim().is_empty() {
            return Err(ContractError::NotConfigured);
        }
        parse_address(&self.contract_address)
            .ok_or_else(|| ContractError::InvalidContract(self.contract_address.clone()))
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

/// Acepta "11155111" o "0xaa36a7" y devuelve siempre hex en minúsculas
pub fn normalize_chain_id(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let id = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16).ok()?,
        None => raw.parse::<u64>().ok()?,
    };
    Some(format!("{:#x}", id))
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
