use alloy_primitives::{Address, U256};
use crate::utils::{format_units_fixed, BALANCE_DISPLAY_PLACES};

/// Lectura de balance del token (unidades mínimas)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BalanceReading {
    /// Dueño consultado
    pub owner: Option<Address>,
    pub value: Option<U256>,
    pub loading: bool,
    pub error: Option<String>,
}

impl BalanceReading {
    /// Texto del balance: "Loading...", "2.50 FROST" o vacío si falló la lectura
    pub fn display(&self, symbol: &str, decimals: u8) -> String {
        if self.loading {
            return "Loading...".to_string();
        }
        match self.value {
            Some(value) if self.error.is_none() => format!(
                "{} {}",
                format_units_fixed(value, decimals, BALANCE_DISPLAY_PLACES),
                symbol
            ),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formats_two_decimals() {
        let reading = BalanceReading {
            value: Some(U256::from(2_500_000_000_000_000_000u64)),
            ..Default::default()
        };
        assert_eq!(reading.display("FROST", 18), "2.50 FROST");
    }

    #[test]
    fn test_display_loading_and_error() {
        let loading = BalanceReading { loading: true, ..Default::default() };
        assert_eq!(loading.display("FROST", 18), "Loading...");

        let failed = BalanceReading {
            value: Some(U256::from(1u64)),
            error: Some("execution reverted".to_string()),
            ..Default::default()
        };
        assert_eq!(failed.display("FROST", 18), "");
        assert_eq!(BalanceReading::default().display("FROST", 18), "");
    }
}
