// ============================================================================
// ADDRESS - Helpers de direcciones de cuenta
// ============================================================================

use alloy_primitives::Address;

/// Parsear una dirección hex (`0x` + 40 dígitos). No exige checksum EIP-55.
pub fn parse_address(input: &str) -> Option<Address> {
    let trimmed = input.trim();
    if !trimmed.starts_with("0x") && !trimmed.starts_with("0X") {
        return None;
    }
    trimmed.parse::<Address>().ok()
}

/// Formato corto para mostrar: `0x1234...abcd`
pub fn shorten_address(address: &Address) -> String {
    let full = address.to_checksum(None);
    format!("{}...{}", &full[..6], &full[full.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed";

    #[test]
    fn test_parse_address() {
        assert!(parse_address(SAMPLE).is_some());
        assert!(parse_address(&format!("  {}  ", SAMPLE)).is_some());
        assert!(parse_address("5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").is_none());
        assert!(parse_address("0x1234").is_none());
        assert!(parse_address("0xZZaeb6053f3e94c9b9a09f33669435e7ef1beaed").is_none());
        assert!(parse_address("").is_none());
    }

    #[test]
    fn test_shorten_address() {
        let address = parse_address(SAMPLE).unwrap();
        assert_eq!(shorten_address(&address), "0x5aAe...eAed");
    }
}
