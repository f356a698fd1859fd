// ============================================================================
// UNITS - Conversión decimal <-> unidades mínimas del token
// ============================================================================

use alloy_primitives::U256;
use crate::errors::UnitsError;

/// 10^exp como U256 (exp <= 77 cabe en 256 bits)
pub fn ten_pow(exp: u8) -> U256 {
    U256::from(10u64).pow(U256::from(exp))
}

/// Convertir un monto decimal ("1.5") a unidades mínimas con `decimals` de exponente.
///
/// Acepta solo dígitos ASCII y un único punto decimal. Rechaza signos,
/// notación exponencial y fracciones con más precisión que `decimals`
/// (los ceros finales no cuentan). Nunca trunca ni desborda en silencio.
pub fn parse_units(input: &str, decimals: u8) -> Result<U256, UnitsError> {
    let value = input.trim();
    if value.is_empty() {
        return Err(UnitsError::Empty);
    }

    let (whole, frac) = value.split_once('.').unwrap_or((value, ""));
    if whole.is_empty() && frac.is_empty() {
        return Err(UnitsError::InvalidCharacter('.'));
    }

    if let Some(c) = whole.chars().chain(frac.chars()).find(|c| !c.is_ascii_digit()) {
        return Err(UnitsError::InvalidCharacter(c));
    }

    let frac = frac.trim_end_matches('0');
    if frac.len() > decimals as usize {
        return Err(UnitsError::TooManyDecimals { max: decimals });
    }

    let whole_units = digits_value(whole)?
        .checked_mul(ten_pow(decimals))
        .ok_or(UnitsError::Overflow)?;
    let frac_units = digits_value(frac)? * ten_pow(decimals - frac.len() as u8);

    whole_units.checked_add(frac_units).ok_or(UnitsError::Overflow)
}

/// Valor de una cadena de dígitos ya validada ("" = 0)
fn digits_value(digits: &str) -> Result<U256, UnitsError> {
    if digits.is_empty() {
        return Ok(U256::ZERO);
    }
    U256::from_str_radix(digits, 10).map_err(|_| UnitsError::Overflow)
}

/// Formatear unidades mínimas con `places` decimales, redondeando a la mitad hacia arriba.
/// Solo para mostrar: pierde precisión.
pub fn format_units_fixed(value: U256, decimals: u8, places: u8) -> String {
    let places = places.min(decimals);
    let unit = ten_pow(decimals - places);

    let mut scaled = value / unit;
    let remainder = value % unit;
    // unit > 1 implica scaled < U256::MAX, el +1 no desborda
    if unit > U256::from(1u64) && remainder >= unit - remainder {
        scaled += U256::from(1u64);
    }

    if places == 0 {
        return scaled.to_string();
    }

    let divisor = ten_pow(places);
    let whole = scaled / divisor;
    let frac = (scaled % divisor).to_string();
    format!("{}.{:0>width$}", whole, frac, width = places as usize)
}
