// ============================================================================
// QUERY CACHE - Caché de la consulta de balance
// ============================================================================
// Decide cuándo hay que pedir el balance: solo si cambió la clave
// (contrato, dueño) o si alguien invalidó la consulta. Re-renderizar con
// la misma clave no genera llamadas nuevas.
// ============================================================================

use alloy_primitives::{Address, U256};
use crate::models::BalanceReading;

/// Clave de la consulta `balanceOf`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BalanceQueryKey {
    pub contract: Address,
    pub owner: Address,
}

/// Permiso para una lectura en vuelo. Solo el ticket más reciente se aplica.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub key: BalanceQueryKey,
    generation: u64,
}

#[derive(Debug, Clone, Default)]
pub struct QueryCache {
    key: Option<BalanceQueryKey>,
    reading: BalanceReading,
    stale: bool,
    generation: u64,
    in_flight: bool,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reading(&self) -> &BalanceReading {
        &self.reading
    }

    pub fn key(&self) -> Option<BalanceQueryKey> {
        self.key
    }

    /// Marcar la consulta para volver a pedirla en el próximo `plan_fetch`
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Decide si hay que lanzar una lectura para `key`.
    /// `None` como clave limpia el caché (wallet desconectada).
    pub fn plan_fetch(&mut self, key: Option<BalanceQueryKey>) -> Option<FetchTicket> {
        let key = match key {
            Some(key) => key,
            None => {
                if self.key.is_some() {
                    *self = Self { generation: self.generation + 1, ..Self::default() };
                }
                return None;
            }
        };

        let key_changed = self.key != Some(key);
        if !key_changed && !self.stale {
            return None;
        }
        if !key_changed && self.in_flight {
            // Ya hay una lectura en vuelo para esta clave; stale se resuelve al terminar
            return None;
        }

        if key_changed {
            self.reading = BalanceReading {
                owner: Some(key.owner),
                loading: true,
                ..BalanceReading::default()
            };
        } else {
            // Refetch: se sigue mostrando el valor anterior mientras tanto
            self.reading.loading = self.reading.value.is_none();
        }

        self.key = Some(key);
        self.stale = false;
        self.in_flight = true;
        self.generation += 1;
        Some(FetchTicket { key, generation: self.generation })
    }

    /// Aplicar el resultado de una lectura. Devuelve false si el ticket ya no es vigente.
    pub fn resolve(&mut self, ticket: FetchTicket, result: Result<U256, String>) -> bool {
        if ticket.generation != self.generation || self.key != Some(ticket.key) {
            log::debug!("⏭️ [BALANCE] Resultado descartado (generación {} != {})", ticket.generation, self.generation);
            return false;
        }

        self.in_flight = false;
        self.reading.loading = false;
        match result {
            Ok(value) => {
                self.reading.value = Some(value);
                self.reading.error = None;
            }
            Err(e) => {
                self.reading.error = Some(e);
            }
        }
        true
    }

    /// Hay una invalidación pendiente que no pudo lanzarse por una lectura en vuelo
    pub fn needs_refetch(&self) -> bool {
        self.stale && !self.in_flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::parse_address;

    fn key(owner: &str) -> BalanceQueryKey {
        BalanceQueryKey {
            contract: parse_address("0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359").unwrap(),
            owner: parse_address(owner).unwrap(),
        }
    }

    const ALICE: &str = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed";
    const BOB: &str = "0xde709f2102306220921060314715629080e2fb77";

    #[test]
    fn test_same_key_fetches_once() {
        let mut cache = QueryCache::new();
        let ticket = cache.plan_fetch(Some(key(ALICE))).expect("first fetch");
        assert!(cache.reading().loading);
        assert!(cache.plan_fetch(Some(key(ALICE))).is_none());

        assert!(cache.resolve(ticket, Ok(U256::from(5u64))));
        assert_eq!(cache.reading().value, Some(U256::from(5u64)));
        assert!(!cache.reading().loading);

        // Re-render con la misma clave: ninguna llamada nueva
        for _ in 0..3 {
            assert!(cache.plan_fetch(Some(key(ALICE))).is_none());
        }
    }

    #[test]
    fn test_address_change_refetches() {
        let mut cache = QueryCache::new();
        let first = cache.plan_fetch(Some(key(ALICE))).unwrap();
        cache.resolve(first, Ok(U256::from(5u64)));

        let second = cache.plan_fetch(Some(key(BOB))).expect("new owner");
        assert_eq!(cache.reading().value, None);
        assert!(cache.reading().loading);
        assert_eq!(second.key, key(BOB));
    }

    #[test]
    fn test_invalidate_refetches_exactly_once() {
        let mut cache = QueryCache::new();
        let first = cache.plan_fetch(Some(key(ALICE))).unwrap();
        cache.resolve(first, Ok(U256::from(5u64)));

        cache.invalidate();
        let refetch = cache.plan_fetch(Some(key(ALICE))).expect("refetch");
        // Mientras se recarga se sigue mostrando el valor anterior
        assert!(!cache.reading().loading);
        assert_eq!(cache.reading().value, Some(U256::from(5u64)));
        assert!(cache.plan_fetch(Some(key(ALICE))).is_none());

        cache.resolve(refetch, Ok(U256::from(3u64)));
        assert_eq!(cache.reading().value, Some(U256::from(3u64)));
        assert!(cache.plan_fetch(Some(key(ALICE))).is_none());
    }

    #[test]
    fn test_invalidate_during_flight_waits() {
        let mut cache = QueryCache::new();
        let first = cache.plan_fetch(Some(key(ALICE))).unwrap();
        cache.invalidate();
        assert!(cache.plan_fetch(Some(key(ALICE))).is_none());
        assert!(!cache.needs_refetch());

        cache.resolve(first, Ok(U256::from(1u64)));
        assert!(cache.needs_refetch());
        assert!(cache.plan_fetch(Some(key(ALICE))).is_some());
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut cache = QueryCache::new();
        let old = cache.plan_fetch(Some(key(ALICE))).unwrap();
        let new = cache.plan_fetch(Some(key(BOB))).unwrap();

        assert!(!cache.resolve(old, Ok(U256::from(9u64))));
        assert_eq!(cache.reading().value, None);
        assert!(cache.resolve(new, Ok(U256::from(1u64))));
        assert_eq!(cache.reading().owner, parse_address(BOB));
    }

    #[test]
    fn test_read_error_keeps_process_alive() {
        let mut cache = QueryCache::new();
        let ticket = cache.plan_fetch(Some(key(ALICE))).unwrap();
        cache.resolve(ticket, Err("execution reverted".to_string()));
        assert_eq!(cache.reading().error.as_deref(), Some("execution reverted"));
        assert_eq!(cache.reading().display("FROST", 18), "");

        cache.invalidate();
        let retry = cache.plan_fetch(Some(key(ALICE))).unwrap();
        cache.resolve(retry, Ok(U256::from(2_500_000_000_000_000_000u64)));
        assert_eq!(cache.reading().display("FROST", 18), "2.50 FROST");
    }

    #[test]
    fn test_disconnect_clears_cache() {
        let mut cache = QueryCache::new();
        let ticket = cache.plan_fetch(Some(key(ALICE))).unwrap();
        assert!(cache.plan_fetch(None).is_none());
        assert_eq!(cache.key(), None);
        assert_eq!(cache.reading(), &BalanceReading::default());
        // La lectura anterior ya no aplica
        assert!(!cache.resolve(ticket, Ok(U256::from(1u64))));
    }
}
