// ============================================================================
// BALANCE STATE - Caché de la consulta de balance compartido
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::BalanceReading;
use crate::services::query_cache::QueryCache;

#[derive(Clone)]
pub struct BalanceState {
    pub cache: Rc<RefCell<QueryCache>>,
}

impl BalanceState {
    pub fn new() -> Self {
        Self {
            cache: Rc::new(RefCell::new(QueryCache::new())),
        }
    }

    /// Copia de la lectura actual
    pub fn get_reading(&self) -> BalanceReading {
        self.cache.borrow().reading().clone()
    }
}

impl Default for BalanceState {
    fn default() -> Self {
        Self::new()
    }
}
