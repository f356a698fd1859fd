// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================
// Un solo AppState por proceso, creado en App::new() y pasado por referencia
// a views y viewmodels.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::config::AppConfig;
use crate::state::{BalanceState, TransferState, WalletState};

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub config: Rc<AppConfig>,
    pub wallet: WalletState,
    pub balance: BalanceState,
    pub transfer: TransferState,

    // Reactivity: callbacks para notificar cambios
    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    /// Crear nuevo estado de aplicación
    pub fn new(config: AppConfig) -> Self {
        let decimals = config.token.decimals;
        Self {
            config: Rc::new(config),
            wallet: WalletState::new(),
            balance: BalanceState::new(),
            transfer: TransferState::new(decimals),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers
    pub fn notify_subscribers(&self) {
        // Copiar la lista para que un subscriber pueda suscribir a otros
        let subscribers: Vec<Rc<dyn Fn()>> = self.change_subscribers.borrow().clone();
        for callback in subscribers.iter() {
            callback();
        }
    }
}
