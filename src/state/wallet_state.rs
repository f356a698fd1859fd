// ============================================================================
// WALLET STATE - Estado de la sesión de wallet
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::WalletSession;

/// Estado de la wallet. Solo el WalletViewModel lo modifica.
#[derive(Clone)]
pub struct WalletState {
    pub session: Rc<RefCell<WalletSession>>,
    pub connecting: Rc<RefCell<bool>>,
    pub connect_error: Rc<RefCell<Option<String>>>,
}

impl WalletState {
    /// Crear nuevo estado de wallet (desconectado)
    pub fn new() -> Self {
        Self {
            session: Rc::new(RefCell::new(WalletSession::disconnected())),
            connecting: Rc::new(RefCell::new(false)),
            connect_error: Rc::new(RefCell::new(None)),
        }
    }

    /// Establecer sesión
    pub fn set_session(&self, session: WalletSession) {
        *self.session.borrow_mut() = session;
    }

    /// Obtener sesión
    pub fn get_session(&self) -> WalletSession {
        self.session.borrow().clone()
    }

    pub fn is_connected(&self) -> bool {
        self.session.borrow().connected
    }

    /// Establecer connecting
    pub fn set_connecting(&self, connecting: bool) {
        *self.connecting.borrow_mut() = connecting;
    }

    /// Obtener connecting
    pub fn get_connecting(&self) -> bool {
        *self.connecting.borrow()
    }

    /// Establecer error de conexión
    pub fn set_connect_error(&self, error: Option<String>) {
        *self.connect_error.borrow_mut() = error;
    }

    /// Obtener error de conexión
    pub fn get_connect_error(&self) -> Option<String> {
        self.connect_error.borrow().clone()
    }
}

impl Default for WalletState {
    fn default() -> Self {
        Self::new()
    }
}
