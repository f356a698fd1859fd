// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod wallet_state;
pub mod balance_state;
pub mod transfer_state;
pub mod app_state;

pub use wallet_state::*;
pub use balance_state::*;
pub use transfer_state::*;
pub use app_state::*;
