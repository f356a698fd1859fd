// ============================================================================
// VIEWS - Funciones que renderizan DOM (sin lógica)
// ============================================================================

pub mod app;
pub mod wallet_connect;
pub mod transfer_panel;

pub use app::render_app;
pub use wallet_connect::render_wallet_connect;
pub use transfer_panel::render_transfer_panel;
