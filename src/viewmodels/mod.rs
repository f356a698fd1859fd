// ============================================================================
// VIEWMODELS - Lógica de presentación
// ============================================================================

pub mod transfer_machine;
pub mod balance_viewmodel;
pub mod wallet_viewmodel;
pub mod transfer_viewmodel;

pub use transfer_machine::{TransferEffect, TransferEvent, TransferMachine};
pub use balance_viewmodel::BalanceViewModel;
pub use wallet_viewmodel::WalletViewModel;
pub use transfer_viewmodel::TransferViewModel;
