pub mod wallet_session;
pub mod balance;
pub mod transfer;

pub use wallet_session::WalletSession;
pub use balance::BalanceReading;
pub use transfer::{TransferRequest, TransferOutcome, TransferPhase, SubmissionId, StatusTone};
