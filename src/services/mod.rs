// ============================================================================
// SERVICES - Lógica de negocio (stateless)
// ============================================================================

pub mod ethereum_provider;
pub mod wallet_service;
pub mod contract_client;
pub mod query_cache;

pub use ethereum_provider::EthereumProvider;
pub use wallet_service::{WalletEvent, WalletService};
pub use contract_client::ContractClient;
pub use query_cache::{BalanceQueryKey, FetchTicket, QueryCache};
