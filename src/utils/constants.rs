/// Tiempo que se muestra un "Transfer successful!" antes de volver a Idle
pub const SUCCESS_RESET_MS: u32 = 3_000;

/// Tiempo que se muestra un error de transferencia antes de volver a Idle
pub const FAILURE_RESET_MS: u32 = 5_000;

/// Decimales mostrados para el balance
pub const BALANCE_DISPLAY_PLACES: u8 = 2;

// Mensajes de estado de la transferencia
pub const MSG_FILL_ALL_FIELDS: &str = "Please fill in all fields";
pub const MSG_AWAITING_CONFIRMATION: &str = "Awaiting confirmation...";
pub const MSG_PROCESSING: &str = "Processing transaction...";
pub const MSG_SUCCESS: &str = "Transfer successful!";
pub const MSG_TRANSFER_FAILED: &str = "Transaction failed";
