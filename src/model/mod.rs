pub mod campaign;
pub mod creative;
pub mod format;
