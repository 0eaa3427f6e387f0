pub mod escrow;
pub mod time;
