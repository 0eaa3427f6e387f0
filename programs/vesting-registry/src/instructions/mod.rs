pub mod initialize_factory;
pub mod create_agreement;
pub mod set_factory_timelock;
pub mod registry_queries;
pub mod initialize_agreement;
pub mod start;
pub mod activate;
pub mod claim;
pub mod interrupt;
pub mod delegate;
pub mod set_timelock;
pub mod transfer_ownership;
pub mod vesting_quote;
pub mod sweep_dust;

pub use initialize_factory::*;
pub use create_agreement::*;
pub use set_factory_timelock::*;
pub use registry_queries::*;
pub use initialize_agreement::*;
pub use start::*;
pub use activate::*;
pub use claim::*;
pub use interrupt::*;
pub use delegate::*;
pub use set_timelock::*;
pub use transfer_ownership::*;
pub use vesting_quote::*;
pub use sweep_dust::*;
