pub mod agreement;
pub mod registry;

pub use agreement::*;
pub use registry::*;
