pub mod error;
pub mod logging;

pub use error::RelayError;
pub use logging::init_logging;
