//! Tracing setup. The subscriber starts with a bootstrap filter and is
//! switched to the configured one once settings are loaded.

mod logger;
pub use logger::*;

pub use tracing::{debug, error, info, trace, warn};
