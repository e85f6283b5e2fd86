pub use tracing;

pub mod settings;

pub mod paging {
    pub use pagerkit_core::prelude::*;
}

#[cfg(feature = "api")]
pub mod api {
    pub use pagerkit_api::request::*;
    pub use pagerkit_api::response::*;
}

#[cfg(feature = "db")]
pub mod db {
    pub use pagerkit_seaorm::*;
}

pub mod log {
    pub use pagerkit_log::{init, try_init, Level, LogConfig, LogError, LogFormat, LogWriter};
}

pub mod serde {
    pub use pagerkit_serde::prelude::*;
}
