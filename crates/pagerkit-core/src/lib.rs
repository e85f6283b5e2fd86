pub mod config;
pub mod envelope;
pub mod order;
pub mod paginator;
pub mod request;
pub mod result;

pub mod prelude {
    pub use crate::config::*;
    pub use crate::envelope::*;
    pub use crate::order::*;
    pub use crate::paginator::*;
    pub use crate::request::*;
    pub use crate::result::*;
}
