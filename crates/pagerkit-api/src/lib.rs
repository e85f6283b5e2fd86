pub mod request;
pub mod response;

pub mod prelude {
    pub use crate::request::*;
    pub use crate::response::*;
}
