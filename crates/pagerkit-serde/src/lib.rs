pub mod flag;
pub mod list;
pub mod num;

pub mod prelude {
    pub use crate::flag::*;
    pub use crate::list::*;
    pub use crate::num::*;
}
