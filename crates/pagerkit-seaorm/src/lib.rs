pub use sea_orm;

pub use self::select::*;
pub use self::source::*;

mod select;
mod source;
