mod err;
mod msg;
mod page;

pub use err::*;
pub use msg::*;
pub use page::*;

pub type ApiResult<T, E> = std::result::Result<ApiPage<T>, ApiError<E>>;
