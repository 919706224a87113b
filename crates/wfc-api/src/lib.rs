mod error;
pub use error::ApiError;

mod http;
pub use http::{ConfigFormApi, TIMEZONE_HEADER};

mod page;
