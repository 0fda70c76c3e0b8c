pub mod traits;

pub mod http;
pub mod page;
