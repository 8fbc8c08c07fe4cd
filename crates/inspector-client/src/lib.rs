pub mod http;
pub mod inspector;

pub use http::HttpComparisonClient;
pub use inspector::Inspector;
