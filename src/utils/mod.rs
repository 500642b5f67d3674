pub mod fields;
pub mod http;
pub mod logging;
pub mod timing;
