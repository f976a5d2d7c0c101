//! HTTP middleware
//!
//! - [`logging_middleware`] - request/response logging with request id and latency
//! - [`lookup_rate_limit`] - per-client limit on the public guest lookup

pub mod logging;
pub mod rate_limit;

pub use logging::logging_middleware;
pub use rate_limit::{Clock, ManualClock, RateLimiter, SystemClock, lookup_rate_limit};
