#![forbid(unsafe_code)]

pub use context::{RequestContext, ResolverContext};
pub use error::ServerError;
pub use exporter::metrics_filter;
pub use interceptor::{RequestInterceptor, ResolverInterceptor};
pub use metrics::Metrics;
pub use outcome::{error_code, ExitStatus};

mod constants;
mod context;
mod error;
mod exporter;
mod interceptor;
mod metrics;
mod outcome;
