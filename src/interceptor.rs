use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use value::ConstValue;

use crate::context::{RequestContext, ResolverContext};
use crate::outcome::{error_code, ExitStatus};
use crate::Metrics;

/// Field-level middleware.
///
/// Wraps every resolver invocation: counts it, times it and labels the
/// observation by object type, field name, outcome and error code. The
/// resolver's result is passed through untouched.
pub struct ResolverInterceptor {
    metrics: Arc<Metrics>,
}

impl ResolverInterceptor {
    pub fn new(metrics: Arc<Metrics>) -> Self {
        Self { metrics }
    }

    /// Wraps the resolution of a single field.
    ///
    /// The started counter fires before `next` runs and the completed counter
    /// after the histogram observation, on every path, so the two stay equal
    /// over any completed invocation.
    pub async fn resolve<F, Fut>(&self, ctx: &(dyn ResolverContext + Sync), next: F) -> Result<ConstValue>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<ConstValue>>,
    {
        let object = ctx.object();
        let field = ctx.field_name();

        self.metrics
            .resolver_started
            .with_label_values(&[object, field])
            .inc();

        let start = Instant::now();
        let res = next().await;
        // Sub-millisecond precision is truncated, matching the dashboards
        // built against these buckets.
        let elapsed_ms = start.elapsed().as_millis() as f64;

        let exit_status = ExitStatus::of(&res);
        let err_code = match &res {
            Ok(_) => String::new(),
            Err(err) => error_code(err),
        };

        self.metrics
            .time_to_resolve_field
            .with_label_values(&[&err_code, exit_status.as_str(), object, field])
            .observe(elapsed_ms);

        self.metrics
            .resolver_completed
            .with_label_values(&[object, field])
            .inc();

        res
    }
}

/// Request-level middleware.
///
/// Wraps the handling of a whole request. The outcome is classified from the
/// errors accumulated on the request context during execution, not from the
/// serialized response; no error-code label is recorded because a request
/// aggregates many fields' errors.
pub struct RequestInterceptor {
    metrics: Arc<Metrics>,
}

impl RequestInterceptor {
    pub fn new(metrics: Arc<Metrics>) -> Self {
        Self { metrics }
    }

    pub async fn handle<F, Fut>(&self, ctx: &dyn RequestContext, next: F) -> Vec<u8>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Vec<u8>>,
    {
        self.metrics.request_started.inc();

        let start = Instant::now();
        let res = next().await;

        let exit_status = if ctx.errors().is_empty() {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        };
        let elapsed_ms = start.elapsed().as_millis() as f64;

        self.metrics
            .time_to_handle_request
            .with_label_values(&[exit_status.as_str()])
            .observe(elapsed_ms);

        self.metrics.request_completed.inc();

        res
    }
}
