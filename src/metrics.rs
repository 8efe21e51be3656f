use prometheus::core::Collector;
use prometheus::{
    exponential_buckets, histogram_opts, opts, HistogramVec, IntCounter, IntCounterVec, Registry,
};

use crate::constants::{LABEL_ERR_CODE, LABEL_EXIT_STATUS, LABEL_FIELD, LABEL_OBJECT};

/// The instruments written by the interceptors.
///
/// A `Metrics` value is created by registering on a [`Registry`] and handed to
/// the interceptor constructors; there is no package-level instrument state.
/// Metric names, label keys and bucket boundaries are fixed because dashboards
/// are built against them.
pub struct Metrics {
    pub request_started: IntCounter,
    pub request_completed: IntCounter,
    pub resolver_started: IntCounterVec,
    pub resolver_completed: IntCounterVec,
    pub time_to_resolve_field: HistogramVec,
    pub time_to_handle_request: HistogramVec,
}

impl Metrics {
    fn new() -> prometheus::Result<Metrics> {
        let request_started = IntCounter::with_opts(opts!(
            "graphql_request_started_total",
            "Total number of requests started on the graphql server."
        ))?;

        let request_completed = IntCounter::with_opts(opts!(
            "graphql_request_completed_total",
            "Total number of requests completed on the graphql server."
        ))?;

        let resolver_started = IntCounterVec::new(
            opts!(
                "graphql_resolver_started_total",
                "Total number of resolver started on the graphql server."
            ),
            &[LABEL_OBJECT, LABEL_FIELD],
        )?;

        let resolver_completed = IntCounterVec::new(
            opts!(
                "graphql_resolver_completed_total",
                "Total number of resolver completed on the graphql server."
            ),
            &[LABEL_OBJECT, LABEL_FIELD],
        )?;

        // 1ms..1024ms
        let buckets = exponential_buckets(1.0, 2.0, 11)?;

        let time_to_resolve_field = HistogramVec::new(
            histogram_opts!(
                "graphql_resolver_duration_ms",
                "The time taken to resolve a field by graphql server.",
                buckets.clone()
            ),
            &[LABEL_ERR_CODE, LABEL_EXIT_STATUS, LABEL_OBJECT, LABEL_FIELD],
        )?;

        let time_to_handle_request = HistogramVec::new(
            histogram_opts!(
                "graphql_request_duration_ms",
                "The time taken to handle a request by graphql server.",
                buckets
            ),
            &[LABEL_EXIT_STATUS],
        )?;

        Ok(Metrics {
            request_started,
            request_completed,
            resolver_started,
            resolver_completed,
            time_to_resolve_field,
            time_to_handle_request,
        })
    }

    fn collectors(&self) -> Vec<Box<dyn Collector>> {
        vec![
            Box::new(self.request_started.clone()),
            Box::new(self.request_completed.clone()),
            Box::new(self.resolver_started.clone()),
            Box::new(self.resolver_completed.clone()),
            Box::new(self.time_to_resolve_field.clone()),
            Box::new(self.time_to_handle_request.clone()),
        ]
    }

    /// Builds the instrument set and registers all of it on `registry`.
    ///
    /// Fails if any instrument name is already taken on that registry, in
    /// which case nothing stays registered; callers must unregister a
    /// previous set before registering again.
    pub fn register_on(registry: &Registry) -> prometheus::Result<Metrics> {
        let metrics = Metrics::new()?;
        for (idx, collector) in metrics.collectors().into_iter().enumerate() {
            if let Err(err) = registry.register(collector) {
                for collector in metrics.collectors().into_iter().take(idx) {
                    let _ = registry.unregister(collector);
                }
                return Err(err);
            }
        }
        tracing::info!("GraphQL telemetry instruments registered.");
        Ok(metrics)
    }

    /// Same as [`Metrics::register_on`] against the process default registry.
    pub fn register() -> prometheus::Result<Metrics> {
        Self::register_on(prometheus::default_registry())
    }

    /// Detaches all instruments from `registry`.
    ///
    /// Instruments not currently registered are skipped, so teardown is
    /// idempotent. Must not be called while interceptors are still taking
    /// traffic against these instruments.
    pub fn unregister_from(&self, registry: &Registry) {
        for collector in self.collectors() {
            let _ = registry.unregister(collector);
        }
        tracing::info!("GraphQL telemetry instruments unregistered.");
    }

    /// Same as [`Metrics::unregister_from`] against the process default registry.
    pub fn unregister(&self) {
        self.unregister_from(prometheus::default_registry())
    }
}
