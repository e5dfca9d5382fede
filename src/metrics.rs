use lazy_static::lazy_static;
use prometheus::{Counter, Encoder, Opts, Registry, TextEncoder};

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();
    pub static ref REQUESTS_TOTAL: Counter = Counter::with_opts(Opts::new(
        "diagnostics_requests_total",
        "Total API requests handled"
    ))
    .unwrap();
    pub static ref SNAPSHOTS_GENERATED_TOTAL: Counter = Counter::with_opts(Opts::new(
        "diagnostics_snapshots_generated_total",
        "Total diagnostics snapshots generated"
    ))
    .unwrap();
    pub static ref NOT_FOUND_TOTAL: Counter = Counter::with_opts(Opts::new(
        "diagnostics_not_found_total",
        "Total lookups for unknown vehicle ids"
    ))
    .unwrap();
}

pub fn init_metrics() {
    REGISTRY.register(Box::new(REQUESTS_TOTAL.clone())).unwrap();
    REGISTRY
        .register(Box::new(SNAPSHOTS_GENERATED_TOTAL.clone()))
        .unwrap();
    REGISTRY
        .register(Box::new(NOT_FOUND_TOTAL.clone()))
        .unwrap();
}

pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}
