use once_cell::sync::Lazy;
use prometheus::{register_int_counter, Encoder, IntCounter, TextEncoder};

// Prometheus metrics (default registry)
pub static MESSAGES_CREATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "message_store_messages_created_total",
        "Total messages written by POST /messages"
    )
    .expect("register messages_created_total")
});

pub static LOOKUPS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "message_store_lookups_total",
        "Total GET /messages/:id lookups"
    )
    .expect("register lookups_total")
});

pub static LOOKUP_MISSES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "message_store_lookup_misses_total",
        "Lookups that found no message"
    )
    .expect("register lookup_misses_total")
});

pub static STORAGE_ERRORS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "message_store_storage_errors_total",
        "Backing file read/parse/write failures"
    )
    .expect("register storage_errors_total")
});

/// Force registration so every counter shows up in `/metrics` before first use.
pub fn init_metrics() {
    Lazy::force(&MESSAGES_CREATED_TOTAL);
    Lazy::force(&LOOKUPS_TOTAL);
    Lazy::force(&LOOKUP_MISSES_TOTAL);
    Lazy::force(&STORAGE_ERRORS_TOTAL);
}

pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}
