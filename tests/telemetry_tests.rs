use facet_legend::telemetry::init_default_tracing;

#[cfg(not(feature = "telemetry"))]
#[test]
fn tracing_init_is_a_no_op_without_feature() {
    assert!(!init_default_tracing());
}

#[cfg(feature = "telemetry")]
#[test]
fn tracing_init_only_succeeds_once() {
    let _ = init_default_tracing();
    assert!(!init_default_tracing());
}
