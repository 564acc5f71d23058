pub mod index_policy;
#[cfg(feature = "tracing")]
pub mod tracing_events;
