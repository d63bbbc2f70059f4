use tokio::task::JoinHandle;
use tracing::subscriber::set_global_default;
use tracing::Subscriber;
use tracing_bunyan_formatter::BunyanFormattingLayer;
use tracing_bunyan_formatter::JsonStorageLayer;
use tracing_log::LogTracer;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Registry;

/// Assemble the layered `tracing` subscriber: env filter, JSON storage, and
/// the bunyan formatter writing to `sink`.
///
/// `sink` must be a writer factory (e.g. `std::io::stdout`), not a writer;
/// tests pass `std::io::sink` to stay quiet.
pub fn get_subscriber<Sink>(
    name: &str,
    filter_level: &str,
    sink: Sink,
) -> impl Subscriber
where
    // higher-ranked trait bound; `sink` must satisfy `MakeWriter` for every
    // lifetime `'a`
    Sink: for<'a> MakeWriter<'a> + 'static,
{
    // RUST_LOG still wins over `filter_level` when set
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_level));
    let fmt_layer = BunyanFormattingLayer::new(name.to_string(), sink);
    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(fmt_layer)
}

/// Register `subscriber` as the global default, and redirect `log` events
/// (actix's own logging included) into it. Call once, before the server or
/// the pool are built.
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) {
    LogTracer::init().unwrap();
    set_global_default(subscriber).unwrap();
}

/// `spawn_blocking` with the current span attached, so that CPU-bound work
/// (argon2 verification takes hundreds of milliseconds) stays visible under
/// the request span instead of detaching from it.
pub fn spawn_blocking_with_tracing<F, R>(f: F) -> JoinHandle<R>
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    let span = tracing::Span::current();
    tokio::task::spawn_blocking(move || span.in_scope(f))
}
