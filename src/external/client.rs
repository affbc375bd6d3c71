use std::sync::LazyLock;
use std::time::Duration;

/// Shared HTTP client for all backend admin APIs.
///
/// Initialized lazily on first use and reused for every request so TCP
/// connections and DNS lookups are pooled across the three services.
/// Timeouts are short: the portal renders whatever it has rather than hang
/// on a slow backend.
pub static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        // Timeouts
        .timeout(Duration::from_secs(15))
        .connect_timeout(Duration::from_secs(5))
        // Connection pooling
        .pool_max_idle_per_host(4)
        .pool_idle_timeout(Duration::from_secs(90))
        // Compression
        .gzip(true)
        .deflate(true)
        .brotli(true)
        .zstd(true)
        // Security
        .use_rustls_tls()
        .user_agent(concat!("portal-rs/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to build HTTP client")
});
