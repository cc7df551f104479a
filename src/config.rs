use std::time::Duration;

/// Server settings. The binary always runs with the `Default` values; the
/// struct exists so tests can bind an ephemeral port with short delays.
#[derive(Clone, Debug)]
pub struct Config {
    pub listen_addr: String,
    /// Delay before the first timed chunk.
    pub early_delay: Duration,
    /// Delay before the final chunk; the stream closes after it.
    pub late_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:1337".to_string(),
            early_delay: Duration::from_secs(2),
            late_delay: Duration::from_secs(5),
        }
    }
}
