use std::sync::Arc;

/// A logger type which is called with various information regarding the configuration of sorters.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Returns amount of CPUs.
#[cfg(not(target_arch = "wasm32"))]
pub fn get_cpus() -> usize {
    num_cpus::get()
}

/// Returns amount of CPUs.
#[cfg(target_arch = "wasm32")]
pub fn get_cpus() -> usize {
    1
}

/// Resolves amount of allowed threads: `None` means all available CPUs.
pub fn resolve_threads(allowed_threads: Option<usize>) -> usize {
    allowed_threads.unwrap_or_else(get_cpus).max(1)
}
