// rayon thread-pool configuration

use log::{debug, warn};

/// Build the rayon global pool with `threads` workers, or one per logical CPU.
///
/// Returns `false` when a global pool already exists; the existing pool is kept.
pub fn configure_threads(threads: Option<usize>) -> bool {
    let n = threads.unwrap_or_else(num_cpus::get).max(1);
    match rayon::ThreadPoolBuilder::new().num_threads(n).build_global() {
        Ok(()) => {
            debug!("rayon global pool started with {n} threads");
            true
        }
        Err(e) => {
            warn!("rayon global pool not reconfigured: {e}");
            false
        }
    }
}
