//! Hostname set union and deterministic ordering.

use std::collections::HashSet;

/// Union one source's hostname set into the cumulative set.
///
/// Union is commutative, so source order does not affect the result; sources
/// are still processed in configured order for deterministic logging.
pub fn merge(cumulative: &mut HashSet<String>, source: HashSet<String>) {
    cumulative.extend(source);
}

/// Produce the final ordering: ascending lexicographic (byte-wise) sort.
pub fn sorted_hostnames(hostnames: HashSet<String>) -> Vec<String> {
    let mut sorted: Vec<String> = hostnames.into_iter().collect();
    sorted.sort_unstable();
    sorted
}
