//! Configuration constants.

/// Recursive resolver queried when none is given on the command line.
pub const DEFAULT_RESOLVER: &str = "8.8.8.8";

/// Standard DNS port, appended to bare nameserver addresses.
pub const DNS_PORT: u16 = 53;

/// Per-query timeout in seconds covering one full exchange (including the
/// TCP retry after a truncated UDP answer).
pub const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 5;

/// EDNS0 advertised UDP payload size, matching common resolver practice.
pub const EDNS_BUFFER_SIZE: u16 = 4096;

/// Owner-name label for the denial-of-existence probe. Queried below the
/// zone apex, it must not exist so that the authority section carries the
/// zone's NSEC or NSEC3 chain.
pub const NONEXISTENT_PROBE_LABEL: &str = "definitely-not-provisioned-3f29c1";
