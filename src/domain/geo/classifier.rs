//! Structural address-family checks.
//!
//! These are shape heuristics, not RFC-level validation: `is_ipv4` accepts
//! anything with four dot-separated parts, numeric or not. Bad octets are
//! caught later during the table lookup.

/// Returns true if `ip` has the shape of an IPv4 literal (four
/// dot-separated parts).
pub fn is_ipv4(ip: &str) -> bool {
    if ip.trim().is_empty() {
        return false;
    }

    ip.split('.').count() == 4
}

/// Returns true if `ip` has the shape of an IPv6 literal (contains a colon
/// and splits into 3 to 8 groups).
pub fn is_ipv6(ip: &str) -> bool {
    if ip.trim().is_empty() {
        return false;
    }

    if ip.contains(':') {
        let parts = ip.split(':').count();
        return (3..=8).contains(&parts);
    }

    false
}
