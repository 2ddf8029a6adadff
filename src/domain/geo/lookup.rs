//! Static region tables and the per-family lookups.
//!
//! Every possible label and reason is a `'static` literal, so the lookups
//! hand out `(region, reason)` pairs without allocating. An empty reason
//! means "nothing to explain".

use super::classifier::{is_ipv4, is_ipv6};

/// Ordered IPv6 prefix table. Matching is case-insensitive starts-with on
/// the first colon group; the first entry that matches wins.
const IPV6_PREFIX_TABLE: &[(&str, &str, &str)] = &[
    ("2001", "Global Unicast", "production IPv6"),
    ("2a00", "Europe", "European IPv6 range"),
    ("2a01", "UK", "UK IPv6 range"),
    ("2a02", "Germany", "German IPv6 range"),
    ("2a03", "France", "French IPv6 range"),
    ("2400", "Asia Pacific", "APNIC IPv6 range"),
    ("2600", "US", "North American IPv6 range"),
    ("2800", "Latin America", "LACNIC IPv6 range"),
    ("fe80", "Link Local", "link-local address"),
    ("fc00", "Private Network", "unique local address"),
    ("fd00", "Private Network", "unique local address"),
];

/// Maps an IPv4 literal to a region based on its first octet.
pub fn classify_ipv4(ip: &str) -> (&'static str, &'static str) {
    if ip.trim().is_empty() {
        return ("Unknown", "empty IP");
    }

    if !is_ipv4(ip) {
        return ("Unknown", "not IPv4");
    }

    // The first octet decides the bucket; the remaining octets are never
    // inspected. No 0-255 bound check either: "999" parses and simply
    // misses the table.
    let first = ip.split('.').next().unwrap_or("");
    let Ok(first_octet) = first.parse::<i64>() else {
        return ("Unknown", "invalid first octet");
    };

    match first_octet {
        100 => ("US", ""),
        101 => ("UK", ""),
        102 => ("China", ""),
        103 => ("Germany", ""),
        104 => ("France", ""),
        105 => ("Japan", ""),
        106 => ("Canada", ""),
        107 => ("Australia", ""),
        108 => ("Brazil", ""),
        109 => ("India", ""),
        110 => ("Russia", ""),
        111 => ("South Korea", ""),
        112 => ("Italy", ""),
        113 => ("Spain", ""),
        114 => ("Netherlands", ""),
        115 => ("Sweden", ""),
        1..=9 => ("US", ""),
        10 | 172 | 192 => ("Private Network", "RFC1918 private range"),
        127 => ("Localhost", "loopback address"),
        _ => ("Unknown", "no country mapping"),
    }
}

/// Maps an IPv6 literal to a region based on its leading group.
pub fn classify_ipv6(ip: &str) -> (&'static str, &'static str) {
    if ip.trim().is_empty() {
        return ("Unknown", "empty IP");
    }

    if !is_ipv6(ip) {
        return ("Unknown", "not IPv6");
    }

    let first_part = ip.split(':').next().unwrap_or("").to_ascii_lowercase();

    for (prefix, region, reason) in IPV6_PREFIX_TABLE {
        if first_part.starts_with(prefix) {
            return (region, reason);
        }
    }

    // Loopback check stays after the prefix table to keep the original
    // precedence. `::1` lands here: its leading group is the empty string.
    if first_part.is_empty() || first_part == "::1" {
        return ("Localhost", "loopback address");
    }

    ("Country Unavailable", "IPv6 prefix not mapped")
}
