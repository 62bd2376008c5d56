//! Compact numeric labels (`1500` -> `2K`).

const THOUSAND: u64 = 1_000;
const MILLION: u64 = 1_000_000;

/// Formats `n` as a compact label.
///
/// The band is picked from the raw value and the quotient is rounded half-up,
/// so `999_500` renders as `1000K` rather than `1M`.
pub fn format_number(n: u64) -> String {
    if n >= MILLION {
        format!("{}M", round_div(n, MILLION))
    } else if n >= THOUSAND {
        format!("{}K", round_div(n, THOUSAND))
    } else {
        n.to_string()
    }
}

fn round_div(n: u64, divisor: u64) -> u64 {
    n / divisor + u64::from(n % divisor >= divisor / 2)
}
