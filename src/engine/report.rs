//! Human-readable reporting of a byte total (binary units, two decimals).

use crate::utils::config::UnitConsts;

pub fn to_mib(bytes: u64) -> f64 {
    bytes as f64 / UnitConsts::BYTES_PER_MIB as f64
}

pub fn to_gib(bytes: u64) -> f64 {
    bytes as f64 / UnitConsts::BYTES_PER_GIB as f64
}

/// The single line printed by the CLI, e.g. `Total disk usage: 3.00 MB (0.00 GB)`.
pub fn format_total(bytes: u64) -> String {
    format!(
        "Total disk usage: {:.2} MB ({:.2} GB)",
        to_mib(bytes),
        to_gib(bytes)
    )
}
