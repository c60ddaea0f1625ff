//! System information collector
//!
//! Reads host OS metrics at request time via `sysinfo`. A metric the OS does
//! not report is substituted with the `UNAVAILABLE` placeholder; collection
//! never fails a request.

use sysinfo::System;

use super::InfoRecord;

/// Placeholder for metrics the host OS does not report
pub const UNAVAILABLE: &str = "unknown";

/// Collect the seven-entry system information record
///
/// Labels and their order are fixed: Hostname, Platform, Architecture,
/// CPU_Cores, Uptime, Free_Memory, Total_Memory.
pub fn collect() -> InfoRecord {
    let sys = System::new_all();

    let mut record = InfoRecord::with_capacity(7);
    record.push(
        "Hostname",
        System::host_name().unwrap_or_else(|| UNAVAILABLE.to_string()),
    );
    record.push("Platform", std::env::consts::OS);
    record.push("Architecture", std::env::consts::ARCH);
    record.push("CPU_Cores", cpu_cores(&sys));
    record.push("Uptime", format_uptime_minutes(System::uptime()));
    record.push("Free_Memory", format_mebibytes(sys.free_memory()));
    record.push("Total_Memory", format_mebibytes(sys.total_memory()));
    record
}

/// Logical CPU count, or the placeholder when enumeration comes back empty
fn cpu_cores(sys: &System) -> String {
    match sys.cpus().len() {
        0 => UNAVAILABLE.to_string(),
        count => count.to_string(),
    }
}

/// Uptime seconds rendered as whole minutes, rounded to the nearest minute
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn format_uptime_minutes(seconds: u64) -> String {
    let minutes = (seconds as f64 / 60.0).round() as u64;
    format!("{minutes} minutes")
}

/// Byte count rendered as mebibytes with two decimal digits
#[allow(clippy::cast_precision_loss)]
fn format_mebibytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}
