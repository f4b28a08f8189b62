use std::time::{SystemTime, UNIX_EPOCH};

/// Ticks between 0001-01-01T00:00:00Z and the Unix epoch.
const UNIX_EPOCH_TICKS: i64 = 621_355_968_000_000_000;

/// Nanoseconds per tick.
const NANOS_PER_TICK: u128 = 100;

/// Converts a wall-clock instant to a .NET-style tick count: 100 ns
/// units since 0001-01-01T00:00:00Z, truncating toward zero at the
/// tick boundary.
pub fn protocol_ticks(instant: SystemTime) -> i64 {
    match instant.duration_since(UNIX_EPOCH) {
        Ok(after) => UNIX_EPOCH_TICKS + (after.as_nanos() / NANOS_PER_TICK) as i64,
        Err(err) => {
            // Pre-1970 instants: the tick delta is negative.
            UNIX_EPOCH_TICKS - (err.duration().as_nanos() / NANOS_PER_TICK) as i64
        }
    }
}
