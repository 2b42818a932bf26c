//! Standard exit codes (BSD sysexits.h compatible)

/// Successful termination
pub const OK: i32 = 0;

/// Command line usage error (input outside the accepted ranges)
pub const USAGE: i32 = 64;

/// Data format error (more nodes than the levels can hold)
pub const DATAERR: i32 = 65;

/// Internal software error (graph serialization failed)
pub const SOFTWARE: i32 = 70;

/// Input/output error
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;
