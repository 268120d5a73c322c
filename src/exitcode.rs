/// Standard Unix exit codes for the arcmark CLI.
///
/// These codes follow the BSD sysexits convention.
///
/// Successful termination
pub const SUCCESS: i32 = 0;

/// Command line usage error - invalid arguments, bad share URL, etc.
pub const USAGE: i32 = 64;

/// Input was read but holds no usable bookmark data
pub const DATAERR: i32 = 65;

/// Every fetch method failed
pub const UNAVAILABLE: i32 = 69;

/// Reading input or writing the bookmark file failed
pub const IOERR: i32 = 74;
