/// The command ran successfully.
pub const NO_ERROR: i32 = 0;

/// The command failed and produced no (complete) result.
pub const FATAL_ERROR: i32 = 1;

/// The command ran but its result is not the expected one.
pub const NON_FATAL_ERROR: i32 = 2;
