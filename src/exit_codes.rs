//! Exit code constants for the brief CLI.
//!
//! - 0: Success
//! - 1: User error (bad args)
//! - 2: Configuration error (manifest, options, agent identity)
//! - 3: Invalid input (empty or blank messages)
//! - 4: Resolution failure (invocation produced a failed report)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an unusable combination of flags.
pub const USER_ERROR: i32 = 1;

/// Configuration error: unknown agent, undeterminable identity, malformed manifest.
pub const CONFIG_ERROR: i32 = 2;

/// Invalid input: the message list was empty or contained only blank entries.
pub const INVALID_INPUT: i32 = 3;

/// Resolution failure: the invocation was captured as a failed report.
pub const RESOLUTION_FAILURE: i32 = 4;
