//! Command implementations for brief.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod agent;
mod resolve;

use crate::cli::Command;
use brief::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Resolve(args) => resolve::cmd_resolve(args),
        Command::List(args) => agent::cmd_list(args),
        Command::Show(args) => agent::cmd_show(args),
    }
}
