//! Logging setup for framegate hosts.
//!
//! Everything in the workspace logs through the `log` facade; this module
//! owns the one place a binary wires that facade to `env_logger`.

mod init;

pub use init::init_logging;
