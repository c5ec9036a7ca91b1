//! CLI command implementations.

pub(crate) mod list;
pub(crate) mod resolve;
pub(crate) mod shell;
pub(crate) mod show;
