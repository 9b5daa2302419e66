//! Library side of the `bcss-codes` command line tool.

#![allow(missing_docs)]

pub mod cli;
pub mod commands;
pub mod logging;
pub mod render;
