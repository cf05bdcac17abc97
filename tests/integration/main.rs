//! Integration tests for the `fieldlog` binary and the public library API.

mod basic_emit;
mod color_control;
mod config_custom;
mod fatal_panic;
