// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end: one row per configured item, backed by Home
//! Assistant.

mod cli;
mod cmd_init;
mod cmd_status;
mod cmd_tap;
mod cmd_watch;
mod config;
mod row_formatter;
mod table;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::config::Config;
