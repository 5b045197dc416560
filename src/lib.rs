// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |          run / list / options
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  TOML, env, --set layers  |
//!              '-------------+-------------'
//!                            |
//!                            v
//!                          task
//!                 manager, registry
//!                            |
//!                       +----+----+
//!                       v         v
//!                    tasks      tools
//!              install build   meson, clang,
//!              lint format     package manager
//!              clean test
//!
//!   +-----------------------------------------+
//!   |  core      process execution            |
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod task;
pub mod utility;
