// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules.
//!
//! ```text
//!     core
//!      |
//!      v
//!   process
//!      |
//!   Builder --> run --> ProcessOutput
//! ```

pub mod process;
