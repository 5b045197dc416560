// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Console event format.
//!
//! ```text
//! ERROR  error: <message> <fields>   red
//! WARN   <message> <fields>          yellow
//! INFO   <message> <fields>          green
//! DEBUG  [DEBUG] <message> <fields>  blue
//! TRACE  [TRACE] <message> <fields>  dim
//! ```

use std::fmt;

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

const RESET: &str = "\x1b[0m";

/// Status-line formatter: no timestamp or target, level shown by color.
#[derive(Debug, Clone, Copy)]
pub struct StatusFormat {
    color: bool,
}

impl StatusFormat {
    #[must_use]
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    fn style(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::ERROR => ("error: ", "\x1b[31m"),
            Level::WARN => ("", "\x1b[33m"),
            Level::INFO => ("", "\x1b[32m"),
            Level::DEBUG => ("[DEBUG] ", "\x1b[34m"),
            _ => ("[TRACE] ", "\x1b[2m"),
        }
    }
}

impl<S, N> FormatEvent<S, N> for StatusFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let (prefix, color) = Self::style(*event.metadata().level());

        if self.color {
            write!(writer, "{color}")?;
        }
        write!(writer, "{prefix}")?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        if self.color {
            write!(writer, "{RESET}")?;
        }
        writeln!(writer)
    }
}
