//! Text rendering of status records.

use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;

use crate::device::StatusRecord;
use crate::error::DemoError;

/// Separator style for record lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonStyle {
    /// `": "` and `", "` separators, the historical fixture output.
    #[default]
    Spaced,
    /// serde_json compact output.
    Compact,
}

/// serde_json formatter that puts a space after every `:` and `,`.
#[derive(Debug, Default, Clone, Copy)]
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    #[inline]
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    #[inline]
    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    #[inline]
    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Render one record as a single line of JSON (no trailing newline).
pub fn render_record(record: &StatusRecord, style: JsonStyle) -> Result<String, DemoError> {
    match style {
        JsonStyle::Compact => {
            serde_json::to_string(record).map_err(|e| DemoError::Format(e.to_string()))
        }
        JsonStyle::Spaced => {
            let mut buf = Vec::with_capacity(40);
            let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
            record
                .serialize(&mut ser)
                .map_err(|e| DemoError::Format(e.to_string()))?;
            String::from_utf8(buf).map_err(|e| DemoError::Format(e.to_string()))
        }
    }
}
