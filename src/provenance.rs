/*
Copyright 2026 climoplot developers

This file is part of climoplot.

climoplot is a free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation; either version 3 of the License, or
(at your option) any later version.

climoplot is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with climoplot. If not, see https://www.gnu.org/licenses/.
*/

//! Provenance logging.
//!
//! Every figure gets a sibling text log recording when and how it was
//! produced, one timestamped command line per run, optionally followed
//! by the input file's own `history` attribute. Records are appended,
//! so regenerating a figure preserves its earlier provenance.

use crate::constants::PROVENANCE_EXTENSION;
use crate::errors::OutputError;
use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// The log path for a figure: everything before the first `.` of the
/// file name, with the provenance extension. `map.png` logs to
/// `map.txt`, and `my.map.png` to `my.txt`.
pub fn log_path(outfile: &Path) -> PathBuf {
    let stem = outfile
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.split('.').next())
        .unwrap_or("figure");

    outfile.with_file_name(format!("{stem}.{PROVENANCE_EXTENSION}"))
}

/// Builds one provenance record from the command line that produced
/// the figure and, when present, the input file's history attribute.
pub fn new_record(command: &str, history: Option<(&Path, &str)>) -> String {
    let timestamp = Local::now().format("%a %b %d %H:%M:%S %Y");
    let mut record = format!("{timestamp}: {command}");

    if let Some((infile, text)) = history {
        record.push_str(&format!(" (history of {}: {})", infile.display(), text));
    }

    record
}

/// Appends a record to the figure's provenance log, creating it on
/// first use.
pub fn append_record(outfile: &Path, record: &str) -> Result<(), OutputError> {
    let path = log_path(outfile);
    let mut log = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(log, "{record}")?;

    Ok(())
}
