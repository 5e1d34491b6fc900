//! Province definition table
//!
//! The game reads province metadata from a semicolon-separated table,
//! one line per province:
//!
//! ```text
//! id;red;green;blue;type;coastal;terrain;continent
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use provmap_core::Province;

use crate::error::IoResult;

/// Write the definition table for `provinces`, in the given order.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn write_definitions<W: Write>(provinces: &[Province], mut writer: W) -> IoResult<()> {
    for province in provinces {
        writeln!(
            writer,
            "{};{};{};{};{};{};{};{}",
            province.id,
            province.unique_color.r,
            province.unique_color.g,
            province.unique_color.b,
            province.kind,
            province.coastal,
            province.terrain,
            province.continent,
        )?;
    }
    Ok(())
}

/// Write the definition table to a file path.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_definition_file<P: AsRef<Path>>(path: P, provinces: &[Province]) -> IoResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_definitions(provinces, &mut writer)?;
    Ok(writer.flush()?)
}
