//! Persisted shape data
//!
//! A compact binary snapshot of an extraction, written next to the
//! other artifacts so a project can be reopened without re-running the
//! passes. Layout (all integers little-endian):
//!
//! ```text
//! "SDAT" | version u32 | width u32 | height u32
//! label grid: width*height u32, row-major
//! shape count u32
//! per shape: source r,g,b | unique r,g,b
//! ```
//!
//! Per-shape pixel lists are not stored; they are reconstructible from
//! the label grid.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use provmap_core::Color;
use provmap_finder::{Extraction, Label};

use crate::error::{IoError, IoResult};

/// The 4 magic bytes.
pub const SHAPEDATA_MAGIC: [u8; 4] = *b"SDAT";

/// Current format version.
pub const SHAPEDATA_VERSION: u32 = 1;

/// The colors recorded for one shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeEntry {
    pub source_color: Color,
    pub unique_color: Color,
}

/// The persisted form of an extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeData {
    pub width: u32,
    pub height: u32,
    /// Resolved label grid, row-major.
    pub labels: Vec<Label>,
    /// One entry per shape, in shape order.
    pub shapes: Vec<ShapeEntry>,
}

impl ShapeData {
    /// Snapshot an extraction.
    pub fn from_extraction(extraction: &Extraction) -> Self {
        Self {
            width: extraction.labels().width(),
            height: extraction.labels().height(),
            labels: extraction.labels().as_slice().to_vec(),
            shapes: extraction
                .shapes()
                .iter()
                .map(|shape| ShapeEntry {
                    source_color: shape.source_color(),
                    unique_color: shape.unique_color(),
                })
                .collect(),
        }
    }
}

/// Write shape data to a writer.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn write_shapedata<W: Write>(data: &ShapeData, mut writer: W) -> IoResult<()> {
    writer.write_all(&SHAPEDATA_MAGIC)?;
    writer.write_all(&SHAPEDATA_VERSION.to_le_bytes())?;
    writer.write_all(&data.width.to_le_bytes())?;
    writer.write_all(&data.height.to_le_bytes())?;

    for &label in &data.labels {
        writer.write_all(&label.to_le_bytes())?;
    }

    writer.write_all(&(data.shapes.len() as u32).to_le_bytes())?;
    for entry in &data.shapes {
        let s = entry.source_color;
        let u = entry.unique_color;
        writer.write_all(&[s.r, s.g, s.b, u.r, u.g, u.b])?;
    }

    Ok(())
}

/// Read shape data from a reader.
///
/// # Errors
///
/// Returns [`IoError::BadMagic`] or [`IoError::UnsupportedVersion`]
/// for foreign files, and an I/O error on truncation.
pub fn read_shapedata<R: Read>(mut reader: R) -> IoResult<ShapeData> {
    let mut magic = [0u8; 4];
    reader.read_exact(&mut magic)?;
    if magic != SHAPEDATA_MAGIC {
        return Err(IoError::BadMagic);
    }

    let version = read_u32(&mut reader)?;
    if version != SHAPEDATA_VERSION {
        return Err(IoError::UnsupportedVersion(version));
    }

    let width = read_u32(&mut reader)?;
    let height = read_u32(&mut reader)?;

    let count = width as usize * height as usize;
    let mut labels = Vec::with_capacity(count);
    for _ in 0..count {
        labels.push(read_u32(&mut reader)?);
    }

    let shape_count = read_u32(&mut reader)?;
    let mut shapes = Vec::with_capacity(shape_count as usize);
    for _ in 0..shape_count {
        let mut colors = [0u8; 6];
        reader.read_exact(&mut colors)?;
        shapes.push(ShapeEntry {
            source_color: Color::new(colors[0], colors[1], colors[2]),
            unique_color: Color::new(colors[3], colors[4], colors[5]),
        });
    }

    Ok(ShapeData {
        width,
        height,
        labels,
        shapes,
    })
}

/// Write shape data to a file path.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_shapedata_file<P: AsRef<Path>>(path: P, data: &ShapeData) -> IoResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_shapedata(data, &mut writer)?;
    Ok(writer.flush()?)
}

/// Read shape data from a file path.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded.
pub fn read_shapedata_file<P: AsRef<Path>>(path: P) -> IoResult<ShapeData> {
    read_shapedata(BufReader::new(File::open(path)?))
}

fn read_u32<R: Read>(reader: &mut R) -> IoResult<u32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}
