//! BMP image format support
//!
//! Reads and writes province maps in Windows BMP format. This is a
//! pure-Rust implementation (no external crate dependency) restricted
//! to what the game uses: 24-bit uncompressed pixel data.
//!
//! Rows on disk are padded to 4-byte boundaries and stored bottom-up
//! (a negative height means top-down); both are normalised away here,
//! so a decoded [`Bitmap`] always has unpadded top-down rows.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;

use provmap_core::{Bitmap, Color};

use crate::error::{IoError, IoResult};

const SIGNATURE: [u8; 2] = *b"BM";
const FILE_HEADER_SIZE: u32 = 14;
const INFO_HEADER_SIZE: u32 = 40;
const BITS_PER_PIXEL: u16 = 24;

/// Read a BMP image from a reader.
///
/// # Arguments
///
/// * `reader` - A buffered, seekable reader positioned at the `BM`
///   signature
///
/// # Errors
///
/// Returns an error for a bad signature, a non-24-bit or compressed
/// image, nonsensical dimensions, or truncated pixel data.
pub fn read_bmp<R: BufRead + Seek>(mut reader: R) -> IoResult<Bitmap> {
    let mut signature = [0u8; 2];
    reader.read_exact(&mut signature)?;
    if signature != SIGNATURE {
        return Err(IoError::BadSignature);
    }

    let _file_size = read_u32(&mut reader)?;
    let _reserved1 = read_u16(&mut reader)?;
    let _reserved2 = read_u16(&mut reader)?;
    let pixel_offset = read_u32(&mut reader)?;

    let header_size = read_u32(&mut reader)?;
    if header_size < INFO_HEADER_SIZE {
        return Err(IoError::MalformedHeader(header_size));
    }
    let width = read_i32(&mut reader)?;
    let height = read_i32(&mut reader)?;
    let _planes = read_u16(&mut reader)?;
    let bits_per_pixel = read_u16(&mut reader)?;
    let compression = read_u32(&mut reader)?;
    let _bitmap_size = read_u32(&mut reader)?;
    let _horz_resolution = read_i32(&mut reader)?;
    let _vert_resolution = read_i32(&mut reader)?;
    let _colors_used = read_u32(&mut reader)?;
    let _colors_important = read_u32(&mut reader)?;

    if bits_per_pixel != BITS_PER_PIXEL {
        return Err(IoError::UnsupportedBitDepth(bits_per_pixel));
    }
    if compression != 0 {
        return Err(IoError::UnsupportedCompression(compression));
    }

    // Rows run bottom-up unless the height is negative.
    let top_down = height < 0;
    let rows = height.unsigned_abs();
    if width <= 0 || rows == 0 {
        return Err(IoError::InvalidDimensions { width, height });
    }
    let width = width as u32;

    let row_bytes = width as usize * 3;
    let stride = (row_bytes + 3) & !3;
    if stride != row_bytes {
        tracing::debug!(width, stride, "row stride padded to a 4-byte boundary");
    }

    // The pixel data starts at the stated offset, which is not always
    // directly after the headers.
    reader.seek(SeekFrom::Start(pixel_offset.into()))?;

    let expected = stride * rows as usize;
    let mut data = Vec::with_capacity(expected);
    reader.by_ref().take(expected as u64).read_to_end(&mut data)?;
    if data.len() < expected {
        return Err(IoError::TruncatedPixelData {
            expected,
            actual: data.len(),
        });
    }

    let mut pixels = Vec::with_capacity(width as usize * rows as usize);
    for row in 0..rows {
        let stored_row = if top_down { row } else { rows - 1 - row };
        let start = stored_row as usize * stride;
        for x in 0..width as usize {
            let i = start + x * 3;
            // BGR on disk.
            pixels.push(Color::new(data[i + 2], data[i + 1], data[i]));
        }
    }

    Ok(Bitmap::from_pixels(width, rows, pixels)?)
}

/// Write a bitmap as a 24-bit uncompressed BMP.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn write_bmp<W: Write>(bitmap: &Bitmap, mut writer: W) -> IoResult<()> {
    let width = bitmap.width();
    let height = bitmap.height();
    let row_bytes = width as usize * 3;
    let stride = (row_bytes + 3) & !3;
    let pixel_bytes = stride * height as usize;
    let pixel_offset = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

    writer.write_all(&SIGNATURE)?;
    write_u32(&mut writer, pixel_offset + pixel_bytes as u32)?;
    write_u16(&mut writer, 0)?;
    write_u16(&mut writer, 0)?;
    write_u32(&mut writer, pixel_offset)?;

    write_u32(&mut writer, INFO_HEADER_SIZE)?;
    write_i32(&mut writer, width as i32)?;
    write_i32(&mut writer, height as i32)?;
    write_u16(&mut writer, 1)?;
    write_u16(&mut writer, BITS_PER_PIXEL)?;
    write_u32(&mut writer, 0)?; // no compression
    write_u32(&mut writer, pixel_bytes as u32)?;
    write_i32(&mut writer, 0)?;
    write_i32(&mut writer, 0)?;
    write_u32(&mut writer, 0)?;
    write_u32(&mut writer, 0)?;

    let padding = [0u8; 3];
    for y in (0..height).rev() {
        for color in bitmap.row(y) {
            writer.write_all(&[color.b, color.g, color.r])?;
        }
        writer.write_all(&padding[..stride - row_bytes])?;
    }

    Ok(())
}

/// Read a BMP from a file path.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded.
pub fn read_bitmap<P: AsRef<Path>>(path: P) -> IoResult<Bitmap> {
    read_bmp(BufReader::new(File::open(path)?))
}

/// Write a BMP to a file path.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_bitmap<P: AsRef<Path>>(path: P, bitmap: &Bitmap) -> IoResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_bmp(bitmap, &mut writer)?;
    Ok(writer.flush()?)
}

fn read_u16<R: Read>(reader: &mut R) -> IoResult<u16> {
    let mut buf = [0u8; 2];
    reader.read_exact(&mut buf)?;
    Ok(u16::from_le_bytes(buf))
}

fn read_u32<R: Read>(reader: &mut R) -> IoResult<u32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

fn read_i32<R: Read>(reader: &mut R) -> IoResult<i32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(i32::from_le_bytes(buf))
}

fn write_u16<W: Write>(writer: &mut W, value: u16) -> IoResult<()> {
    Ok(writer.write_all(&value.to_le_bytes())?)
}

fn write_u32<W: Write>(writer: &mut W, value: u32) -> IoResult<()> {
    Ok(writer.write_all(&value.to_le_bytes())?)
}

fn write_i32<W: Write>(writer: &mut W, value: i32) -> IoResult<()> {
    Ok(writer.write_all(&value.to_le_bytes())?)
}
