//! Binary PGM (`P5`) reading and writing.
//!
//! Only 8-bit rasters are accepted: `maxval` must lie in `1..=255`. Comment
//! lines (`#` up to end of line) may appear before each header field.

use crate::image::GrayMap;
use crate::instrument;
use crate::trace::trace_span;
use crate::util::{GrayMapError, GrayMapResult};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

fn peek<R: BufRead>(reader: &mut R) -> GrayMapResult<Option<u8>> {
    Ok(reader.fill_buf()?.first().copied())
}

fn next_byte<R: BufRead>(reader: &mut R) -> GrayMapResult<Option<u8>> {
    let byte = peek(reader)?;
    if byte.is_some() {
        reader.consume(1);
    }
    Ok(byte)
}

/// Skips whitespace and `#` comment lines.
fn skip_separators<R: BufRead>(reader: &mut R) -> GrayMapResult<()> {
    while let Some(byte) = peek(reader)? {
        if byte.is_ascii_whitespace() {
            reader.consume(1);
        } else if byte == b'#' {
            while let Some(c) = next_byte(reader)? {
                if c == b'\n' {
                    break;
                }
            }
        } else {
            break;
        }
    }
    Ok(())
}

fn read_decimal<R: BufRead>(reader: &mut R, what: &'static str) -> GrayMapResult<usize> {
    skip_separators(reader)?;
    let mut value: usize = 0;
    let mut digits = 0usize;
    while let Some(byte) = peek(reader)? {
        if !byte.is_ascii_digit() {
            break;
        }
        reader.consume(1);
        digits += 1;
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(usize::from(byte - b'0')))
            .ok_or(GrayMapError::Pgm { reason: what })?;
    }
    if digits == 0 {
        return Err(GrayMapError::Pgm { reason: what });
    }
    Ok(value)
}

/// Decodes a binary PGM stream.
pub fn read_pgm<R: BufRead>(mut reader: R) -> GrayMapResult<GrayMap> {
    let mut magic = [0u8; 2];
    reader.read_exact(&mut magic).map_err(|err| match err.kind() {
        ErrorKind::UnexpectedEof => GrayMapError::Pgm {
            reason: "invalid file format",
        },
        _ => err.into(),
    })?;
    if &magic != b"P5" {
        return Err(GrayMapError::Pgm {
            reason: "invalid file format",
        });
    }

    let width = read_decimal(&mut reader, "invalid width")?;
    let height = read_decimal(&mut reader, "invalid height")?;
    let maxval = read_decimal(&mut reader, "invalid maxval")?;
    let maxval = match u8::try_from(maxval) {
        Ok(m) if m > 0 => m,
        _ => {
            return Err(GrayMapError::InvalidMaxval {
                maxval: u32::try_from(maxval).unwrap_or(u32::MAX),
            })
        }
    };
    match next_byte(&mut reader)? {
        Some(c) if c.is_ascii_whitespace() => {}
        _ => {
            return Err(GrayMapError::Pgm {
                reason: "whitespace expected",
            })
        }
    }

    let _span = trace_span!("read_pgm", width = width, height = height).entered();
    let len = width
        .checked_mul(height)
        .ok_or(GrayMapError::InvalidDimensions { width, height })?;
    let data = read_raster(&mut reader, len)?;
    instrument::count_mem(len as u64);
    GrayMap::from_vec(data, width, height, maxval)
}

/// Reads exactly `len` raster bytes, growing storage only as bytes arrive so
/// a header that overstates the size cannot force a large allocation.
fn read_raster<R: BufRead>(reader: &mut R, len: usize) -> GrayMapResult<Vec<u8>> {
    let mut data = Vec::new();
    let mut limited = reader.take(len as u64);
    loop {
        let chunk = limited.fill_buf()?;
        if chunk.is_empty() {
            break;
        }
        let n = chunk.len();
        data.try_reserve(n)
            .map_err(|_| GrayMapError::Allocation { len })?;
        data.extend_from_slice(chunk);
        limited.consume(n);
    }
    if data.len() != len {
        return Err(GrayMapError::Pgm {
            reason: "truncated raster",
        });
    }
    Ok(data)
}

/// Encodes `img` as a binary PGM stream.
pub fn write_pgm<W: Write>(img: &GrayMap, mut writer: W) -> GrayMapResult<()> {
    let _span = trace_span!("write_pgm", width = img.width(), height = img.height()).entered();
    write!(
        writer,
        "P5\n{} {}\n{}\n",
        img.width(),
        img.height(),
        img.maxval()
    )?;
    writer.write_all(img.data())?;
    instrument::count_mem(img.data().len() as u64);
    Ok(())
}

/// Loads a binary PGM file.
pub fn load_pgm<P: AsRef<Path>>(path: P) -> GrayMapResult<GrayMap> {
    let file = File::open(path)?;
    read_pgm(BufReader::new(file))
}

/// Saves `img` as a binary PGM file.
///
/// On failure a partial file may be left behind.
pub fn save_pgm<P: AsRef<Path>>(img: &GrayMap, path: P) -> GrayMapResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_pgm(img, &mut writer)?;
    writer.flush()?;
    Ok(())
}
