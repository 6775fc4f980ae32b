/*
This code is part of the esri_shapefile library.
Authors: esri_shapefile contributors
Created: 19/10/2026
Last Modified: 19/10/2026
License: MIT
*/
use super::decode_latin1;
use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use std::io::prelude::*;
use std::io::{self, Result, SeekFrom};

/// Reads fixed-width values from a byte source with a switchable byte order.
///
/// The reader only requires `Read`, so it can sit on top of a decompression
/// stream. Every read either consumes exactly the width of its type or fails
/// with `UnexpectedEof`; there is no partial-value tolerance.
pub struct ByteOrderReader<R: Read> {
    is_le: bool,
    reader: R,
    pos: usize,
}

impl<R: Read> ByteOrderReader<R> {
    pub fn new(reader: R, byte_order: Endianness) -> ByteOrderReader<R> {
        ByteOrderReader {
            is_le: byte_order == Endianness::LittleEndian,
            reader,
            pos: 0usize,
        }
    }

    pub fn set_byte_order(&mut self, byte_order: Endianness) {
        self.is_le = byte_order == Endianness::LittleEndian;
    }

    pub fn get_byte_order(&self) -> Endianness {
        if self.is_le {
            return Endianness::LittleEndian;
        }
        Endianness::BigEndian
    }

    /// Number of bytes consumed since the reader was created.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Consumes and discards `skip` bytes.
    pub fn skip(&mut self, skip: usize) -> Result<()> {
        let copied = io::copy(&mut (&mut self.reader).take(skip as u64), &mut io::sink())?;
        self.pos += copied as usize;
        if (copied as usize) < skip {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("expected to skip {} bytes but the source ended after {}", skip, copied),
            ));
        }
        Ok(())
    }

    pub fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        self.reader.read_exact(buf)?;
        self.pos += buf.len();
        Ok(())
    }

    pub fn read_bytes(&mut self, length: usize) -> Result<Vec<u8>> {
        let mut bytes = vec![0u8; length];
        self.read_exact(&mut bytes)?;
        Ok(bytes)
    }

    /// Reads a fixed-width single-byte (Latin-1) string, including any padding.
    pub fn read_latin1(&mut self, length: usize) -> Result<String> {
        let bytes = self.read_bytes(length)?;
        Ok(decode_latin1(&bytes))
    }

    /// Reads one byte if one is available. A clean end of stream yields `None`,
    /// which lets record loops detect EOF on a field boundary.
    pub fn try_read_u8(&mut self) -> Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    self.pos += 1;
                    return Ok(Some(buf[0]));
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        let val = self.reader.read_u8()?;
        self.pos += 1;
        Ok(val)
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        // There's really no need for endian issues when reading single bytes.
        let val = self.reader.read_i8()?;
        self.pos += 1;
        Ok(val)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let val = if self.is_le {
            self.reader.read_u16::<LittleEndian>()?
        } else {
            self.reader.read_u16::<BigEndian>()?
        };
        self.pos += 2;
        Ok(val)
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        let val = if self.is_le {
            self.reader.read_i16::<LittleEndian>()?
        } else {
            self.reader.read_i16::<BigEndian>()?
        };
        self.pos += 2;
        Ok(val)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let val = if self.is_le {
            self.reader.read_u32::<LittleEndian>()?
        } else {
            self.reader.read_u32::<BigEndian>()?
        };
        self.pos += 4;
        Ok(val)
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        let val = if self.is_le {
            self.reader.read_i32::<LittleEndian>()?
        } else {
            self.reader.read_i32::<BigEndian>()?
        };
        self.pos += 4;
        Ok(val)
    }

    /// Reads an `i32` in the given byte order without touching the reader's
    /// current byte order.
    pub fn read_i32_as(&mut self, byte_order: Endianness) -> Result<i32> {
        let val = match byte_order {
            Endianness::LittleEndian => self.reader.read_i32::<LittleEndian>()?,
            Endianness::BigEndian => self.reader.read_i32::<BigEndian>()?,
        };
        self.pos += 4;
        Ok(val)
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        let val = if self.is_le {
            self.reader.read_f64::<LittleEndian>()?
        } else {
            self.reader.read_f64::<BigEndian>()?
        };
        self.pos += 8;
        Ok(val)
    }

    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read + Seek> ByteOrderReader<R> {
    /// Moves to an absolute position. Only available on seekable sources.
    pub fn seek(&mut self, position: usize) -> Result<()> {
        self.reader.seek(SeekFrom::Start(position as u64))?;
        self.pos = position;
        Ok(())
    }

    /// Total length of the underlying source. The read position is preserved.
    pub fn len(&mut self) -> Result<usize> {
        let len = self.reader.seek(SeekFrom::End(0))? as usize;
        self.reader.seek(SeekFrom::Start(self.pos as u64))?;
        Ok(len)
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Endianness {
    LittleEndian,
    BigEndian,
}

impl Default for Endianness {
    fn default() -> Endianness {
        Endianness::LittleEndian
    }
}
