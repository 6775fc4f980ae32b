/*
This code is part of the esri_shapefile library.
Authors: esri_shapefile contributors
Created: 19/10/2026
Last Modified: 19/10/2026
License: MIT
*/
use super::byte_order_reader::Endianness;
use super::encode_latin1;
use byteorder::{BigEndian, LittleEndian, WriteBytesExt};
use std::io::prelude::*;
use std::io::{Error, SeekFrom};

pub struct ByteOrderWriter<W: Write> {
    is_le: bool,
    writer: W,
    num_bytes_written: usize,
}

impl<W: Write> ByteOrderWriter<W> {
    pub fn new(writer: W, byte_order: Endianness) -> ByteOrderWriter<W> {
        ByteOrderWriter::<W> {
            writer,
            is_le: byte_order == Endianness::LittleEndian,
            num_bytes_written: 0,
        }
    }

    pub fn get_num_bytes_written(&self) -> usize {
        self.num_bytes_written
    }

    pub fn set_byte_order(&mut self, byte_order: Endianness) {
        self.is_le = byte_order == Endianness::LittleEndian;
    }

    pub fn write_u8(&mut self, value: u8) -> Result<(), Error> {
        self.num_bytes_written += 1;
        self.writer.write_u8(value)
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.num_bytes_written += bytes.len();
        self.writer.write_all(bytes)
    }

    /// Writes `value` as single-byte characters into a field of exactly
    /// `width` bytes, left-justified and padded with `pad`. Longer values are
    /// truncated.
    pub fn write_latin1(&mut self, value: &str, width: usize, pad: u8) -> Result<(), Error> {
        let mut bytes = encode_latin1(value);
        bytes.resize(width, pad);
        self.write_bytes(&bytes)
    }

    pub fn write_u16(&mut self, value: u16) -> Result<(), Error> {
        self.num_bytes_written += 2;
        if self.is_le {
            self.writer.write_u16::<LittleEndian>(value)
        } else {
            self.writer.write_u16::<BigEndian>(value)
        }
    }

    pub fn write_u32(&mut self, value: u32) -> Result<(), Error> {
        self.num_bytes_written += 4;
        if self.is_le {
            self.writer.write_u32::<LittleEndian>(value)
        } else {
            self.writer.write_u32::<BigEndian>(value)
        }
    }

    pub fn write_i32(&mut self, value: i32) -> Result<(), Error> {
        self.num_bytes_written += 4;
        if self.is_le {
            self.writer.write_i32::<LittleEndian>(value)
        } else {
            self.writer.write_i32::<BigEndian>(value)
        }
    }

    pub fn write_i32_as(&mut self, value: i32, byte_order: Endianness) -> Result<(), Error> {
        self.num_bytes_written += 4;
        match byte_order {
            Endianness::LittleEndian => self.writer.write_i32::<LittleEndian>(value),
            Endianness::BigEndian => self.writer.write_i32::<BigEndian>(value),
        }
    }

    pub fn write_f64(&mut self, value: f64) -> Result<(), Error> {
        self.num_bytes_written += 8;
        if self.is_le {
            self.writer.write_f64::<LittleEndian>(value)
        } else {
            self.writer.write_f64::<BigEndian>(value)
        }
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.writer.flush()
    }

    pub fn get_inner(&mut self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Seek> ByteOrderWriter<W> {
    /// Moves the write cursor to an absolute position, used to patch headers
    /// once the body has been written. The byte counter is left untouched.
    pub fn seek_from_start(&mut self, loc: u64) -> Result<(), Error> {
        self.writer.seek(SeekFrom::Start(loc))?;
        Ok(())
    }

    pub fn seek_end(&mut self) -> Result<(), Error> {
        self.writer.seek(SeekFrom::End(0))?;
        Ok(())
    }
}
