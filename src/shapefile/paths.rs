/*
This code is part of the esri_shapefile library.
Authors: esri_shapefile contributors
Created: 19/10/2026
Last Modified: 19/10/2026
License: MIT
*/
use crate::error::{Result, ShapefileError};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::{Path, PathBuf};

const MEMBER_EXTENSIONS: [&str; 4] = ["shp", "shx", "dbf", "prj"];

/// The member files of one shapefile data set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapefilePaths {
    pub shp: PathBuf,
    pub shx: PathBuf,
    pub dbf: PathBuf,
    pub prj: PathBuf,
}

/// Strips `.gz` and a member extension from a file name, if present.
fn base_of(path: &Path) -> PathBuf {
    let mut base = path.to_path_buf();
    if has_extension(&base, "gz") {
        base.set_extension("");
    }
    if MEMBER_EXTENSIONS.iter().any(|ext| has_extension(&base, ext)) {
        base.set_extension("");
    }
    base
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(ext))
        .unwrap_or(false)
}

fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut s = base.as_os_str().to_os_string();
    s.push(".");
    s.push(suffix);
    PathBuf::from(s)
}

impl ShapefilePaths {
    /// Paths for writing a new data set. `path` may be a base name or any
    /// member file name; extensions are lower-case unless `path` carries an
    /// upper-case `.SHP`.
    pub fn for_output<P: AsRef<Path>>(path: P) -> ShapefilePaths {
        let path = path.as_ref();
        let base = base_of(path);
        let upper = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e == "SHP")
            .unwrap_or(false);
        let ext = |e: &str| {
            if upper {
                with_suffix(&base, &e.to_uppercase())
            } else {
                with_suffix(&base, e)
            }
        };
        ShapefilePaths {
            shp: ext("shp"),
            shx: ext("shx"),
            dbf: ext("dbf"),
            prj: ext("prj"),
        }
    }

    /// Locates an existing data set. Each member may use a lower- or
    /// upper-case extension and may be gzip-compressed. A missing `.shp` or
    /// `.dbf` is an error; the `.shx` and `.prj` are optional and resolve to
    /// their lower-case names when absent.
    pub fn resolve<P: AsRef<Path>>(path: P) -> Result<ShapefilePaths> {
        let base = base_of(path.as_ref());
        let find = |ext: &str| -> Option<PathBuf> {
            let upper = ext.to_uppercase();
            [
                ext.to_string(),
                upper.clone(),
                format!("{}.gz", ext),
                format!("{}.GZ", upper),
                format!("{}.GZ", ext),
                format!("{}.gz", upper),
            ]
            .iter()
            .map(|suffix| with_suffix(&base, suffix))
            .find(|p| p.is_file())
        };
        let shp = find("shp").ok_or_else(|| ShapefileError::MissingFile(with_suffix(&base, "shp")))?;
        let dbf = find("dbf").ok_or_else(|| ShapefileError::MissingFile(with_suffix(&base, "dbf")))?;
        Ok(ShapefilePaths {
            shp,
            dbf,
            shx: find("shx").unwrap_or_else(|| with_suffix(&base, "shx")),
            prj: find("prj").unwrap_or_else(|| with_suffix(&base, "prj")),
        })
    }
}

/// True if the file name ends in `.gz`, in either case.
pub fn is_gzipped(path: &Path) -> bool {
    has_extension(path, "gz")
}

/// Opens a file for sequential reading, decompressing it on the fly when
/// its name ends in `.gz`.
pub fn open_input(path: &Path) -> Result<Box<dyn Read>> {
    let f = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ShapefileError::MissingFile(path.to_path_buf()),
        _ => ShapefileError::Io(e),
    })?;
    if is_gzipped(path) {
        Ok(Box::new(BufReader::new(GzDecoder::new(f))))
    } else {
        Ok(Box::new(BufReader::new(f)))
    }
}

/// Reads the projection text, if there is one.
pub fn read_projection(path: &Path) -> Result<Option<String>> {
    if !path.is_file() {
        log::debug!("no projection file at {}", path.display());
        return Ok(None);
    }
    let mut text = String::new();
    open_input(path)?.read_to_string(&mut text)?;
    Ok(Some(text))
}

/// Writes projection text verbatim.
pub fn write_projection(path: &Path, text: &str) -> Result<()> {
    let mut f = File::create(path)?;
    f.write_all(text.as_bytes())?;
    Ok(())
}
