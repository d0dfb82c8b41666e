use crate::{
    error::{Error, Result},
    script::{self, SegmentPass, SymbolPass},
    sections::Sections,
};
use std::{
    fs::File,
    io::{BufWriter, Read, Write},
    path::{Path, PathBuf},
};

/// Summary of one conversion.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub sections: usize,
    pub segments: SegmentPass,
    pub symbols: SymbolPass,
}

/// `foo.map` -> `foo.idc`
pub fn default_output(input: &Path) -> PathBuf {
    input.with_extension("idc")
}

pub fn read_map(path: &Path) -> Result<Sections> {
    let name = path.display().to_string();
    let mut file = File::open(path).map_err(|e| Error::FileOpen(name.clone(), e))?;
    let mut raw = vec![];
    file.read_to_end(&mut raw)
        .map_err(|e| Error::FileRead(name, e))?;
    let decoded = String::from_utf8_lossy(&raw);
    let text: &str = &decoded;
    // Byte order mark written by some Windows editors
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    Ok(Sections::split(text.lines()))
}

/// Writes the script for `sections` to `path`, replacing any existing file.
pub fn write_script(path: &Path, sections: &Sections) -> Result<(SegmentPass, SymbolPass)> {
    let name = path.display().to_string();
    let file = File::create(path).map_err(|e| Error::FileCreate(name.clone(), e))?;
    let mut out = BufWriter::new(file);
    let passes =
        script::generate(&mut out, sections).map_err(|e| Error::FileWrite(name.clone(), e))?;
    out.flush().map_err(|e| Error::FileWrite(name, e))?;
    Ok(passes)
}

pub fn convert(input: &Path, output: &Path) -> Result<Report> {
    let sections = read_map(input)?;
    let (segments, symbols) = write_script(output, &sections)?;
    Ok(Report {
        sections: sections.len(),
        segments,
        symbols,
    })
}
