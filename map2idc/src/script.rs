use crate::{
    idc::{self, Stmt},
    record::{Segment, Symbol},
    sections::{layout_title, Sections, MEMORY_MAP},
};
use log::{debug, warn};
use std::io::{self, Write};

pub const MAIN: &str = "main";
pub const HANDLE_SEGMENTS: &str = "handleSegments";
pub const HANDLE_FUNCTIONS: &str = "handleFunctions";

// ----------------------------------------------------------------------------
// Pass results

/// What the segment handler found. Feeds the function handler.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentPass {
    /// Renamed segments, in map order.
    pub segments: Vec<Segment>,
    /// `Memory map:` rows that were not segment rows.
    pub skipped: usize,
}

impl SegmentPass {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(|seg| seg.name.as_str())
    }
}

/// What the function handler emitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolPass {
    /// Named symbols with the segment they were found in, in emission order.
    pub symbols: Vec<(String, Symbol)>,
    /// Layout rows that did not parse.
    pub skipped: usize,
    /// Parsed layout rows of another kind than a named symbol.
    pub ignored: usize,
    /// Segments without a `<segment> section layout` section.
    pub missing: Vec<String>,
}

impl SymbolPass {
    pub fn comments(&self) -> usize {
        self.symbols
            .iter()
            .filter(|(_, sym)| sym.module.is_some())
            .count()
    }
}

// ----------------------------------------------------------------------------
// Emitters

/// Writes the whole script: `main`, then the segment and function handlers.
pub fn generate<W: Write>(out: &mut W, sections: &Sections) -> io::Result<(SegmentPass, SymbolPass)> {
    write_main(out)?;
    let segments = write_segments(out, sections)?;
    let symbols = write_functions(out, sections, &segments)?;
    Ok((segments, symbols))
}

pub fn write_main<W: Write>(out: &mut W) -> io::Result<()> {
    idc::open(out, MAIN)?;
    idc::emit(out, Stmt::Call(HANDLE_SEGMENTS))?;
    idc::emit(out, Stmt::Call(HANDLE_FUNCTIONS))?;
    idc::close(out)
}

pub fn write_segments<W: Write>(out: &mut W, sections: &Sections) -> io::Result<SegmentPass> {
    idc::open(out, HANDLE_SEGMENTS)?;

    let mut pass = SegmentPass::default();
    match sections.get(MEMORY_MAP) {
        Some(lines) => {
            for line in lines {
                match Segment::parse(line) {
                    Some(seg) => {
                        idc::emit(out, Stmt::RenameSeg(&seg.start, &seg.name))?;
                        pass.segments.push(seg);
                    }
                    None => {
                        debug!("skip memory map row: {:?}", line);
                        pass.skipped += 1;
                    }
                }
            }
        }
        None => warn!("no `{}` section, segments are left as is", MEMORY_MAP),
    }

    idc::close(out)?;
    Ok(pass)
}

pub fn write_functions<W: Write>(
    out: &mut W,
    sections: &Sections,
    segments: &SegmentPass,
) -> io::Result<SymbolPass> {
    idc::open(out, HANDLE_FUNCTIONS)?;

    let mut pass = SymbolPass::default();
    for segment in segments.names() {
        let Some(lines) = sections.get(&layout_title(segment)) else {
            debug!("no layout for segment `{}`", segment);
            pass.missing.push(segment.to_string());
            continue;
        };
        for line in lines {
            let Some(sym) = Symbol::parse(line) else {
                debug!("skip `{}` layout row: {:?}", segment, line);
                pass.skipped += 1;
                continue;
            };
            if !sym.is_named() {
                pass.ignored += 1;
                continue;
            }
            idc::emit(out, Stmt::MakeNameEx(&sym.address, &sym.name, sym.flags()))?;
            if let Some(module) = &sym.module {
                idc::emit(out, Stmt::MakeComm(&sym.address, module))?;
            }
            pass.symbols.push((segment.to_string(), sym));
        }
    }

    idc::close(out)?;
    Ok(pass)
}
