use crate::{
    record::Hex,
    script::{SegmentPass, SymbolPass},
};
use color_print::cformat;

const RULE: &str = "-------------------+-----------------------------------------------------";

fn header(title: &str) -> String {
    format!(
        "{}+------[{}]{}",
        "-".repeat(19),
        title,
        "-".repeat(45usize.saturating_sub(title.len()))
    )
}

// Digits too wide for a `u64` are shown as written
fn addr(hex: &Hex) -> String {
    match hex.value() {
        Some(v) => format!("{:08X}", v),
        None => hex.text().to_string(),
    }
}

fn size(hex: &Hex) -> String {
    match hex.value() {
        Some(v) => format!("{:>8X}", v),
        None => format!("{:>8}", hex.text()),
    }
}

/// Listing of renamed segments and named symbols, in emission order.
pub fn format_dump(segments: &SegmentPass, symbols: &SymbolPass) -> Vec<String> {
    let mut lines = vec![header("segments")];
    for seg in &segments.segments {
        lines.push(format!(
            "[{}] {} | {}",
            addr(&seg.start),
            size(&seg.size),
            cformat!("<c>{}</>", seg.name)
        ));
    }

    let mut current: Option<&str> = None;
    for (segment, sym) in &symbols.symbols {
        if current != Some(segment.as_str()) {
            lines.push(header(segment));
            current = Some(segment.as_str());
        }
        let name = if sym.is_local() {
            cformat!("<y>{}</>", sym.name)
        } else {
            cformat!("<g>{}</>", sym.name)
        };
        let module = sym
            .module
            .as_ref()
            .map(|m| format!(" ;{}", m))
            .unwrap_or_default();
        lines.push(format!(
            "[{}] {} | 0x{:03x} {}{}",
            addr(&sym.address),
            size(&sym.size),
            sym.flags(),
            name,
            module
        ));
    }

    for segment in &symbols.missing {
        lines.push(cformat!("{:19}| <s>no layout</>: {}", "", segment));
    }
    lines.push(RULE.to_string());
    lines
}

pub fn print_dump(segments: &SegmentPass, symbols: &SymbolPass) {
    for line in format_dump(segments, symbols) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Segment;

    #[test]
    fn wide_fields_are_listed_as_written() {
        let segments = SegmentPass {
            segments: vec![
                Segment::parse("   .text  80003100 00000010 00000100").unwrap(),
                Segment::parse("   .bss   80400000 100000000000000000 00000000").unwrap(),
            ],
            skipped: 0,
        };
        let lines = format_dump(&segments, &SymbolPass::default());
        assert!(lines[1].starts_with("[80003100]       10 | "));
        assert!(lines[2].starts_with("[80400000] 100000000000000000 | "));
    }
}
