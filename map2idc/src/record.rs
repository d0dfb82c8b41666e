use crate::idc::flags::*;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

macro_rules! static_regex {
    ($name:ident, $str:expr) => {
        static $name: Lazy<Regex> = Lazy::new(|| Regex::new($str).unwrap());
    };
}

// `name start size offset`
static_regex!(
    SEGMENT_ENTRY,
    r"\s+(?P<name>[^ ]+)\s+(?P<start>[a-f0-9]+)\s+(?P<size>[a-f0-9]+)\s+(?P<offset>[a-f0-9]+)"
);

// `start size address type name [module]`
static_regex!(
    SYMBOL_ENTRY,
    r"\s+(?P<start>[a-f0-9]+)\s+(?P<size>[a-f0-9]+)\s+(?P<address>[a-f0-9]+)\s+(?P<kind>\d+)\s+(?P<name>[^ ]+)\s*(?P<module>.+)?"
);

/// Type code of a layout row naming a symbol.
pub const SYMBOL_KIND: &str = "4";

// ----------------------------------------------------------------------------
// Hex

/// Hexadecimal field, kept as written in the map.
///
/// The numeric value is `None` when the digits do not fit in a `u64`; the
/// text is emitted either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hex {
    text: String,
    value: Option<u64>,
}

impl Hex {
    pub fn value(&self) -> Option<u64> {
        self.value
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl From<&str> for Hex {
    fn from(s: &str) -> Self {
        Hex {
            text: s.to_string(),
            value: u64::from_str_radix(s, 16).ok(),
        }
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.text)
    }
}

// ----------------------------------------------------------------------------
// Segment

/// Row of the `Memory map:` section.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub name: String,
    pub start: Hex,
    pub size: Hex,
    pub offset: Hex,
}

impl Segment {
    /// Returns `None` for headers and anything else that is not a segment row.
    pub fn parse(line: &str) -> Option<Segment> {
        let caps = SEGMENT_ENTRY.captures(line)?;
        Some(Segment {
            name: caps["name"].trim().to_string(),
            start: Hex::from(&caps["start"]),
            size: Hex::from(&caps["size"]),
            offset: Hex::from(&caps["offset"]),
        })
    }
}

// ----------------------------------------------------------------------------
// Symbol

/// Row of a `<segment> section layout` section.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub start: Hex,
    pub size: Hex,
    pub address: Hex,
    pub kind: String,
    pub name: String,
    pub module: Option<String>,
}

impl Symbol {
    pub fn parse(line: &str) -> Option<Symbol> {
        let caps = SYMBOL_ENTRY.captures(line)?;
        let module = caps
            .name("module")
            .map(|m| m.as_str().trim())
            .filter(|m| !m.is_empty())
            .map(|m| m.to_string());
        Some(Symbol {
            start: Hex::from(&caps["start"]),
            size: Hex::from(&caps["size"]),
            address: Hex::from(&caps["address"]),
            kind: caps["kind"].to_string(),
            name: caps["name"].trim().to_string(),
            module,
        })
    }

    /// Section markers and other row kinds are not named.
    pub fn is_named(&self) -> bool {
        self.kind == SYMBOL_KIND
    }

    /// Compiler generated names start with `@` and are kept out of the public
    /// name list.
    pub fn is_local(&self) -> bool {
        self.name.starts_with('@')
    }

    /// `MakeNameEx` flags for this symbol.
    pub fn flags(&self) -> u32 {
        let base = SN_NOWARN | SN_CHECK;
        if self.is_local() {
            base | SN_NON_PUBLIC | SN_AUTO
        } else {
            base | SN_PUBLIC | SN_NON_AUTO
        }
    }
}
