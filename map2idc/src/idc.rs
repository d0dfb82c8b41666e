use crate::record::Hex;
use std::fmt;

/// `MakeNameEx` flag bits.
pub mod flags {
    pub const SN_CHECK: u32 = 0x001;
    pub const SN_PUBLIC: u32 = 0x002;
    pub const SN_NON_PUBLIC: u32 = 0x004;
    pub const SN_AUTO: u32 = 0x020;
    pub const SN_NON_AUTO: u32 = 0x040;
    pub const SN_NOWARN: u32 = 0x100;
}

// ----------------------------------------------------------------------------
// Statement

/// One line of an IDC routine body.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt<'a> {
    Call(&'a str),
    RenameSeg(&'a Hex, &'a str),
    MakeNameEx(&'a Hex, &'a str, u32),
    MakeComm(&'a Hex, &'a str),
}

impl fmt::Display for Stmt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Call(routine) => write!(f, "\t{}();", routine),
            Stmt::RenameSeg(addr, name) => write!(f, "\tRenameSeg({}, \"{}\");", addr, name),
            Stmt::MakeNameEx(addr, name, flags) => {
                write!(f, "\tMakeNameEx({}, \"{}\", 0x{:x});", addr, name, flags)
            }
            Stmt::MakeComm(addr, text) => write!(f, "\tMakeComm({}, \"{}\");", addr, text),
        }
    }
}

// ----------------------------------------------------------------------------
// Routine

/// Writes `static <name>()` and opens its body.
pub fn open(out: &mut impl std::io::Write, name: &str) -> std::io::Result<()> {
    writeln!(out, "static {}()", name)?;
    writeln!(out, "{{")
}

pub fn close(out: &mut impl std::io::Write) -> std::io::Result<()> {
    writeln!(out, "}}")
}

pub fn emit(out: &mut impl std::io::Write, stmt: Stmt) -> std::io::Result<()> {
    writeln!(out, "{}", stmt)
}
