pub mod convert;
pub mod dump;
mod error;
pub mod idc;
pub mod record;
pub mod script;
pub mod sections;

pub use convert::{convert, default_output, read_map, write_script, Report};
pub use error::{Error, Result};
pub use record::{Hex, Segment, Symbol};
pub use script::{generate, SegmentPass, SymbolPass};
pub use sections::Sections;
