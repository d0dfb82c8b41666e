use color_print::cformat;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read file: {0}")]
    FileRead(String, #[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Print the error and its causes to stderr
    pub fn print_diag(&self) {
        eprintln!("{}", cformat!("<red,bold>error</>: {}", self));
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            eprintln!("{}", cformat!("  <blue>caused by</>: {}", cause));
            source = std::error::Error::source(cause);
        }
    }
}
