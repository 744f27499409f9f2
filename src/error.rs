use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {text:?} is not a non-negative base-10 integer")]
    Parse {
        line: usize,
        text: String,
        #[source]
        source: nom::error::Error<String>,
    },

    #[error("line {line}: group sum overflowed")]
    Overflow { line: usize },

    #[error("need at least {needed} groups, found {found}")]
    InsufficientData { needed: usize, found: usize },
}
