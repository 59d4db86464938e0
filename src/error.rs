use thiserror::Error;

/// Errors raised while building a graph from an edge list. The algorithms themselves
/// never fail: a missing cycle or colouring is an answer, not an error.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line} does not contain exactly two vertices: `{content}`")]
    Format { line: usize, content: String },

    #[error("line {line} is not valid UTF-8")]
    Encoding { line: usize },

    #[error("unsupported file `{0}`")]
    UnsupportedFile(String),
}

pub type Result<T> = std::result::Result<T, GraphError>;
