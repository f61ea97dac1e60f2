/// Errors produced by array operations and the CSV matrix collaborator.
///
/// Array errors (`IndexOutOfRange`, `Empty`) are always surfaced synchronously
/// and leave the array untouched. `Format` and `Shape` only occur while
/// reading CSV input; `Io` and `Csv` wrap the underlying transport.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("operation on empty array")]
    Empty,

    #[error("line {line}: field {field:?} is not a number")]
    Format { line: usize, field: String },

    #[error("line {line}: expected {expected} fields, found {found}")]
    Shape {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}
