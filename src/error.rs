use thiserror::Error;

// Unified error type for densemat

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatError {
    #[error("zero-sized matrix requested: {rows}x{cols}")]
    ZeroDimension { rows: usize, cols: usize },
    #[error("matrix of {rows} rows with stride {stride} does not fit in memory")]
    Overflow { rows: usize, stride: usize },
    #[error("stride {stride} is smaller than the column count {cols}")]
    InvalidStride { cols: usize, stride: usize },
    #[error("source buffer holds {got} elements, {need} required")]
    BufferTooShort { need: usize, got: usize },
    #[error("{op}: shape mismatch, expected {expected:?} got {got:?}")]
    ShapeMismatch {
        op: &'static str,
        expected: (usize, usize),
        got: (usize, usize),
    },
    #[error("{op}: inner dimensions differ (left has {left_cols} cols, right has {right_rows} rows)")]
    InnerDimMismatch {
        op: &'static str,
        left_cols: usize,
        right_rows: usize,
    },
    #[error("correlate: kernel {kernel:?} is larger than input {input:?}")]
    KernelTooLarge {
        input: (usize, usize),
        kernel: (usize, usize),
    },
    #[error("chain multiply needs at least two operands, got {0}")]
    DegenerateChain(usize),
    #[error("unknown activation: {0}")]
    UnknownActivation(String),
}
