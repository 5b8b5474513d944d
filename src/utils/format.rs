//! Human-readable matrix dumps.
//!
//! The layout is a label line, one line per row with every element preceded by
//! a tab, and a closing brace:
//!
//! ```text
//! a = {
//! 	1.000000	2.000000
//! 	3.000000	4.000000
//! }
//! ```

use crate::config::options::MatOptions;
use crate::matrix::Matrix;
use std::fmt::{self, Write};

/// Render `mat` under `label` with six decimals.
pub fn format(mat: &Matrix, label: &str) -> String {
    format_with(mat, label, &MatOptions::default())
}

/// Render `mat` under `label` using `opts.precision` decimals.
pub fn format_with(mat: &Matrix, label: &str, opts: &MatOptions) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_matrix(&mut out, mat, label, opts.precision);
    out
}

fn write_matrix<W: Write>(w: &mut W, mat: &Matrix, label: &str, precision: usize) -> fmt::Result {
    writeln!(w, "{label} = {{")?;
    for row in mat.rows_iter() {
        for v in row {
            write!(w, "\t{v:.precision$}")?;
        }
        writeln!(w)?;
    }
    writeln!(w, "}}")
}

impl fmt::Display for Matrix {
    /// Rows as tab-separated elements, honouring `{:.N}` precision (default 6).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(6);
        for (i, row) in self.rows_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, "\t")?;
                }
                write!(f, "{v:.precision$}")?;
            }
        }
        Ok(())
    }
}

/// Print a matrix to stdout labelled with the expression that produced it.
#[macro_export]
macro_rules! mat_print {
    ($mat:expr) => {
        print!("{}", $crate::utils::format::format(&$mat, stringify!($mat)))
    };
}
