//! Text rendering shared by the board types.

use crate::EDGE_LENGTH;
use std::fmt::{self, Formatter, Write};

const COLUMN_LABELS: &str = "ABCDEFGH";

/// Render one character per cell as a labelled grid: column letters across the
/// top and a row number at the start of each line.
/// `cells` must yield exactly 64 items in row-major order.
pub fn format_grid<T: Iterator<Item = char>>(mut cells: T, f: &mut Formatter) -> fmt::Result {
    f.write_char(' ')?;
    for label in COLUMN_LABELS.chars() {
        f.write_char(' ')?;
        f.write_char(label)?;
    }

    for row in 1..=EDGE_LENGTH {
        write!(f, "\n{}", row)?;
        for _ in 0..EDGE_LENGTH {
            f.write_char(' ')?;
            f.write_char(cells.next().ok_or(fmt::Error)?)?;
        }
    }

    if cells.next().is_some() {
        return Err(fmt::Error);
    }
    Ok(())
}
