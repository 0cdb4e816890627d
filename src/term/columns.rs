use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

/// Spaces between adjacent columns.
pub const GUTTER: usize = 2;

/// An arrangement of items into columns, filled top to bottom then left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub rows: usize,
    pub widths: Vec<usize>,
}

impl Layout {
    /// Finds the arrangement with the fewest rows whose total width fits in `width`, given the
    /// display width of each item. There is always at least one column, even if it overflows.
    pub fn fit(lens: &[usize], width: usize) -> Layout {
        let Some(&widest) = lens.iter().max() else {
            return Layout { rows: 0, widths: Vec::new() };
        };

        // Every extra column costs at least one cell plus the gutter.
        if widest < width {
            let max_columns = lens.len().min(width / (1 + GUTTER) + 1);
            for columns in (2..=max_columns).rev() {
                let rows = lens.len().div_ceil(columns);
                let widths = Self::column_widths(lens, rows);
                let total = widths.iter().sum::<usize>() + GUTTER * (widths.len() - 1);
                if total <= width {
                    return Layout { rows, widths };
                }
            }
        }

        Layout {
            rows: lens.len(),
            widths: vec![widest],
        }
    }

    fn column_widths(lens: &[usize], rows: usize) -> Vec<usize> {
        lens.chunks(rows)
            .map(|column| column.iter().copied().max().unwrap_or(0))
            .collect()
    }

    pub fn columns(&self) -> usize {
        self.widths.len()
    }
}

/// Lays `array` out in columns fitting within `width` and yields each row, without trailing spaces.
fn rows<S: AsRef<str>>(array: &[S], width: usize) -> impl Iterator<Item = String> + '_ {
    let lens: Vec<usize> = array.iter().map(|item| item.as_ref().width()).collect();
    let layout = Layout::fit(&lens, width);

    (0..layout.rows).map(move |row| {
        let mut line = String::new();
        let cells = (0..layout.columns())
            .map(|column| column * layout.rows + row)
            .take_while(|&index| index < array.len());

        for (column, index) in cells.enumerate() {
            if column > 0 {
                let pad = layout.widths[column - 1] - lens[index - layout.rows] + GUTTER;
                line.extend(std::iter::repeat_n(' ', pad));
            }
            line.push_str(array[index].as_ref());
        }
        line
    })
}

/// Writes `array` in columns fitting within `width`, one line per row, without trailing spaces.
pub fn write_columns<W, S>(out: &mut W, array: &[S], width: usize) -> io::Result<()>
where
    W: Write + ?Sized,
    S: AsRef<str>,
{
    for line in rows(array, width) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Renders `array` in columns fitting within `width`, as [`write_columns`] would write them.
pub fn render_columns<S: AsRef<str>>(array: &[S], width: usize) -> String {
    rows(array, width).fold(String::new(), |mut out, line| {
        out.push_str(&line);
        out.push('\n');
        out
    })
}
