//! Bordered text rendering of a grid: `*` for committed cells, blank otherwise.
//!
//! Row `r` of the output lists the cells `(x = r, y = 0..n)`.

use std::fmt;

use crate::grid::Grid;

/// Render `grid` as `n + 2` lines, each `n + 2` characters wide.
pub fn render(grid: &Grid) -> String {
    grid.to_string()
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size() as i32;
        let border = "-".repeat(self.size() + 2);
        writeln!(f, "{border}")?;
        for x in 0..n {
            f.write_str("|")?;
            for y in 0..n {
                let committed = self.get(x, y).is_some_and(|p| p.is_committed());
                f.write_str(if committed { "*" } else { " " })?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "{border}")
    }
}
