//! Minimal fixed-width table rendering for CLI outputs.

pub struct Table {
    headers: Vec<&'static str>,
    widths: Vec<usize>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<const N: usize>(columns: [(&'static str, usize); N]) -> Self {
        Self {
            headers: columns.iter().map(|(h, _)| *h).collect(),
            widths: columns.iter().map(|(_, w)| *w).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        for (header, width) in self.headers.iter().zip(&self.widths) {
            out.push_str(&format!("{:<w$} ", header, w = *width));
        }
        out.push('\n');

        let total: usize = self.widths.iter().map(|w| w + 1).sum();
        out.push_str(&"-".repeat(total));
        out.push('\n');

        for row in &self.rows {
            for (cell, width) in row.iter().zip(&self.widths) {
                out.push_str(&format!("{:<w$} ", cell, w = *width));
            }
            out.push('\n');
        }

        out
    }
}
