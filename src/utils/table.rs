//! Table rendering utilities for CLI outputs.
//! Widths are computed with unicode-width so CJK customer and project names
//! keep the columns aligned.

use unicode_width::UnicodeWidthStr;

pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn col_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.width());
                }
            }
        }
        widths
    }

    fn pad(cell: &str, width: usize) -> String {
        let fill = width.saturating_sub(cell.width());
        format!("{}{}", cell, " ".repeat(fill))
    }

    pub fn render(&self) -> String {
        let widths = self.col_widths();
        let mut out = String::new();

        for (i, h) in self.headers.iter().enumerate() {
            out.push_str(&Self::pad(h, widths[i]));
            out.push(' ');
        }
        out.push('\n');

        for (i, w) in widths.iter().enumerate() {
            out.push_str(&"-".repeat(*w));
            if i + 1 < widths.len() {
                out.push(' ');
            }
        }
        out.push('\n');

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                out.push_str(&Self::pad(cell, widths[i]));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}
