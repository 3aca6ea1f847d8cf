/// A simple text-based table generator for aligned terminal output
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a new table with the given headers
    pub fn new(headers: Vec<&str>) -> Self {
        Table {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Add a row to the table
    pub fn add_row(&mut self, row: Vec<&str>) {
        self.rows.push(row.iter().map(|s| s.to_string()).collect());
    }

    /// Render the table as a formatted string
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut output = String::new();

        output.push_str(&Self::render_row(&self.headers, &widths));
        output.push('\n');
        output.push_str(&Self::render_separator(&widths));

        for row in &self.rows {
            output.push('\n');
            output.push_str(&Self::render_row(row, &widths));
        }

        output
    }

    /// Widest cell per column, headers included
    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.len()).collect();
        for row in &self.rows {
            for (i, col) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(col.len());
                }
            }
        }
        widths
    }

    fn render_row(row: &[String], widths: &[usize]) -> String {
        let mut line = String::new();
        for (i, col) in row.iter().enumerate() {
            if i < widths.len() {
                line.push_str(&format!("{:<width$}", col, width = widths[i]));
                if i < row.len() - 1 {
                    line.push_str(" | ");
                }
            }
        }
        line
    }

    fn render_separator(widths: &[usize]) -> String {
        let mut line = String::new();
        for (i, &width) in widths.iter().enumerate() {
            line.push_str(&"-".repeat(width));
            if i < widths.len() - 1 {
                line.push_str("-+-");
            }
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_table() {
        let mut table = Table::new(vec!["Parameter", "Value"]);
        table.add_row(vec!["Slope", "1.6419"]);
        table.add_row(vec!["Intercept", "-16.5830"]);

        let rendered = table.render();
        assert!(rendered.contains("Parameter"));
        assert!(rendered.contains("Slope"));
        assert!(rendered.contains("-16.5830"));
    }

    #[test]
    fn test_columns_align_to_widest_cell() {
        let mut table = Table::new(vec!["A", "B"]);
        table.add_row(vec!["short", "x"]);
        table.add_row(vec!["much longer cell", "y"]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        // Header, separator and both rows all share the same width
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| l.trim_end().len() <= lines[2].len()));
        assert!(lines[0].starts_with("A "));
    }
}
