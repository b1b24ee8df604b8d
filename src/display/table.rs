//! Terminal table rendering
//!
//! Formats a normalized table section for terminal display. Column widths are
//! sized to the widest cell in each column.

use crate::report::TableSection;

/// Render a table section as aligned terminal text
pub fn render_section(section: &TableSection) -> String {
    if section.columns.is_empty() {
        return String::new();
    }

    let widths = column_widths(section);
    let total_width: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);

    let mut output = String::new();

    output.push_str(&section.title);
    output.push('\n');
    output.push_str(&"=".repeat(total_width));
    output.push('\n');

    output.push_str(&format_row(&section.columns, &widths));
    output.push_str(&"-".repeat(total_width));
    output.push('\n');

    if section.rows.is_empty() {
        output.push_str("(no rows)\n");
        return output;
    }

    for row in &section.rows {
        output.push_str(&format_row(row, &widths));
    }

    output
}

/// Compute per-column widths from the header and all rows
fn column_widths(section: &TableSection) -> Vec<usize> {
    let mut widths: Vec<usize> = section.columns.iter().map(|c| c.chars().count()).collect();

    for row in &section.rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    widths
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();

    for (i, &width) in widths.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(&format!("{:<width$}", cell, width = width));
    }

    // Strip trailing padding from the last cell
    let trimmed = line.trim_end().to_string();
    format!("{}\n", trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_section() -> TableSection {
        TableSection {
            title: "Key Metrics".to_string(),
            columns: vec!["Metric".into(), "Value".into(), "Change".into()],
            rows: vec![
                vec!["Total Revenue".into(), "$89,000".into(), "+35%".into()],
                vec!["Total Users".into(), "24,500".into(), "+12%".into()],
            ],
        }
    }

    #[test]
    fn test_render_section() {
        let output = render_section(&sample_section());

        assert!(output.starts_with("Key Metrics\n"));
        assert!(output.contains("Metric"));
        assert!(output.contains("Total Revenue"));
        assert!(output.contains("$89,000"));
    }

    #[test]
    fn test_column_alignment() {
        let output = render_section(&sample_section());
        let lines: Vec<&str> = output.lines().collect();

        // Header and data rows share column offsets
        let header = lines[2];
        let first_row = lines[4];
        assert_eq!(header.find("Value"), first_row.find("$89,000"));
        assert_eq!(header.find("Change"), first_row.find("+35%"));
    }

    #[test]
    fn test_render_empty_section() {
        let section = TableSection {
            title: "Empty".to_string(),
            columns: vec!["A".into(), "B".into()],
            rows: vec![],
        };
        let output = render_section(&section);
        assert!(output.contains("(no rows)"));
    }
}
