//! Textual rendering of captures for failure messages. Purely
//! presentational; no comparison logic lives here.

use altercheck_core::capture::{Capture, Value};

/// Render a sequence as a single separated row: `id | name | age`.
pub fn compose_sequence(items: &[String]) -> String {
    if items.is_empty() {
        return "(empty)".to_string();
    }
    items.join(" | ")
}

/// Render rows under their column headers as an aligned table:
///
/// ```text
/// id | name | age
/// ---+-----+-----
/// 1  | Ann  | NULL
/// ```
pub fn compose_table(schema: &[String], rows: &[Vec<Value>]) -> String {
    if schema.is_empty() {
        return "(empty table)".to_string();
    }

    let rendered: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(Value::to_string).collect())
        .collect();

    let mut widths: Vec<usize> = schema.iter().map(|name| name.chars().count()).collect();
    for row in &rendered {
        for (index, cell) in row.iter().enumerate() {
            if index < widths.len() {
                widths[index] = widths[index].max(cell.chars().count());
            }
        }
    }

    let mut output = String::new();
    push_row(&mut output, schema, &widths);
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w + 1)).collect();
    output.push_str(&separator.join("+"));
    output.push('\n');
    for row in &rendered {
        push_row(&mut output, row, &widths);
    }
    // drop the trailing newline
    output.pop();
    output
}

/// Render a capture: its error message when execution failed, its
/// table otherwise.
pub fn compose_capture(capture: &Capture) -> String {
    match &capture.error_message {
        Some(message) => message.clone(),
        None => compose_table(&capture.schema, &capture.data),
    }
}

fn push_row<S: AsRef<str>>(output: &mut String, cells: &[S], widths: &[usize]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let cell = cell.as_ref();
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    output.push_str(padded.join(" | ").trim_end());
    output.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_is_pipe_separated() {
        let items = vec!["id".to_string(), "name".to_string()];
        assert_eq!(compose_sequence(&items), "id | name");
        assert_eq!(compose_sequence(&[]), "(empty)");
    }

    #[test]
    fn table_is_aligned() {
        let schema = vec!["id".to_string(), "name".to_string(), "age".to_string()];
        let rows = vec![vec![
            Value::Integer(1),
            Value::Text("Ann".to_string()),
            Value::Null,
        ]];
        assert_eq!(
            compose_table(&schema, &rows),
            "id | name | age\n---+-----+-----\n1  | Ann  | NULL"
        );
    }

    #[test]
    fn wide_cells_stretch_their_column() {
        let schema = vec!["id".to_string()];
        let rows = vec![vec![Value::Integer(12345)]];
        assert_eq!(compose_table(&schema, &rows), "id\n------\n12345");
    }

    #[test]
    fn empty_schema_renders_placeholder() {
        assert_eq!(compose_table(&[], &[]), "(empty table)");
    }

    #[test]
    fn error_capture_renders_its_message() {
        let capture = Capture::from_error("no such table: ghost");
        assert_eq!(compose_capture(&capture), "no such table: ghost");
    }
}
