/// Quote a CSV cell, doubling embedded quotes.
pub fn escape_csv_cell(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

pub fn csv_row<S: AsRef<str>>(cells: &[S]) -> String {
    cells
        .iter()
        .map(|c| escape_csv_cell(c.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

pub fn csv_document<S: AsRef<str>>(rows: &[Vec<S>]) -> String {
    rows.iter()
        .map(|r| csv_row(r))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_doubles_quotes() {
        assert_eq!(escape_csv_cell("Task \"A\", North"), "\"Task \"\"A\"\", North\"");
        assert_eq!(escape_csv_cell(""), "\"\"");
    }

    #[test]
    fn test_document_joins_rows() {
        let doc = csv_document(&[vec!["Report", "Task Summary"], vec!["Contract", "CON001"]]);
        assert_eq!(doc, "\"Report\",\"Task Summary\"\n\"Contract\",\"CON001\"");
    }
}
