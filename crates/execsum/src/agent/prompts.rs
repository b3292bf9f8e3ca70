//! Prompt builders for the dataset-analysis asks.
//!
//! Each prompt embeds a compact textual preview of the table (header plus
//! the first few rows) so the agent answers about the actual data rather
//! than hallucinating a schema.

use crate::table::Table;

/// Rows included in the preview handed to the agent.
const PREVIEW_ROWS: usize = 5;

/// Render the table header and first rows as comma-joined lines.
pub fn table_preview(table: &Table, rows: usize) -> String {
    let mut out = table.column_names().join(",");
    for row in table.head(rows) {
        out.push('\n');
        out.push_str(&row.join(","));
    }
    out
}

/// Ask for a markdown table describing each column and its meaning.
pub fn describe_columns_prompt(table: &Table) -> String {
    format!(
        "You are analyzing a tabular dataset with {} rows and {} columns.\n\n\
         SAMPLE DATA:\n{}\n\n\
         Create a markdown table describing each column name and its meaning.",
        table.height(),
        table.width(),
        table_preview(table, PREVIEW_ROWS)
    )
}

/// Ask for a short executive trend interpretation of one column.
pub fn trend_prompt(table: &Table, column: &str) -> String {
    format!(
        "You are analyzing a tabular dataset with {} rows and {} columns.\n\n\
         SAMPLE DATA:\n{}\n\n\
         Provide a short executive interpretation of trends in the column '{}'. \
         Consider the dataset rows as chronological and provide data-driven reasoning.",
        table.height(),
        table.width(),
        table_preview(table, PREVIEW_ROWS),
        column
    )
}

/// Ask a free-form question about the dataset.
pub fn question_prompt(table: &Table, question: &str) -> String {
    format!(
        "You are analyzing a tabular dataset with {} rows and {} columns.\n\n\
         SAMPLE DATA:\n{}\n\n\
         Answer the following question about the dataset in one or two \
         sentences, using only the data shown and reasonable inference \
         from it.\n\nQUESTION: {}",
        table.height(),
        table.width(),
        table_preview(table, PREVIEW_ROWS),
        question
    )
}
