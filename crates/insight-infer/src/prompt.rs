//! Prompt assembly for the inference collaborator.
//!
//! Prompts carry the column headers plus a small row sample rendered as a
//! markdown table. Wording is deliberately plain; tuning it is out of scope.

use insight_model::Dataset;

/// Rows included in the sample handed to the model.
pub const DEFAULT_SAMPLE_ROWS: usize = 10;

/// Renders the first rows of the dataset as a markdown table.
pub fn sample_markdown(dataset: &Dataset, limit: usize) -> String {
    let headers = dataset.headers();
    let mut out = String::new();
    out.push_str("| ");
    out.push_str(&headers.join(" | "));
    out.push_str(" |\n| ");
    out.push_str(&vec!["---"; headers.len()].join(" | "));
    out.push_str(" |\n");
    for row in dataset.sample_rows(limit) {
        out.push_str("| ");
        out.push_str(&row.join(" | "));
        out.push_str(" |\n");
    }
    out
}

/// Prompt asking the model to propose a role-to-column object.
pub fn role_inference_prompt(dataset: &Dataset) -> String {
    format!(
        "You are a business analyst. Based on the sample data below, determine which \
         columns most likely represent:\n\n\
         - Revenue (or total income)\n\
         - Product (or item name)\n\
         - Region (or sales location)\n\
         - Month or date\n\n\
         Respond with a JSON object of this shape and nothing else:\n\
         {{\"Revenue\": \"<column_name>\", \"Product\": \"<column_name>\", \
         \"Region\": \"<column_name>\", \"Month\": \"<column_name>\"}}\n\n\
         Columns: {}\n\nSample data:\n{}",
        dataset.headers().join(", "),
        sample_markdown(dataset, DEFAULT_SAMPLE_ROWS),
    )
}

/// Prompt asking the model for an executive summary of the dataset.
///
/// The model is asked to answer in the language of the user's question.
pub fn summary_prompt(question: &str, dataset: &Dataset) -> String {
    format!(
        "You are a business data analyst.\n\n\
         The user asks: \"{}\"\n\n\
         Analyze the dataset and answer the question with a short executive \
         summary. Respond in the language of the user's question.\n\n\
         Columns: {}\n\nSample data:\n{}",
        question.trim(),
        dataset.headers().join(", "),
        sample_markdown(dataset, DEFAULT_SAMPLE_ROWS),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use insight_model::{CellValue, Column, ColumnType};

    fn dataset() -> Dataset {
        Dataset::from_columns(vec![
            Column::new(
                "Product",
                ColumnType::Text,
                vec![CellValue::Text("Widget".to_string())],
            ),
            Column::new("Revenue", ColumnType::Numeric, vec![CellValue::Number(9.5)]),
        ])
        .unwrap()
    }

    #[test]
    fn sample_renders_as_markdown_table() {
        let markdown = sample_markdown(&dataset(), 5);
        assert_eq!(
            markdown,
            "| Product | Revenue |\n| --- | --- |\n| Widget | 9.5 |\n"
        );
    }

    #[test]
    fn role_prompt_lists_columns_and_sample() {
        let prompt = role_inference_prompt(&dataset());
        assert!(prompt.contains("Columns: Product, Revenue"));
        assert!(prompt.contains("| Widget | 9.5 |"));
        assert!(prompt.contains("\"Revenue\": \"<column_name>\""));
    }

    #[test]
    fn summary_prompt_embeds_the_question() {
        let prompt = summary_prompt("  ¿Ventas por región?  ", &dataset());
        assert!(prompt.contains("¿Ventas por región?"));
    }
}
