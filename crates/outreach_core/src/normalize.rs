//! Spreadsheet row normalization.
//!
//! Export tools are inconsistent about column names (`Company Name ` with a
//! trailing space is a real Apollo export header), so each field is read
//! through an ordered alias list. Missing or unparsable cells degrade to
//! empty strings / zero rather than erroring; the only hard failure in the
//! import path is the workbook parse itself (see `import`).

use crate::schema::{FocusArea, Lead};
use serde_json::Value;

/// One loosely-typed input row: column name -> cell value.
pub type RowMap = serde_json::Map<String, Value>;

const FIRST_NAME_COLUMNS: &[&str] = &["First Name"];
const LAST_NAME_COLUMNS: &[&str] = &["Last Name"];
const TITLE_COLUMNS: &[&str] = &["Title"];
const COMPANY_COLUMNS: &[&str] = &["Company Name ", "Company Name"];
const EMAIL_COLUMNS: &[&str] = &["Email"];
const EMPLOYEES_COLUMNS: &[&str] = &["# Employees"];
const COUNTRY_COLUMNS: &[&str] = &["Company Country", "Country"];
const WEBSITE_COLUMNS: &[&str] = &["Website"];
const CITY_COLUMNS: &[&str] = &["Company City", "City"];
const LINKEDIN_COLUMNS: &[&str] = &["Person Linkedin Url"];

/// Map raw rows to lead records. Identifiers are the 1-based positions in
/// the input sequence.
pub fn leads_from_rows(rows: &[RowMap]) -> Vec<Lead> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| lead_from_row(index as u32 + 1, row))
        .collect()
}

fn lead_from_row(id: u32, row: &RowMap) -> Lead {
    let title = text_field(row, TITLE_COLUMNS);
    let focus = classify_focus(&title);
    Lead {
        id,
        first_name: text_field(row, FIRST_NAME_COLUMNS),
        last_name: text_field(row, LAST_NAME_COLUMNS),
        title,
        company: text_field(row, COMPANY_COLUMNS),
        email: text_field(row, EMAIL_COLUMNS),
        employees: count_field(row, EMPLOYEES_COLUMNS),
        country: text_field(row, COUNTRY_COLUMNS),
        website: optional_field(row, WEBSITE_COLUMNS),
        city: optional_field(row, CITY_COLUMNS),
        linkedin: optional_field(row, LINKEDIN_COLUMNS),
        focus,
    }
}

/// Classify a job title into a focus area. Case-insensitive substring match,
/// first matching rule wins.
pub fn classify_focus(title: &str) -> FocusArea {
    let title = title.to_lowercase();
    if title.contains("sales") || title.contains("revenue") {
        FocusArea::SalesPipeline
    } else if title.contains("customer") || title.contains("support") {
        FocusArea::CustomerService
    } else if title.contains("operation") {
        FocusArea::ClientOnboarding
    } else {
        FocusArea::Crm
    }
}

fn text_field(row: &RowMap, columns: &[&str]) -> String {
    columns
        .iter()
        .find_map(|column| row.get(*column).and_then(cell_text))
        .unwrap_or_default()
}

fn optional_field(row: &RowMap, columns: &[&str]) -> Option<String> {
    columns
        .iter()
        .find_map(|column| row.get(*column).and_then(cell_text))
        .filter(|value| !value.is_empty())
}

fn count_field(row: &RowMap, columns: &[&str]) -> u32 {
    columns
        .iter()
        .find_map(|column| row.get(*column).and_then(cell_count))
        .unwrap_or(0)
}

fn cell_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn cell_count(value: &Value) -> Option<u32> {
    match value {
        Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                u32::try_from(int).ok()
            } else {
                // Spreadsheet numerics often come through as floats.
                number
                    .as_f64()
                    .filter(|float| *float >= 0.0)
                    .map(|float| float as u32)
            }
        }
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(pairs: &[(&str, Value)]) -> RowMap {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn classification_covers_all_rules() {
        assert_eq!(classify_focus("VP of Sales"), FocusArea::SalesPipeline);
        assert_eq!(classify_focus("Chief Revenue Officer"), FocusArea::SalesPipeline);
        assert_eq!(classify_focus("Customer Success Lead"), FocusArea::CustomerService);
        assert_eq!(classify_focus("Head of Support"), FocusArea::CustomerService);
        assert_eq!(classify_focus("Operations Manager"), FocusArea::ClientOnboarding);
        assert_eq!(classify_focus("CEO"), FocusArea::Crm);
        assert_eq!(classify_focus(""), FocusArea::Crm);
    }

    #[test]
    fn classification_first_rule_wins() {
        // "Sales Operations" matches the sales rule before the operations rule.
        assert_eq!(classify_focus("Sales Operations"), FocusArea::SalesPipeline);
        // "Customer Operations" matches the customer rule first.
        assert_eq!(classify_focus("Customer Operations"), FocusArea::CustomerService);
    }

    #[test]
    fn classification_is_pure_and_idempotent() {
        for title in ["Sales Director", "Support Agent", "Operations Lead", "CFO"] {
            let first = classify_focus(title);
            assert_eq!(classify_focus(title), first);
            assert!(FocusArea::ALL.contains(&first));
        }
    }

    #[test]
    fn company_column_prefers_trailing_space_variant() {
        let r = row(&[
            ("Company Name ", json!("Spaced Ltd")),
            ("Company Name", json!("Plain Ltd")),
        ]);
        let leads = leads_from_rows(&[r]);
        assert_eq!(leads[0].company, "Spaced Ltd");
    }

    #[test]
    fn country_aliases_fall_through() {
        let r = row(&[("Country", json!("United Kingdom"))]);
        assert_eq!(leads_from_rows(&[r])[0].country, "United Kingdom");

        let r = row(&[
            ("Company Country", json!("Ireland")),
            ("Country", json!("United Kingdom")),
        ]);
        assert_eq!(leads_from_rows(&[r])[0].country, "Ireland");
    }

    #[test]
    fn employees_default_to_zero_when_missing_or_non_numeric() {
        let r = row(&[("# Employees", json!("a few"))]);
        assert_eq!(leads_from_rows(&[r])[0].employees, 0);

        let r = row(&[]);
        assert_eq!(leads_from_rows(&[r])[0].employees, 0);

        let r = row(&[("# Employees", json!(150))]);
        assert_eq!(leads_from_rows(&[r])[0].employees, 150);

        let r = row(&[("# Employees", json!("95"))]);
        assert_eq!(leads_from_rows(&[r])[0].employees, 95);
    }

    #[test]
    fn identifiers_are_one_based_positions() {
        let rows = vec![row(&[]), row(&[]), row(&[])];
        let leads = leads_from_rows(&rows);
        let ids: Vec<u32> = leads.iter().map(|lead| lead.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn blank_optional_cells_are_absent() {
        let r = row(&[("Website", json!("")), ("Company City", json!("Leeds"))]);
        let lead = &leads_from_rows(&[r])[0];
        assert_eq!(lead.website, None);
        assert_eq!(lead.city.as_deref(), Some("Leeds"));
    }
}
