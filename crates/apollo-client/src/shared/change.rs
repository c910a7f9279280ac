use std::fmt::{self, Display};

use apollo_std::Style;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// How serious a reported change is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeType {
    Failure,
    Warning,
    Notice,
    /// a kind this client does not know about yet
    #[serde(untagged)]
    Other(String),
}

impl ChangeType {
    pub fn is_failure(&self) -> bool {
        matches!(self, ChangeType::Failure)
    }

    fn style(&self) -> Option<Style> {
        match self {
            ChangeType::Failure => Some(Style::Failure),
            ChangeType::Warning => Some(Style::Warning),
            ChangeType::Notice => Some(Style::Notice),
            ChangeType::Other(_) => None,
        }
    }

    /// The change type, coloured by severity.
    pub fn painted(&self) -> String {
        match self.style() {
            Some(style) => style.paint(self.to_string()),
            None => self.to_string(),
        }
    }
}

impl Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            ChangeType::Failure => "FAILURE",
            ChangeType::Warning => "WARNING",
            ChangeType::Notice => "NOTICE",
            ChangeType::Other(other) => other,
        };
        write!(f, "{kind}")
    }
}

/// One finding reported by an operation check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    #[serde(rename = "type")]
    pub change_type: ChangeType,
    pub code: String,
    pub description: String,
}

/// The result of checking operations against a schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOperationsResponse {
    changes: Vec<Change>,
}

impl CheckOperationsResponse {
    pub fn new(changes: Vec<Change>) -> CheckOperationsResponse {
        CheckOperationsResponse { changes }
    }

    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    pub fn failure_count(&self) -> usize {
        self.changes
            .iter()
            .filter(|change| change.change_type.is_failure())
            .count()
    }

    pub fn has_failures(&self) -> bool {
        self.failure_count() > 0
    }

    pub fn get_table(&self) -> String {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_header(
                ["Change", "Code", "Description"]
                    .into_iter()
                    .map(|heading| Style::Heading.paint(heading)),
            );
        for change in &self.changes {
            table.add_row(vec![
                change.change_type.painted(),
                change.code.clone(),
                change.description.clone(),
            ]);
        }
        table.to_string()
    }

    pub fn get_json(&self) -> Value {
        json!({ "changes": self.changes })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn change(kind: &str, code: &str) -> Value {
        json!({ "type": kind, "code": code, "description": format!("{code} happened") })
    }

    #[test]
    fn it_keeps_unknown_change_types() {
        let changes: Vec<Change> = serde_json::from_value(json!([
            change("FAILURE", "FIELD_REMOVED"),
            change("WARNING", "ARG_CHANGED"),
            change("NOTICE", "FIELD_ADDED"),
            change("SOMETHING_NEW", "MYSTERY"),
        ]))
        .unwrap();

        assert_eq!(changes[0].change_type, ChangeType::Failure);
        assert_eq!(changes[1].change_type, ChangeType::Warning);
        assert_eq!(changes[2].change_type, ChangeType::Notice);
        assert_eq!(
            changes[3].change_type,
            ChangeType::Other("SOMETHING_NEW".to_string())
        );

        let response = CheckOperationsResponse::new(changes);
        assert_eq!(response.failure_count(), 1);
        assert_eq!(response.get_json()["changes"][3]["type"], "SOMETHING_NEW");
    }

    #[test]
    fn only_failures_fail() {
        let changes: Vec<Change> =
            serde_json::from_value(json!([change("WARNING", "A"), change("MYSTERY", "B")])).unwrap();
        assert!(!CheckOperationsResponse::new(changes).has_failures());
    }

    #[test]
    fn unknown_change_types_are_not_painted() {
        let other = ChangeType::Other("SOMETHING_NEW".to_string());
        assert_eq!(other.painted(), "SOMETHING_NEW");
        assert!(ChangeType::Failure.painted().contains("FAILURE"));
    }

    #[test]
    fn it_renders_a_table() {
        let changes: Vec<Change> =
            serde_json::from_value(json!([change("FAILURE", "FIELD_REMOVED")])).unwrap();
        let table = CheckOperationsResponse::new(changes).get_table();

        for expected in ["Change", "Code", "Description", "FAILURE", "FIELD_REMOVED", "FIELD_REMOVED happened"] {
            assert!(table.contains(expected), "missing {expected} in\n{table}");
        }
    }
}
