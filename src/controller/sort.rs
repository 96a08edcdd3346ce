//! Column sort state held in the `sort`/`order` hidden fields.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// Value written to the order field.
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }

    /// Exact field values only; anything else is `None`.
    pub fn parse(field: &str) -> Option<Self> {
        match field {
            "asc" => Some(SortOrder::Ascending),
            "desc" => Some(SortOrder::Descending),
            _ => None,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub column: String,
    pub order: SortOrder,
}

impl SortState {
    /// State after clicking `column`, given the raw field values.
    ///
    /// Same column flips the order; only a stored `desc` flips to ascending.
    /// A different column always starts descending.
    pub fn after_click(current_column: &str, current_order: &str, column: &str) -> Self {
        let order = if current_column == column {
            match SortOrder::parse(current_order) {
                Some(SortOrder::Descending) => SortOrder::Ascending,
                _ => SortOrder::Descending,
            }
        } else {
            SortOrder::Descending
        };
        Self {
            column: column.to_string(),
            order,
        }
    }
}
