use serde::{Deserialize, Serialize};

/// Binary column classification inferred from cell values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    Numeric,
    Text,
}

impl ColumnType {
    /// SQL type name used in generated DDL.
    pub fn sql_name(self) -> &'static str {
        match self {
            ColumnType::Numeric => "NUMERIC",
            ColumnType::Text => "VARCHAR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_names() {
        assert_eq!(ColumnType::Numeric.sql_name(), "NUMERIC");
        assert_eq!(ColumnType::Text.sql_name(), "VARCHAR");
    }
}
