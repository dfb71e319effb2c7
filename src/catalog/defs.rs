#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Relation {
    pub table: String,
    pub column: String,
}

impl Relation {
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            column: column.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnDefinition {
    pub name: String,
    pub data_type: String,
    /// Empty when declared outside any table.
    pub table: String,
    pub is_primary_key: bool,
    pub is_not_null: bool,
    pub is_foreign_key: bool,
    pub relations: Vec<Relation>,
}

impl ColumnDefinition {
    pub fn new(
        table: impl Into<String>,
        name: impl Into<String>,
        data_type: impl Into<String>,
        is_not_null: bool,
    ) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            table: table.into(),
            is_not_null,
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableDefinition {
    pub name: String,
    pub columns: Vec<usize>,
}
