use std::fmt::Display;

use crate::catalog::{
    defs::{ColumnDefinition, Relation, TableDefinition},
    Catalog,
};

const INDENT: &str = "  ";

impl Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ref: > {}.{}", self.table, self.column)
    }
}

impl Display for ColumnDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.data_type)?;

        let mut attributes = vec![];
        if self.is_not_null {
            attributes.push("not null".to_string());
        }
        if self.is_primary_key {
            attributes.push("pk".to_string());
        }
        attributes.extend(self.relations.iter().map(|relation| relation.to_string()));

        if !attributes.is_empty() {
            write!(f, " [{}]", attributes.join(", "))?;
        }

        Ok(())
    }
}

pub fn emit_table(catalog: &Catalog, table: &TableDefinition) -> String {
    let mut block = format!("table {} {{\n", table.name);
    for column in catalog.table_columns(table) {
        block.push_str(&format!("{}{}\n", INDENT, column));
    }
    block.push_str("}\n");
    block
}

/// Tables in first-seen order, separated by a blank line.
pub fn emit(catalog: &Catalog) -> String {
    catalog
        .tables
        .iter()
        .map(|table| emit_table(catalog, table))
        .collect::<Vec<_>>()
        .join("\n")
}
