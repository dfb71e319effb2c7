use log::warn;

use self::defs::{ColumnDefinition, Relation, TableDefinition};

pub mod defs;

/// In-memory schema model built by one conversion run.
///
/// Columns live in a single arena; tables keep their first-seen order and
/// refer to their columns by arena index.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub columns: Vec<ColumnDefinition>,
    pub tables: Vec<TableDefinition>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a table. Returns `false` if a table with this name was
    /// already registered, in which case the existing entry is kept.
    pub fn create_table(&mut self, table_name: &str) -> bool {
        if self.exists_table(table_name) {
            return false;
        }

        self.tables.push(TableDefinition {
            name: table_name.to_string(),
            columns: vec![],
        });

        true
    }

    pub fn exists_table(&self, table_name: &str) -> bool {
        self.tables.iter().any(|table| table.name == table_name)
    }

    pub fn list_tables(&self) -> Vec<String> {
        self.tables.iter().map(|table| table.name.clone()).collect()
    }

    /// Append a column to the arena and index it under its table.
    /// Columns whose table is unknown stay in the arena unindexed.
    pub fn add_column(&mut self, column_def: ColumnDefinition) -> usize {
        let index = self.columns.len();

        match self
            .tables
            .iter_mut()
            .find(|table| table.name == column_def.table)
        {
            Some(table) => table.columns.push(index),
            None => warn!(
                "column {} is declared outside of any table and will not be emitted",
                column_def.name
            ),
        }

        self.columns.push(column_def);
        index
    }

    /// First column named `column_name` in `table_name`.
    pub fn find_column(&self, table_name: &str, column_name: &str) -> Option<usize> {
        self.tables
            .iter()
            .find(|table| table.name == table_name)?
            .columns
            .iter()
            .copied()
            .find(|index| self.columns[*index].name == column_name)
    }

    pub fn table_columns<'a>(
        &'a self,
        table: &'a TableDefinition,
    ) -> impl Iterator<Item = &'a ColumnDefinition> + 'a {
        table.columns.iter().map(move |index| &self.columns[*index])
    }

    pub fn mark_primary_key(&mut self, table_name: &str, column_name: &str) -> bool {
        match self.find_column(table_name, column_name) {
            Some(index) => {
                self.columns[index].is_primary_key = true;
                true
            }
            None => false,
        }
    }

    pub fn add_relation(&mut self, table_name: &str, column_name: &str, relation: Relation) -> bool {
        match self.find_column(table_name, column_name) {
            Some(index) => {
                let column = &mut self.columns[index];
                column.relations.push(relation);
                column.is_foreign_key = true;
                true
            }
            None => false,
        }
    }
}
