use log::{debug, warn};

use super::{parser::ParsedLine, parser::Statement, scope::scoped};
use crate::catalog::{defs::ColumnDefinition, Catalog};

/// Build the table list and the column records, in source order.
///
/// Only `CREATE TABLE` and column statements are looked at. Key and
/// reference declarations are left to the resolver.
pub fn extract(lines: &[ParsedLine]) -> Catalog {
    let mut catalog = Catalog::new();

    for (table, line) in scoped(lines) {
        match &line.statement {
            Statement::CreateTable(name) => {
                if !catalog.create_table(name) {
                    warn!(
                        "line {}: table {} is declared again, columns are merged",
                        line.line_no, name
                    );
                }
            }
            Statement::Column(decl) => {
                if catalog.find_column(table, &decl.name).is_some() {
                    warn!(
                        "line {}: duplicate column {}.{}, keys resolve to the first one",
                        line.line_no, table, decl.name
                    );
                }
                debug!("line {}: column {}.{}", line.line_no, table, decl.name);

                catalog.add_column(ColumnDefinition::new(
                    table,
                    &decl.name,
                    &decl.data_type,
                    decl.not_null,
                ));
            }
            _ => {}
        }
    }

    catalog
}
