use log::{debug, warn};

use super::{
    parser::{ParsedLine, Statement},
    scope::scoped,
};
use crate::catalog::{defs::Relation, Catalog};

/// Attach primary keys and foreign-key references to the extracted columns.
pub fn resolve(catalog: &mut Catalog, lines: &[ParsedLine]) {
    resolve_primary_keys(catalog, lines);
    resolve_foreign_keys(catalog, lines);
}

/// Mark the key column of every table. Only the first column named in a
/// composite key is marked.
pub fn resolve_primary_keys(catalog: &mut Catalog, lines: &[ParsedLine]) {
    for (table, line) in scoped(lines) {
        let column = match &line.statement {
            Statement::PrimaryKey(column) => column,
            Statement::Column(decl) if decl.primary_key => &decl.name,
            _ => continue,
        };

        if catalog.mark_primary_key(table, column) {
            debug!("line {}: primary key {}.{}", line.line_no, table, column);
        } else {
            warn!(
                "line {}: primary key column {}.{} does not exist",
                line.line_no, table, column
            );
        }
    }
}

/// Attach references. A standalone `REFERENCES` line belongs to the column
/// declared just before it in the same table.
pub fn resolve_foreign_keys(catalog: &mut Catalog, lines: &[ParsedLine]) {
    let mut last_column: Option<&str> = None;

    for (table, line) in scoped(lines) {
        let references: Vec<(&str, &Relation)> = match &line.statement {
            Statement::CreateTable(_) => {
                last_column = None;
                continue;
            }
            Statement::ForeignKey(decls) => decls
                .iter()
                .map(|decl| (decl.column.as_str(), &decl.relation))
                .collect(),
            Statement::Column(decl) => {
                last_column = Some(decl.name.as_str());
                decl.references
                    .iter()
                    .map(|relation| (decl.name.as_str(), relation))
                    .collect()
            }
            Statement::Reference(relation) => match last_column {
                Some(column) => vec![(column, relation)],
                None => {
                    warn!(
                        "line {}: reference to {}.{} does not follow a column",
                        line.line_no, relation.table, relation.column
                    );
                    continue;
                }
            },
            _ => continue,
        };

        for (column, relation) in references {
            if catalog.add_relation(table, column, relation.clone()) {
                debug!(
                    "line {}: {}.{} references {}.{}",
                    line.line_no, table, column, relation.table, relation.column
                );
            } else {
                warn!(
                    "line {}: foreign key column {}.{} does not exist",
                    line.line_no, table, column
                );
            }
        }
    }
}
