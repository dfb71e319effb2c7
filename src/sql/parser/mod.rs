//! Line-oriented recognizer for table-definition source.
//!
//! Every source line is classified by the declaration markers it contains
//! and turned into one typed [`Statement`]. All positional assumptions about
//! the source dialect live in this module.

use enum_as_inner::EnumAsInner;

use crate::{catalog::defs::Relation, core::ConvertError};

pub const CREATE_TABLE: &str = "CREATE TABLE";
pub const PRIMARY_KEY: &str = "PRIMARY KEY";
pub const FOREIGN_KEY: &str = "FOREIGN KEY";
pub const REFERENCES: &str = "REFERENCES";
pub const CONSTRAINT: &str = "CONSTRAINT";
pub const INDEX: &str = "INDEX";
pub const INTERLEAVE: &str = "INTERLEAVE";
pub const NOT_NULL: &str = "NOT NULL";

/// Keywords that end the referenced column list of a foreign key.
const REFERENCE_TERMINATORS: &[&str] = &["ON", "NOT", "MATCH", "ENFORCED"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LineKind {
    CreateTable,
    PrimaryKey,
    ForeignKey,
    Ignored,
}

lazy_static! {
    /// Checked in order, a line takes the kind of the first entry whose
    /// markers all appear on it. Lines matching nothing are column declarations.
    static ref LINE_KINDS: Vec<(Vec<&'static str>, LineKind)> = vec![
        (vec![CREATE_TABLE], LineKind::CreateTable),
        (vec![PRIMARY_KEY], LineKind::PrimaryKey),
        (vec![FOREIGN_KEY, REFERENCES], LineKind::ForeignKey),
        (vec![CONSTRAINT], LineKind::Ignored),
        (vec![INDEX], LineKind::Ignored),
        (vec![INTERLEAVE], LineKind::Ignored),
    ];
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnDecl {
    pub name: String,
    pub data_type: String,
    pub not_null: bool,
    /// Set by an inline `PRIMARY KEY` without a column list.
    pub primary_key: bool,
    /// Inline `REFERENCES table (column)` targets.
    pub references: Vec<Relation>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForeignKeyDecl {
    pub column: String,
    pub relation: Relation,
}

#[derive(Clone, Debug, PartialEq, Eq, EnumAsInner)]
pub enum Statement {
    CreateTable(String),
    Column(ColumnDecl),
    /// Name of the key column.
    PrimaryKey(String),
    /// One entry per constrained column, paired with its target.
    ForeignKey(Vec<ForeignKeyDecl>),
    /// `REFERENCES table (column)` continuing the previous column line.
    Reference(Relation),
    /// Constraint, index and closing lines.
    Other,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedLine {
    /// 1-based source line number.
    pub line_no: usize,
    pub statement: Statement,
}

/// Classify every non-blank line of `source`.
pub fn parse_lines(source: &str) -> Result<Vec<ParsedLine>, ConvertError> {
    let mut parsed = vec![];

    for (index, raw) in source.lines().enumerate() {
        let line_no = index + 1;
        if let Some(statement) = parse_line(line_no, raw)? {
            parsed.push(ParsedLine { line_no, statement });
        }
    }

    Ok(parsed)
}

/// Classify a single line, `None` for blank lines.
pub fn parse_line(line_no: usize, raw: &str) -> Result<Option<Statement>, ConvertError> {
    let line = raw.trim();
    if line.replace(',', "").trim().is_empty() {
        return Ok(None);
    }

    if line.starts_with("--") || is_punctuation(line) {
        return Ok(Some(Statement::Other));
    }

    let kind = LINE_KINDS
        .iter()
        .find(|(markers, _)| markers.iter().all(|marker| line.contains(marker)))
        .map(|(_, kind)| *kind);

    let statement = match kind {
        Some(LineKind::CreateTable) => Statement::CreateTable(parse_table_name(line_no, line)?),
        Some(LineKind::PrimaryKey) if is_key_clause(line) => match first_group(line) {
            Some(group) => Statement::PrimaryKey(parse_key_column(line_no, group)?),
            None => return Err(ConvertError::malformed(line_no, "missing primary key column")),
        },
        // column with an inline key, its type may carry its own parentheses
        Some(LineKind::PrimaryKey) => Statement::Column(parse_column(line_no, line)?),
        Some(LineKind::ForeignKey) => Statement::ForeignKey(parse_foreign_key(line_no, line)?),
        Some(LineKind::Ignored) => Statement::Other,
        // closing `)` of a column list, possibly followed by table options
        None if line.starts_with(')') => Statement::Other,
        None if line.starts_with(REFERENCES) => {
            Statement::Reference(parse_continued_reference(line_no, line)?)
        }
        None => Statement::Column(parse_column(line_no, line)?),
    };

    Ok(Some(statement))
}

/// Table-level key declaration rather than a column carrying `PRIMARY KEY`.
fn is_key_clause(line: &str) -> bool {
    line.starts_with(PRIMARY_KEY) || line.starts_with(CONSTRAINT) || line.starts_with(')')
}

fn is_punctuation(line: &str) -> bool {
    line.chars()
        .all(|c| matches!(c, '(' | ')' | ';' | ',') || c.is_whitespace())
}

/// Split on whitespace, treating parentheses, commas and semicolons as separators.
fn separated_words(line: &str) -> Vec<&str> {
    line.split(|c: char| c.is_whitespace() || matches!(c, '(' | ')' | ',' | ';'))
        .filter(|word| !word.is_empty())
        .collect()
}

/// Text inside the first parenthesized group.
fn first_group(line: &str) -> Option<&str> {
    let start = line.find('(')?;
    let rest = &line[start + 1..];
    Some(rest.split(')').next().unwrap_or(rest))
}

fn parse_table_name(line_no: usize, line: &str) -> Result<String, ConvertError> {
    let words = line.split_whitespace().collect::<Vec<_>>();
    let mut position = 2;
    if words.get(2..5) == Some(&["IF", "NOT", "EXISTS"][..]) {
        position = 5;
    }

    let name = words
        .get(position)
        .map(|word| word.split('(').next().unwrap_or_default())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ConvertError::malformed(line_no, "missing table name"))?;

    Ok(name.to_string())
}

/// Composite keys are not split, only the first named column is kept.
fn parse_key_column(line_no: usize, group: &str) -> Result<String, ConvertError> {
    separated_words(group)
        .first()
        .map(|name| name.to_string())
        .ok_or_else(|| ConvertError::malformed(line_no, "empty primary key column list"))
}

fn parse_column(line_no: usize, line: &str) -> Result<ColumnDecl, ConvertError> {
    let stripped = line.replace(',', "");
    let words = stripped.split_whitespace().collect::<Vec<_>>();
    let (name, data_type) = match words.as_slice() {
        [name, data_type, ..] => (name.to_string(), data_type.to_string()),
        _ => {
            return Err(ConvertError::malformed(
                line_no,
                format!("expected column name and type, found `{}`", line),
            ))
        }
    };

    let references = if line.contains(REFERENCES) {
        let words = separated_words(line);
        let (table, columns) = parse_reference_target(line_no, &words)?;
        columns
            .into_iter()
            .take(1)
            .map(|column| Relation::new(table, column))
            .collect()
    } else {
        vec![]
    };

    Ok(ColumnDecl {
        name,
        data_type,
        not_null: stripped.contains(NOT_NULL),
        primary_key: line.contains(PRIMARY_KEY),
        references,
    })
}

fn parse_continued_reference(line_no: usize, line: &str) -> Result<Relation, ConvertError> {
    let words = separated_words(line);
    let (table, columns) = parse_reference_target(line_no, &words)?;
    Ok(Relation::new(table, columns[0]))
}

/// `[CONSTRAINT name] FOREIGN KEY (a, ...) REFERENCES table (x, ...)`
fn parse_foreign_key(line_no: usize, line: &str) -> Result<Vec<ForeignKeyDecl>, ConvertError> {
    let words = separated_words(line);
    let key_position = words
        .windows(2)
        .position(|pair| pair == ["FOREIGN", "KEY"])
        .ok_or_else(|| ConvertError::malformed(line_no, "missing FOREIGN KEY"))?;
    let references_position = words
        .iter()
        .position(|word| *word == REFERENCES)
        .filter(|position| *position >= key_position + 2)
        .ok_or_else(|| ConvertError::malformed(line_no, "REFERENCES before FOREIGN KEY"))?;

    let columns = &words[key_position + 2..references_position];
    let (table, targets) = parse_reference_target(line_no, &words)?;

    if columns.is_empty() || columns.len() != targets.len() {
        return Err(ConvertError::malformed(
            line_no,
            format!(
                "foreign key has {} column(s) but references {}",
                columns.len(),
                targets.len()
            ),
        ));
    }

    Ok(columns
        .iter()
        .zip(targets)
        .map(|(column, target)| ForeignKeyDecl {
            column: column.to_string(),
            relation: Relation::new(table, target),
        })
        .collect())
}

/// Table and columns following the `REFERENCES` keyword.
fn parse_reference_target<'a>(
    line_no: usize,
    words: &[&'a str],
) -> Result<(&'a str, Vec<&'a str>), ConvertError> {
    let position = words
        .iter()
        .position(|word| *word == REFERENCES)
        .ok_or_else(|| ConvertError::malformed(line_no, "missing REFERENCES"))?;

    let table = words
        .get(position + 1)
        .copied()
        .ok_or_else(|| ConvertError::malformed(line_no, "missing referenced table"))?;
    let columns = words[position + 2..]
        .iter()
        .copied()
        .take_while(|word| !REFERENCE_TERMINATORS.contains(word))
        .collect::<Vec<_>>();

    if columns.is_empty() {
        return Err(ConvertError::malformed(line_no, "missing referenced column"));
    }

    Ok((table, columns))
}
