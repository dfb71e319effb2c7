use super::parser::ParsedLine;

/// Pair every parsed line with the table active at that line.
///
/// The active table is the one named by the most recent `CREATE TABLE`,
/// or the empty string before the first one.
pub fn scoped<'a>(lines: &'a [ParsedLine]) -> impl Iterator<Item = (&'a str, &'a ParsedLine)> + 'a {
    let mut current_table = "";
    lines.iter().map(move |line| {
        if let Some(name) = line.statement.as_create_table() {
            current_table = name.as_str();
        }
        (current_table, line)
    })
}
