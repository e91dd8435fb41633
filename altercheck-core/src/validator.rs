//! ADD COLUMN statement predicate.

/// Returns true when `statement` looks like a well-formed
/// `ALTER TABLE <ident> ADD COLUMN <ident> <type>` alteration.
///
/// Case-insensitive, tolerates arbitrary whitespace and newlines, and an
/// optional trailing semicolon. Returns false on empty or malformed
/// input; never panics.
pub fn is_add_column_alter(statement: &str) -> bool {
    let trimmed = statement.trim().trim_end_matches(';').trim_end();
    let mut tokens = trimmed.split_whitespace();

    if !next_is_keyword(&mut tokens, "ALTER") {
        return false;
    }
    if !next_is_keyword(&mut tokens, "TABLE") {
        return false;
    }
    let Some(table) = tokens.next() else {
        return false;
    };
    if !is_identifier(table) {
        return false;
    }
    if !next_is_keyword(&mut tokens, "ADD") {
        return false;
    }
    if !next_is_keyword(&mut tokens, "COLUMN") {
        return false;
    }
    let Some(column) = tokens.next() else {
        return false;
    };
    if !is_identifier(column) {
        return false;
    }
    // The column clause needs at least a type token after the name.
    tokens.next().is_some()
}

fn next_is_keyword<'a>(tokens: &mut impl Iterator<Item = &'a str>, keyword: &str) -> bool {
    tokens
        .next()
        .is_some_and(|token| token.eq_ignore_ascii_case(keyword))
}

/// Bare or quoted SQL identifier. Bare identifiers start with a letter
/// or underscore; quoted forms are `"x"`, `` `x` ``, or `[x]`.
fn is_identifier(token: &str) -> bool {
    if let Some(inner) = quoted_inner(token) {
        return !inner.is_empty();
    }
    let mut chars = token.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_ascii_alphabetic() && first != '_' {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn quoted_inner(token: &str) -> Option<&str> {
    let inner = token
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .or_else(|| token.strip_prefix('`').and_then(|t| t.strip_suffix('`')))
        .or_else(|| token.strip_prefix('[').and_then(|t| t.strip_suffix(']')))?;
    Some(inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_canonical_statement() {
        assert!(is_add_column_alter(
            "ALTER TABLE person ADD COLUMN age INTEGER;"
        ));
    }

    #[test]
    fn accepts_without_trailing_semicolon() {
        assert!(is_add_column_alter("ALTER TABLE person ADD COLUMN age INTEGER"));
    }

    #[test]
    fn accepts_mixed_case_and_newlines() {
        assert!(is_add_column_alter(
            "alter\n  TaBlE\tperson\n ADD\n column age\n integer ;"
        ));
    }

    #[test]
    fn accepts_quoted_identifiers() {
        assert!(is_add_column_alter(
            "ALTER TABLE \"person\" ADD COLUMN [age] INTEGER"
        ));
        assert!(is_add_column_alter("ALTER TABLE `person` ADD COLUMN age TEXT"));
    }

    #[test]
    fn accepts_multi_token_column_clause() {
        assert!(is_add_column_alter(
            "ALTER TABLE person ADD COLUMN age INTEGER NOT NULL DEFAULT 0"
        ));
    }

    #[test]
    fn rejects_empty_and_blank() {
        assert!(!is_add_column_alter(""));
        assert!(!is_add_column_alter("   \n\t  "));
        assert!(!is_add_column_alter(";"));
    }

    #[test]
    fn rejects_missing_keyword_pairs() {
        assert!(!is_add_column_alter("TABLE person ADD COLUMN age INTEGER"));
        assert!(!is_add_column_alter("ALTER person ADD COLUMN age INTEGER"));
        assert!(!is_add_column_alter("ALTER TABLE person ADD age INTEGER"));
        assert!(!is_add_column_alter("ALTER TABLE person COLUMN age INTEGER"));
        assert!(!is_add_column_alter("ALTER TABLE ADD COLUMN age INTEGER"));
    }

    #[test]
    fn rejects_missing_column_clause() {
        assert!(!is_add_column_alter("ALTER TABLE person ADD COLUMN"));
        assert!(!is_add_column_alter("ALTER TABLE person ADD COLUMN age"));
        assert!(!is_add_column_alter("ALTER TABLE person ADD COLUMN age;"));
    }

    #[test]
    fn rejects_other_statements() {
        assert!(!is_add_column_alter("SELECT * FROM person"));
        assert!(!is_add_column_alter("ALTER TABLE person DROP COLUMN age"));
        assert!(!is_add_column_alter("ALTER TABLE person RENAME TO people"));
    }

    #[test]
    fn rejects_bad_identifiers() {
        assert!(!is_add_column_alter("ALTER TABLE 1person ADD COLUMN age INTEGER"));
        assert!(!is_add_column_alter("ALTER TABLE person ADD COLUMN 1age INTEGER"));
        assert!(!is_add_column_alter("ALTER TABLE \"\" ADD COLUMN age INTEGER"));
    }
}
