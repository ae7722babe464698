//! MySQL table definition parsing.
//!
//! MySQL has no "move column" statement: a reorder must re-issue each
//! column's full definition with `MODIFY COLUMN ... FIRST/AFTER`. The only
//! lossless source for those definitions is the server's own
//! `SHOW CREATE TABLE` rendering; `SHOW FULL COLUMNS` drops the exact
//! `DEFAULT`/`COMMENT` formatting a `MODIFY` must repeat. This module
//! recovers each column's verbatim clause from that text.

use std::collections::HashMap;

/// Extracts each column's verbatim clause from a table definition text.
///
/// Only lines whose first non-space character is a backtick are columns;
/// `PRIMARY KEY (...)`, `KEY ...` and `CONSTRAINT ...` lines are skipped.
/// The clause is everything after the quoted name, exactly as the server
/// rendered it (type, nullability, `DEFAULT`, `COMMENT`, ...), with a
/// single trailing comma stripped.
///
/// Returns an empty map when the outermost parentheses cannot be located;
/// callers must treat that as "unable to plan", never as "no columns".
#[must_use]
pub fn parse_column_clauses(definition: &str) -> HashMap<String, String> {
    let mut clauses = HashMap::new();

    let Some(body) = definition_body(definition) else {
        return clauses;
    };

    for line in body.lines() {
        let line = line.trim();
        let Some(rest) = line.strip_prefix('`') else {
            continue;
        };
        let Some((name, clause)) = rest.split_once('`') else {
            continue;
        };
        let clause = clause.strip_suffix(',').unwrap_or(clause).trim();
        if name.is_empty() || clause.is_empty() {
            continue;
        }
        clauses.insert(name.to_string(), clause.to_string());
    }

    clauses
}

/// Returns the text between the outermost parentheses, if both exist.
fn definition_body(definition: &str) -> Option<&str> {
    let open = definition.find('(')?;
    let close = definition.rfind(')')?;
    if close <= open {
        return None;
    }
    Some(&definition[open + 1..close])
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSTS_DEFINITION: &str = "CREATE TABLE `posts` (\n\
        \x20 `id` int NOT NULL AUTO_INCREMENT,\n\
        \x20 `title` varchar(255) NOT NULL,\n\
        \x20 `body` text,\n\
        \x20 `created_at` timestamp NOT NULL DEFAULT CURRENT_TIMESTAMP,\n\
        \x20 PRIMARY KEY (`id`),\n\
        \x20 KEY `idx_title` (`title`)\n\
        ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4";

    #[test]
    fn test_extracts_column_clauses_verbatim() {
        let clauses = parse_column_clauses(POSTS_DEFINITION);
        assert_eq!(clauses.len(), 4);
        assert_eq!(clauses["id"], "int NOT NULL AUTO_INCREMENT");
        assert_eq!(clauses["title"], "varchar(255) NOT NULL");
        assert_eq!(clauses["body"], "text");
        assert_eq!(
            clauses["created_at"],
            "timestamp NOT NULL DEFAULT CURRENT_TIMESTAMP"
        );
    }

    #[test]
    fn test_skips_key_and_constraint_lines() {
        let clauses = parse_column_clauses(POSTS_DEFINITION);
        assert!(!clauses.contains_key("idx_title"));
        assert!(!clauses.keys().any(|k| k.contains("PRIMARY")));
    }

    #[test]
    fn test_keeps_comment_and_collate_in_clause() {
        let definition = "CREATE TABLE `t` (\n\
            \x20 `note` varchar(64) COLLATE utf8mb4_bin DEFAULT 'n/a' COMMENT 'free text',\n\
            \x20 PRIMARY KEY (`note`)\n\
            )";
        let clauses = parse_column_clauses(definition);
        assert_eq!(
            clauses["note"],
            "varchar(64) COLLATE utf8mb4_bin DEFAULT 'n/a' COMMENT 'free text'"
        );
    }

    #[test]
    fn test_missing_parentheses_yields_empty_map() {
        assert!(parse_column_clauses("nonsense without parens").is_empty());
        assert!(parse_column_clauses("only close )").is_empty());
        assert!(parse_column_clauses(") reversed (").is_empty());
        assert!(parse_column_clauses("").is_empty());
    }

    #[test]
    fn test_single_column_table() {
        let clauses =
            parse_column_clauses("CREATE TABLE `t` (\n  `id` int NOT NULL AUTO_INCREMENT,\n  PRIMARY KEY (`id`)\n)");
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses["id"], "int NOT NULL AUTO_INCREMENT");
    }
}
