use std::fmt;
use once_cell::sync::Lazy;
use regex::Regex;

static VALUES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)VALUES\s*\((.*)\);").unwrap());

/// The text between `VALUES (` and the last `);` of a statement.
pub fn value_list(stmt: &str) -> Option<&str> {
    VALUES_RE.captures(stmt).and_then(|c| c.get(1)).map(|m| m.as_str())
}

/// Splits a value list on top-level commas. Quotes and parentheses are kept
/// in the tokens; only surrounding whitespace is removed.
pub fn split_values(list: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut buf = String::new();
    let mut in_string = false;
    let mut escape = false;
    let mut depth = 0usize;

    for c in list.chars() {
        if escape {
            buf.push(c);
            escape = false;
            continue;
        }
        match c {
            '\\' => {
                buf.push(c);
                escape = true;
                continue;
            },
            '\'' => in_string = !in_string,
            ',' if !in_string && depth == 0 => {
                values.push(buf.trim().to_owned());
                buf.clear();
                continue;
            },
            '(' if !in_string => depth += 1,
            ')' if !in_string => depth = depth.saturating_sub(1),
            _ => {}
        }
        buf.push(c);
    }

    if !buf.trim().is_empty() {
        values.push(buf.trim().to_owned());
    }

    values
}

/// A cleaned value token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Literal {
    Quoted(String),
    Bare(String)
}

impl Literal {
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        if token == "'" {
            return Self::Quoted(String::new());
        }
        match token.strip_prefix('\'').and_then(|t| t.strip_suffix('\'')) {
            Some(inner) => Self::Quoted(inner.replace("''", "'")),
            None => Self::Bare(token.to_owned())
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Self::Quoted(s) | Self::Bare(s) => s
        }
    }
}

impl fmt::Display for Literal {
    /// Renders the literal back into SQL.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quoted(s) => write!(f, "'{}'", s.replace('\'', "''")),
            Self::Bare(s) => f.write_str(s)
        }
    }
}

pub fn literals(list: &str) -> Vec<Literal> {
    split_values(list).iter().map(|t| Literal::parse(t)).collect()
}
