use std::borrow::Cow;

const MARKER: &str = "INSERT INTO articles";
const NEXT: &str = "INSERT INTO";

/// Statements of a dump in source order, as slices of the dump.
///
/// A statement runs from `INSERT INTO articles` up to the first `;` that is
/// followed by another `INSERT INTO` or by the end of the text. Quotes are not
/// tracked at this level, so a literal containing `;INSERT INTO` will cut a
/// statement short.
#[derive(Clone, Debug)]
pub struct Statements<'a> {
    text: &'a str,
    pos: usize
}

pub fn statements(text: &str) -> Statements<'_> {
    Statements { text, pos: 0 }
}

fn terminator(body: &str) -> Option<usize> {
    body.match_indices(';')
        .map(|(i, _)| i + 1)
        .find(|&end| {
            let after = body[end..].trim_start();
            after.is_empty() || after.starts_with(NEXT)
        })
}

impl<'a> Iterator for Statements<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let start = self.pos + self.text.get(self.pos..)?.find(MARKER)?;
        let body = &self.text[start..];

        match terminator(body) {
            Some(end) => {
                self.pos = start + end;
                Some(&body[..end])
            },
            None => {
                // any later marker would be looking at a subset of the same semicolons
                self.pos = self.text.len();
                None
            }
        }
    }
}

/// Groups lines into statements: a line starting with `INSERT INTO articles`
/// opens one, a line ending in `;` closes it. That includes the opening line,
/// so comments after a one-line statement are never pulled into it.
pub fn statements_by_line(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        let trimmed = line.trim();
        if trimmed.starts_with(MARKER) {
            if !current.is_empty() {
                out.push(current.join("\n"));
                current.clear();
            }
            current.push(line);
        } else if !current.is_empty() {
            current.push(line);
        } else {
            continue;
        }

        if trimmed.ends_with(';') {
            out.push(current.join("\n"));
            current.clear();
        }
    }

    if !current.is_empty() {
        out.push(current.join("\n"));
    }

    out
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SplitMode {
    #[default]
    Pattern,
    Lines
}

impl SplitMode {
    pub fn from_flag(by_line: bool) -> Self {
        if by_line { Self::Lines } else { Self::Pattern }
    }

    pub fn split(self, text: &str) -> Vec<Cow<'_, str>> {
        match self {
            Self::Pattern => statements(text).map(Cow::Borrowed).collect(),
            Self::Lines => statements_by_line(text).into_iter().map(Cow::Owned).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUMP: &str = "\
-- generated
INSERT INTO articles (title, slug) VALUES ('One', 'one');
INSERT INTO articles (title, slug) VALUES ('Two', 'two');

INSERT INTO articles (title, slug)
VALUES ('Three', 'three');
";

    #[test]
    fn yields_every_statement_in_order() {
        let got = statements(DUMP).collect::<Vec<_>>();
        assert_eq!(got.len(), 3);
        assert_eq!(got[0], "INSERT INTO articles (title, slug) VALUES ('One', 'one');");
        assert_eq!(got[1], "INSERT INTO articles (title, slug) VALUES ('Two', 'two');");
        assert_eq!(got[2], "INSERT INTO articles (title, slug)\nVALUES ('Three', 'three');");
    }

    #[test]
    fn is_restartable() {
        let it = statements(DUMP);
        assert_eq!(it.clone().count(), 3);
        assert_eq!(it.count(), 3);
    }

    #[test]
    fn semicolon_inside_literal_does_not_split_when_not_followed_by_insert() {
        let dump = "INSERT INTO articles (content) VALUES ('a; b; c');";
        assert_eq!(statements(dump).collect::<Vec<_>>(), vec![dump]);
    }

    #[test]
    fn terminator_may_be_followed_by_other_tables() {
        let dump = "INSERT INTO articles VALUES (1);\nINSERT INTO tags VALUES (2);";
        assert_eq!(statements(dump).collect::<Vec<_>>(), vec!["INSERT INTO articles VALUES (1);"]);
    }

    #[test]
    fn unterminated_statement_is_dropped() {
        assert_eq!(statements("INSERT INTO articles VALUES (1)").count(), 0);
        assert_eq!(statements("INSERT INTO articles VALUES (1); -- trailing").count(), 0);
        assert_eq!(statements("").count(), 0);
    }

    #[test]
    fn statement_without_own_terminator_runs_into_the_next() {
        let dump = "INSERT INTO articles VALUES (1)\nINSERT INTO articles VALUES (2);";
        assert_eq!(statements(dump).collect::<Vec<_>>(), vec![dump]);
    }

    #[test]
    fn by_line_groups_multiline_statements() {
        let got = statements_by_line(DUMP);
        assert_eq!(got.len(), 3);
        assert_eq!(got[2], "INSERT INTO articles (title, slug)\nVALUES ('Three', 'three');");
    }

    #[test]
    fn by_line_flushes_unterminated_tail() {
        let got = statements_by_line("INSERT INTO articles VALUES (1);\nINSERT INTO articles VALUES (2,\n3)");
        assert_eq!(got, vec!["INSERT INTO articles VALUES (1);", "INSERT INTO articles VALUES (2,\n3)"]);
    }

    #[test]
    fn by_line_closes_one_line_statement_on_its_own_line() {
        let got = statements_by_line("INSERT INTO articles VALUES (1);\n-- note\n\nINSERT INTO articles VALUES (2);");
        assert_eq!(got, vec!["INSERT INTO articles VALUES (1);", "INSERT INTO articles VALUES (2);"]);
    }

    #[test]
    fn modes_agree_on_well_formed_dump() {
        let a = SplitMode::Pattern.split(DUMP);
        let b = SplitMode::Lines.split(DUMP);
        assert_eq!(a, b);
    }
}
