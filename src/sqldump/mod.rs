//! Parsing of `INSERT INTO articles` dumps into statements and rows.

pub mod row;
pub mod segment;
pub mod values;

pub use row::{Article, RowBuilder};
pub use segment::SplitMode;

pub fn parse_row(stmt: &str, builder: RowBuilder) -> Option<Article> {
    let list = values::value_list(stmt)?;
    builder.build(values::literals(list))
}
