//! CSV serialization.
//!
//! Exports an ordered sequence of records as RFC-4180-style CSV with a
//! caller-chosen column projection. The two projections the admin page uses
//! ship as constants ([`AGENT_COLUMNS`] and [`ROOMS_COLUMNS`]), but any
//! `&[Column]` slice works.
//!
//! ## Contract
//!
//! - Header row first; data rows follow in input order.
//! - Every row, header included, ends with a single `\n`.
//! - Text fields are quoted only when they contain a comma, quote, or line
//!   break; embedded quotes are escaped by doubling.
//! - Numeric fields are emitted unquoted in base decimal form. Thousands
//!   separators are a display concern and never appear here.
//! - Empty input produces an empty string (no header, no file).

use crate::model::Property;

/// One exportable field of a [`Property`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Id,
    Name,
    Project,
    Type,
    Building,
    Unit,
    Area,
    Price,
    Status,
    Agent,
    Bedrooms,
    Bathrooms,
}

/// The listing-table export: 10 columns ending in the agent.
pub const AGENT_COLUMNS: [Column; 10] = [
    Column::Id,
    Column::Name,
    Column::Project,
    Column::Type,
    Column::Building,
    Column::Unit,
    Column::Area,
    Column::Price,
    Column::Status,
    Column::Agent,
];

/// The layout export: 11 columns ending in bedrooms/bathrooms.
pub const ROOMS_COLUMNS: [Column; 11] = [
    Column::Id,
    Column::Name,
    Column::Project,
    Column::Type,
    Column::Building,
    Column::Unit,
    Column::Area,
    Column::Price,
    Column::Status,
    Column::Bedrooms,
    Column::Bathrooms,
];

impl Column {
    pub fn header(self) -> &'static str {
        match self {
            Column::Id => "ID",
            Column::Name => "Name",
            Column::Project => "Project",
            Column::Type => "Type",
            Column::Building => "Building",
            Column::Unit => "Unit",
            Column::Area => "Area",
            Column::Price => "Price",
            Column::Status => "Status",
            Column::Agent => "Agent",
            Column::Bedrooms => "Bedrooms",
            Column::Bathrooms => "Bathrooms",
        }
    }

    fn is_numeric(self) -> bool {
        matches!(self, Column::Area | Column::Price | Column::Bathrooms)
    }

    fn value(self, record: &Property) -> String {
        match self {
            Column::Id => record.id.clone(),
            Column::Name => record.name.clone(),
            Column::Project => record.project.clone(),
            Column::Type => record.kind.clone(),
            Column::Building => record.building.clone(),
            Column::Unit => record.unit.clone(),
            Column::Area => format_number(record.area),
            Column::Price => format_number(record.price),
            Column::Status => record.status.to_string(),
            Column::Agent => record.agent.clone(),
            Column::Bedrooms => record.bedrooms.clone(),
            Column::Bathrooms => record.bathrooms.to_string(),
        }
    }
}

/// Serialize `records` with the given projection.
pub fn export<'a, I>(records: I, columns: &[Column]) -> String
where
    I: IntoIterator<Item = &'a Property>,
{
    let mut records = records.into_iter().peekable();
    if records.peek().is_none() {
        return String::new();
    }

    let quotable: Vec<bool> = columns.iter().map(|c| !c.is_numeric()).collect();
    let mut out = String::new();
    push_row(&mut out, columns.iter().map(|c| c.header().to_string()), &[]);
    for record in records {
        push_row(&mut out, columns.iter().map(|c| c.value(record)), &quotable);
    }
    out
}

/// Append one CSV row. `quotable[i]` marks fields that take text quoting;
/// an empty slice means every field is quotable (used for the header).
fn push_row(out: &mut String, fields: impl Iterator<Item = String>, quotable: &[bool]) {
    for (i, field) in fields.enumerate() {
        if i > 0 {
            out.push(',');
        }
        if quotable.get(i).copied().unwrap_or(true) {
            out.push_str(&escape(&field));
        } else {
            out.push_str(&field);
        }
    }
    out.push('\n');
}

/// Quote a field when it needs it, doubling embedded quotes.
fn escape(field: &str) -> String {
    if field.contains(&[',', '"', '\n', '\r'][..]) {
        let mut quoted = String::with_capacity(field.len() + 2);
        quoted.push('"');
        for c in field.chars() {
            if c == '"' {
                quoted.push('"');
            }
            quoted.push(c);
        }
        quoted.push('"');
        quoted
    } else {
        field.to_string()
    }
}

/// Base decimal form: whole values print without a fractional part.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
