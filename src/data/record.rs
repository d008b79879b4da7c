use std::io::Read;

use crate::foundation::error::{ReelError, ReelResult};

/// Columns every dataset must carry. Other columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "name", "genre", "company", "year", "score", "budget", "gross", "votes",
];

/// One parsed row of the movie dataset.
///
/// Numeric columns are coerced at load time and never rejected: unparseable
/// reals become `NaN`, unparseable integers become `None`. Both fail every
/// numeric comparison, so malformed rows silently drop out of filters.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Record {
    /// Movie title.
    pub name: String,
    /// Genre label.
    pub genre: String,
    /// Production company.
    pub company: String,
    /// Release year.
    pub year: Option<i32>,
    /// Audience score, nominally 0..=10.
    pub score: f64,
    /// Production budget in currency units.
    pub budget: f64,
    /// Gross revenue in currency units.
    pub gross: f64,
    /// Number of score votes.
    pub votes: Option<u64>,
}

/// Coerce text to a real number; empty or non-numeric text yields `NaN`.
pub fn coerce_real(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Coerce text to an integer. Reals without a fractional part (`"2010.0"`) are accepted.
pub fn coerce_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(v) = raw.parse::<i64>() {
        return Some(v);
    }
    let v = raw.parse::<f64>().ok()?;
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 9.0e15 {
        Some(v as i64)
    } else {
        None
    }
}

/// Parse CSV bytes into records.
///
/// The header must name every column in [`REQUIRED_COLUMNS`]. Rows are never
/// rejected: cells missing from short rows read as empty text, invalid UTF-8
/// is decoded lossily and numeric problems are coerced.
pub fn parse_records<R: Read>(reader: R) -> ReelResult<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = rdr
        .byte_headers()
        .map_err(|e| ReelError::data(format!("read csv header: {e}")))?
        .clone();
    let mut columns = [0usize; REQUIRED_COLUMNS.len()];
    for (slot, column) in columns.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h == column.as_bytes())
            .ok_or_else(|| ReelError::data(format!("missing required column '{column}'")))?;
    }
    let [name, genre, company, year, score, budget, gross, votes] = columns;

    let mut out = Vec::new();
    let mut short_rows = 0usize;
    let mut row = csv::ByteRecord::new();
    loop {
        let more = rdr.read_byte_record(&mut row).map_err(|e| {
            // +2: one for the header line, one for 1-based numbering.
            ReelError::data(format!("csv line {}: {e}", out.len() + 2))
        })?;
        if !more {
            break;
        }
        if row.len() < headers.len() {
            short_rows += 1;
        }
        let cell = |idx: usize| -> String {
            row.get(idx)
                .map(|b| String::from_utf8_lossy(b).into_owned())
                .unwrap_or_default()
        };
        out.push(Record {
            name: cell(name),
            genre: cell(genre),
            company: cell(company),
            year: coerce_integer(&cell(year)).and_then(|v| i32::try_from(v).ok()),
            score: coerce_real(&cell(score)),
            budget: coerce_real(&cell(budget)),
            gross: coerce_real(&cell(gross)),
            votes: coerce_integer(&cell(votes)).and_then(|v| u64::try_from(v).ok()),
        });
    }
    if short_rows > 0 {
        tracing::warn!(short_rows, "rows with missing cells read as empty");
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/data/record.rs"]
mod tests;
