//! Tolerant CSV reader for human-maintained spreadsheet exports.
//!
//! The source sheet is hand-edited, so the reader never fails: malformed
//! quoting degrades gracefully (an unterminated quote consumes to end of
//! line), short rows are padded, long rows truncated.

/// A rectangular header + rows grid of trimmed cell strings.
///
/// Invariant: every row has exactly `headers.len()` cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawGrid {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Parse CSV text into a [`RawGrid`].
///
/// Handles an optional UTF-8 BOM, CRLF line endings, double-quoted fields
/// with `""` escapes, and irregular line lengths. The first non-blank line
/// is the header row; body rows that are entirely blank are dropped, and
/// the rest are padded/truncated to the header width.
pub fn parse_csv(text: &str) -> RawGrid {
    let raw = text.replace('\r', "");
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(&raw);
    if raw.trim().is_empty() {
        return RawGrid::default();
    }

    let mut lines = raw.split('\n').filter(|l| !l.trim().is_empty());

    let headers = match lines.next() {
        Some(line) => split_line(line),
        None => return RawGrid::default(),
    };

    let width = headers.len();
    let rows = lines
        .map(split_line)
        .filter(|cells| cells.iter().any(|c| !c.is_empty()))
        .map(|mut cells| {
            cells.truncate(width);
            cells.resize(width, String::new());
            cells
        })
        .collect();

    RawGrid { headers, rows }
}

/// Split one line into trimmed fields, honoring double-quote escaping.
///
/// Quotes never span lines in this dialect; `""` inside a quoted field is a
/// literal quote, and a comma inside quotes does not split.
fn split_line(line: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut cur = String::new();
    let mut in_quotes = false;

    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    cur.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                out.push(std::mem::take(&mut cur));
            }
            _ => cur.push(ch),
        }
    }
    out.push(cur);

    out.into_iter().map(|f| f.trim().to_string()).collect()
}

/// Drop columns that carry no header and no data.
///
/// Spreadsheet exports routinely grow blank columns at the edges (and
/// occasionally in the middle) as the sheet is edited. A column is kept if
/// its header cell or any row cell is non-blank; everything outside the
/// first..=last kept range goes, as does any empty column in between.
pub fn strip_empty_columns(grid: RawGrid) -> RawGrid {
    let keep: Vec<bool> = grid
        .headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            !h.is_empty()
                || grid
                    .rows
                    .iter()
                    .any(|r| r.get(i).is_some_and(|c| !c.is_empty()))
        })
        .collect();

    let first = keep.iter().position(|&k| k);
    let last = keep.iter().rposition(|&k| k);
    let (first, last) = match (first, last) {
        (Some(f), Some(l)) => (f, l),
        _ => return RawGrid::default(),
    };

    let idxs: Vec<usize> = (first..=last).filter(|&i| keep[i]).collect();

    let headers = idxs.iter().map(|&i| grid.headers[i].clone()).collect();
    let rows = grid
        .rows
        .iter()
        .map(|r| {
            idxs.iter()
                .map(|&i| r.get(i).cloned().unwrap_or_default())
                .collect()
        })
        .collect();

    RawGrid { headers, rows }
}
