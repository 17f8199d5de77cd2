//! HTML table extraction.

use scraper::{ElementRef, Html, Selector};

/// One extracted table: rows of cell text, with column names when the
/// table had a header row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    /// Column names from the first all-`th` row; empty when there is none.
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column count: header width, or the widest row when headless.
    pub fn width(&self) -> usize {
        if !self.headers.is_empty() {
            self.headers.len()
        } else {
            self.rows.iter().map(Vec::len).max().unwrap_or(0)
        }
    }
}

/// Extract every `<table>` from an HTML document, in document order.
///
/// Parsing is best-effort: malformed markup is recovered silently by the
/// HTML5 parser, and a document with no tables yields an empty vector.
pub fn extract_tables(html: &str) -> Vec<Table> {
    let document = Html::parse_document(html);
    let (Ok(table_sel), Ok(tr_sel), Ok(th_sel), Ok(cell_sel)) = (
        Selector::parse("table"),
        Selector::parse("tr"),
        Selector::parse("th"),
        Selector::parse("th, td"),
    ) else {
        return Vec::new();
    };

    let mut tables = Vec::new();
    for table_el in document.select(&table_sel) {
        let mut table = Table::default();
        for tr in table_el.select(&tr_sel) {
            let cells: Vec<String> = tr.select(&cell_sel).map(cell_text).collect();
            if cells.is_empty() {
                continue;
            }
            // Only an all-th first row is a header; a row mixing th and td
            // carries data and is kept whole.
            let th_count = tr.select(&th_sel).count();
            if table.headers.is_empty() && table.rows.is_empty() && th_count == cells.len() {
                table.headers = cells;
                continue;
            }
            table.rows.push(cells);
        }
        tables.push(table);
    }
    tables
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}
