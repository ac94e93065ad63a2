use scraper::{ElementRef, Html, Selector};
use crate::error::{Result, ScrapeError};

// How to find the one table a page is about.
#[derive(Debug, Clone)]
pub enum TableSelector {
    // `<table id="...">`
    Id(String),
    // Pages without an id on their table: take the first one.
    First,
}

impl TableSelector {
    fn css(&self) -> String {
        match self {
            TableSelector::Id(id) => format!("table#{}", id),
            TableSelector::First => "table".to_string(),
        }
    }
}

// Which descendant cells of the table to collect.
#[derive(Debug, Clone)]
pub struct CellFilter {
    pub tag: &'static str,
    pub class: &'static str,
}

// Indented numeric entries on the IS stats pages.
pub const INDENTED_CELLS: CellFilter = CellFilter { tag: "td", class: "odsazena" };

impl CellFilter {
    fn css(&self) -> String {
        format!("{}.{}", self.tag, self.class)
    }
}

// Returns the trimmed text of every matching cell in document order.
// A missing table is an error; a table without matching cells yields an empty list.
pub fn extract_cells(html: &str, page: &str, table: &TableSelector, cells: &CellFilter) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let table_selector = parse_selector(&table.css(), page)?;
    let cell_selector = parse_selector(&cells.css(), page)?;

    let table_element = document
        .select(&table_selector)
        .next()
        .ok_or_else(|| ScrapeError::Extraction {
            page: page.to_string(),
            what: format!("table `{}`", table.css()),
        })?;

    Ok(table_element.select(&cell_selector).map(cell_text).collect())
}

fn parse_selector(css: &str, page: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|_| ScrapeError::Extraction {
        page: page.to_string(),
        what: format!("valid selector `{}`", css),
    })
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}
