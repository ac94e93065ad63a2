use log::{debug, info};
use crate::error::{Result, ScrapeError};
use crate::models::{GradeMatrix, GradeRow, GRADE_BUCKETS};
use crate::utils::extract::{extract_cells, TableSelector, INDENTED_CELLS};
use crate::utils::session::Session;

pub const STATS_PATH: &str = "/auth/student/hodnoceni.pl";
const STATS_TABLE_ID: &str = "tmtab_1";

// Width of the alternate grading scale the stats page can also show.
const ALTERNATE_SCALE_WIDTH: usize = 7;

// Filter selectors for one subject's grade statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsQuery {
    pub faculty: String,
    pub term: String,
    pub subject: String,
}

impl Default for StatsQuery {
    fn default() -> Self {
        StatsQuery {
            faculty: "70".to_string(),
            term: "665".to_string(),
            subject: "393372".to_string(),
        }
    }
}

impl StatsQuery {
    // Same order as the links the system renders.
    pub fn params(&self) -> [(&'static str, &str); 7] {
        [
            ("fakulta", self.faculty.as_str()),
            ("obdobi", self.term.as_str()),
            ("odkud", ""),
            ("program", "0"),
            ("predmet", self.subject.as_str()),
            ("pismeno", ""),
            ("lang", "sk"),
        ]
    }
}

// Fetches the stats page for `query` and reshapes its counts into one row per term.
pub async fn retrieve_grade_matrix(session: &Session, query: &StatsQuery) -> Result<GradeMatrix> {
    let html = session.fetch(STATS_PATH, &query.params()).await?;
    let page = format!("{} (predmet={})", STATS_PATH, query.subject);

    let cells = extract_cells(&html, &page, &TableSelector::Id(STATS_TABLE_ID.to_string()), &INDENTED_CELLS)?;
    let values = parse_numeric_cells(&cells);
    let matrix = group_by_term(&values)?;

    info!("Subject {} has grades for {} terms", query.subject, matrix.len());
    Ok(matrix)
}

// Keeps the cells that hold a count. Dashes and other placeholders are skipped.
pub fn parse_numeric_cells<S: AsRef<str>>(cells: &[S]) -> Vec<u32> {
    cells
        .iter()
        .filter_map(|cell| cell.as_ref().trim().parse::<u32>().ok())
        .collect()
}

pub fn group_by_term(values: &[u32]) -> Result<GradeMatrix> {
    let width = GRADE_BUCKETS.len();
    let count = values.len();

    if count % width == 0 {
        debug!("Got {} marks and {} terms", count, count / width);
        let rows = values
            .chunks_exact(width)
            .map(|chunk| {
                let mut row = [0; GRADE_BUCKETS.len()];
                row.copy_from_slice(chunk);
                GradeRow(row)
            })
            .collect();
        Ok(GradeMatrix(rows))
    } else if count % ALTERNATE_SCALE_WIDTH == 0 {
        Err(ScrapeError::UnsupportedSchema {
            cells: count,
            reason: "7 option table is not supported yet",
        })
    } else {
        Err(ScrapeError::UnsupportedSchema {
            cells: count,
            reason: "cell count fits neither the 6 nor the 7 option table",
        })
    }
}
