use std::fmt;
use serde::{Deserialize, Serialize};

// Letter grades tallied per term on the stats page, in column order.
pub const GRADE_BUCKETS: [&str; 6] = ["A", "B", "C", "D", "E", "FX"];

#[allow(dead_code)]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Faculty {
    pub id: u32,
    pub name: String,
}

#[allow(dead_code)]
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum SemesterType {
    Autumn,
    Spring,
}

impl fmt::Display for SemesterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemesterType::Autumn => write!(f, "Autumn"),
            SemesterType::Spring => write!(f, "Spring"),
        }
    }
}

#[allow(dead_code)]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Semester {
    pub faculty: u32,
    pub id: u32,
    pub kind: SemesterType,
    pub year_start: u16,
    pub year_end: u16,
}

#[allow(dead_code)]
impl Semester {
    // Human readable label, e.g. "Autumn 2023/2024".
    pub fn label(&self) -> String {
        format!("{} {}/{}", self.kind, self.year_start, self.year_end)
    }
}

// A course offering in one term. `term_id` is not checked against any Semester.
#[allow(dead_code)]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Subject {
    pub id: u32,
    pub term_id: u32,
    pub short_code: String,
    pub name: String,
    pub catalog_link: String,
    pub garant_link: String,
    pub garant_name: String,
}

// Student counts for one term, one per grade bucket.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct GradeRow(pub [u32; GRADE_BUCKETS.len()]);

impl GradeRow {
    pub fn counts(&self) -> &[u32; GRADE_BUCKETS.len()] {
        &self.0
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    // Pairs every count with its letter grade.
    pub fn buckets(&self) -> impl Iterator<Item = (&'static str, u32)> + '_ {
        GRADE_BUCKETS.iter().copied().zip(self.counts().iter().copied())
    }
}

// Per-term grade rows in the order the terms appear on the page.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct GradeMatrix(pub Vec<GradeRow>);

impl GradeMatrix {
    pub fn rows(&self) -> &[GradeRow] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
