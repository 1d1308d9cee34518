pub mod parse;
pub mod stats;

use std::fmt;

/// Question category, set by a header line and kept until the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Quantitative,
    Verbal,
    English,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Quantitative,
        Category::Verbal,
        Category::English,
    ];

    /// Matches a header line exactly against the three category tokens.
    pub fn from_header(token: &str) -> Option<Self> {
        match token {
            "כמותי" => Some(Category::Quantitative),
            "מילולי" => Some(Category::Verbal),
            "אנגלית" => Some(Category::English),
            _ => None,
        }
    }

    /// Single letter used above the category's percentage in the report.
    pub fn label(self) -> &'static str {
        match self {
            Category::English => "E",
            Category::Quantitative => "K",
            Category::Verbal => "M",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Category::Quantitative => "Kamuti",
            Category::Verbal => "Miluli",
            Category::English => "English",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub question_number: u32,
    pub given_answer: i64,
    pub correct_answer: i64,
    pub category: Category,
}

impl Record {
    pub fn is_correct(&self) -> bool {
        self.given_answer == self.correct_answer
    }
}

/// Parsed records, in input order.
#[derive(Debug, Default, PartialEq)]
pub struct Exam(Vec<Record>);

impl Exam {
    pub fn records(&self) -> &[Record] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
