use super::{Category, Record};
use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Display;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Counts {
    pub correct: u64,
    pub incorrect: u64,
}

impl Counts {
    pub fn total(&self) -> u64 {
        self.correct + self.incorrect
    }

    pub fn percentage(&self) -> Percentage {
        match self.total() {
            0 => Percentage::NotAvailable,
            total => Percentage::Truncated(self.correct * 100 / total),
        }
    }
}

/// Share of correct answers, floored to a whole percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Percentage {
    Truncated(u64),
    /// No records were seen for the category.
    NotAvailable,
}

impl Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Percentage::Truncated(pct) => write!(f, "{}%", pct),
            Percentage::NotAvailable => write!(f, "N/A"),
        }
    }
}

/// Correct/incorrect counters per category.
#[derive(Debug, PartialEq)]
pub struct Tally(BTreeMap<Category, Counts>);

impl Default for Tally {
    fn default() -> Self {
        Tally(
            Category::ALL
                .iter()
                .map(|&category| (category, Counts::default()))
                .collect(),
        )
    }
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one record and returns whether it was answered correctly.
    pub fn add(&mut self, record: &Record) -> bool {
        let correct = record.is_correct();
        let counts = self.0.entry(record.category).or_default();
        if correct {
            counts.correct += 1;
        } else {
            counts.incorrect += 1;
        }
        correct
    }

    pub fn counts(&self, category: Category) -> Counts {
        self.0.get(&category).copied().unwrap_or_default()
    }

    pub fn summary(&self) -> Summary {
        Summary {
            english: self.counts(Category::English).percentage(),
            verbal: self.counts(Category::Verbal).percentage(),
            quantitative: self.counts(Category::Quantitative).percentage(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub english: Percentage,
    pub verbal: Percentage,
    pub quantitative: Percentage,
}

impl Summary {
    pub fn get(&self, category: Category) -> Percentage {
        match category {
            Category::English => self.english,
            Category::Verbal => self.verbal,
            Category::Quantitative => self.quantitative,
        }
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}: {}, {}: {}, {}: {}",
            Category::English,
            self.english,
            Category::Verbal,
            self.verbal,
            Category::Quantitative,
            self.quantitative
        )
    }
}
