use super::{Category, Exam, Record};
use failure::Fail;
use log::debug;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

const BYTE_ORDER_MARK: char = '\u{feff}';

#[derive(Debug, Fail)]
pub enum ParseError {
    #[fail(display = "could not read {}: {}", path, cause)]
    UnreadableInput {
        path: String,
        #[cause]
        cause: io::Error,
    },
    #[fail(
        display = "line {}: record \"{}\" appears before any category header",
        line, content
    )]
    CategoryUnset { line: usize, content: String },
    #[fail(
        display = "line {}: expected a category or `<number> <answer> <correct answer>`, found \"{}\"",
        line, content
    )]
    MalformedRecord { line: usize, content: String },
}

/// Category seen most recently while walking the input.
#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    NoCategory,
    InCategory(Category),
}

impl Exam {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let file = File::open(path).map_err(|cause| ParseError::UnreadableInput {
            path: display.clone(),
            cause,
        })?;
        Self::read(BufReader::new(file), &display)
    }

    pub fn parse<R>(reader: R) -> Result<Self, ParseError>
    where
        R: BufRead,
    {
        Self::read(reader, "input")
    }

    fn read<R>(reader: R, path: &str) -> Result<Self, ParseError>
    where
        R: BufRead,
    {
        let mut state = State::NoCategory;
        let mut records = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|cause| ParseError::UnreadableInput {
                path: path.to_string(),
                cause,
            })?;
            let mut content = line.as_str();
            if index == 0 {
                content = content.trim_start_matches(BYTE_ORDER_MARK);
            }
            let content = content.trim();
            if content.is_empty() {
                continue;
            }

            let line = index + 1;
            if let Some(category) = Category::from_header(content) {
                debug!("line {}: switching to category {}", line, category);
                state = State::InCategory(category);
                continue;
            }

            let (question_number, given_answer, correct_answer) = Self::parse_triple(content)
                .ok_or_else(|| ParseError::MalformedRecord {
                    line,
                    content: content.to_string(),
                })?;
            let category = match state {
                State::InCategory(category) => category,
                State::NoCategory => {
                    return Err(ParseError::CategoryUnset {
                        line,
                        content: content.to_string(),
                    })
                }
            };

            records.push(Record {
                question_number,
                given_answer,
                correct_answer,
                category,
            });
        }

        debug!("parsed {} records", records.len());
        Ok(Exam(records))
    }

    fn parse_triple(content: &str) -> Option<(u32, i64, i64)> {
        let mut token_iter = content.split_whitespace();
        let triple = (
            token_iter.next()?.parse::<u32>().ok()?,
            token_iter.next()?.parse::<i64>().ok()?,
            token_iter.next()?.parse::<i64>().ok()?,
        );
        if token_iter.next().is_some() {
            return None;
        }
        Some(triple)
    }
}
