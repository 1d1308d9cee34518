pub mod styles;

use crate::exam::stats::{Summary, Tally};
use crate::exam::{Category, Exam, Record};
use failure::Fail;
use log::info;
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};
use std::io;
use std::path::{Path, PathBuf};
use styles::{Style, Styles};

const EXTENSION: &str = "xlsx";
const HEADER_HEIGHT: u16 = 40;
const HEADER: [(&str, u16); 5] = [
    ("מספר", 15),
    ("ת\"ש", 15),
    ("ת\"נ", 15),
    ("הצלחתי?", 20),
    ("הסקת מסקנות", 100),
];
const SUMMARY_COLUMN: u16 = 6;
const SUMMARY_ORDER: [Category; 3] = [
    Category::English,
    Category::Quantitative,
    Category::Verbal,
];

#[derive(Debug, Fail)]
pub enum ReportError {
    #[fail(display = "{} is open in another program", path)]
    OutputLocked { path: String },
    #[fail(display = "{}", _0)]
    Unexpected(String),
}

impl From<XlsxError> for ReportError {
    fn from(err: XlsxError) -> Self {
        ReportError::Unexpected(err.to_string())
    }
}

impl ReportError {
    fn from_save(err: XlsxError, path: &Path) -> Self {
        match err {
            XlsxError::IoError(ref cause) if is_locked(cause) => ReportError::OutputLocked {
                path: path.display().to_string(),
            },
            err => ReportError::from(err),
        }
    }
}

fn is_locked(err: &io::Error) -> bool {
    if err.kind() == io::ErrorKind::PermissionDenied {
        return true;
    }
    // ERROR_SHARING_VIOLATION / ERROR_LOCK_VIOLATION
    cfg!(windows) && matches!(err.raw_os_error(), Some(32) | Some(33))
}

/// Appends the spreadsheet extension, keeping any dots already in the name.
pub fn output_path(target: &Path) -> PathBuf {
    let mut name = target.as_os_str().to_owned();
    name.push(".");
    name.push(EXTENSION);
    PathBuf::from(name)
}

/// A single right-to-left sheet, kept in memory until it is saved.
pub struct Document {
    sheet: Worksheet,
    styles: Styles,
    path: PathBuf,
}

impl Document {
    fn new(path: PathBuf) -> Self {
        let mut sheet = Worksheet::new();
        sheet.set_right_to_left(true);
        Document {
            sheet,
            styles: Styles::default(),
            path,
        }
    }

    /// Runs `body` against a fresh document for `target` and saves it once
    /// `body` succeeds. On error nothing is written and any existing file is
    /// left alone.
    pub fn scoped<P, F, T>(target: P, body: F) -> Result<T, ReportError>
    where
        P: AsRef<Path>,
        F: FnOnce(&mut Document) -> Result<T, ReportError>,
    {
        let mut document = Document::new(output_path(target.as_ref()));
        let value = body(&mut document)?;
        document.finish()?;
        Ok(value)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn finish(self) -> Result<(), ReportError> {
        let Document { sheet, path, .. } = self;
        let mut workbook = Workbook::new();
        workbook.push_worksheet(sheet);
        workbook
            .save(&path)
            .map_err(|err| ReportError::from_save(err, &path))?;
        info!("saved {}", path.display());
        Ok(())
    }

    pub fn write_header(&mut self) -> Result<(), ReportError> {
        let header = self.styles.get(Style::TopHeader);
        self.sheet.set_row_height(0, HEADER_HEIGHT)?;
        self.sheet.set_row_format(0, header)?;
        for (col, &(label, width)) in HEADER.iter().enumerate() {
            let col = col as u16;
            self.sheet.set_column_width(col, width)?;
            self.sheet.write_string_with_format(0, col, label, header)?;
        }
        Ok(())
    }

    /// Writes `record` on data row `index`, counting from zero below the header.
    pub fn write_record(
        &mut self,
        index: usize,
        record: &Record,
        correct: bool,
    ) -> Result<(), ReportError> {
        let row = index as u32 + 1;
        let regular = self.styles.get(Style::Regular);
        self.sheet.write_string_with_format(
            row,
            0,
            &record.question_number.to_string(),
            self.styles.category(record.category),
        )?;
        self.sheet
            .write_string_with_format(row, 1, &record.given_answer.to_string(), regular)?;
        self.sheet
            .write_string_with_format(row, 2, &record.correct_answer.to_string(), regular)?;
        self.sheet.write_string_with_format(
            row,
            3,
            if correct { "True" } else { "False" },
            self.styles.answer(correct),
        )?;
        if correct {
            self.sheet
                .write_blank(row, 4, self.styles.get(Style::BlankGray))?;
        }
        Ok(())
    }

    pub fn write_summary(&mut self, summary: &Summary) -> Result<(), ReportError> {
        let header = self.styles.get(Style::TopHeader);
        let regular = self.styles.get(Style::Regular);
        for (offset, &category) in SUMMARY_ORDER.iter().enumerate() {
            let col = SUMMARY_COLUMN + offset as u16;
            self.sheet
                .write_string_with_format(0, col, category.label(), header)?;
            self.sheet
                .write_string_with_format(1, col, &summary.get(category).to_string(), regular)?;
        }
        Ok(())
    }
}

/// Renders every record of `exam` into `<target>.xlsx`, overwriting it, and
/// returns the per-category success rates.
pub fn write_report<P: AsRef<Path>>(target: P, exam: &Exam) -> Result<Summary, ReportError> {
    Document::scoped(target, |document| {
        document.write_header()?;
        let mut tally = Tally::new();
        for (index, record) in exam.records().iter().enumerate() {
            let correct = tally.add(record);
            document.write_record(index, record, correct)?;
        }
        info!(
            "wrote {} rows to {}",
            exam.len(),
            document.path().display()
        );
        let summary = tally.summary();
        document.write_summary(&summary)?;
        Ok(summary)
    })
}
