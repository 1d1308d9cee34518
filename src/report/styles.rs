use crate::exam::Category;
use rust_xlsxwriter::{Color, Format};

const TEXT_SIZE: u16 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    TopHeader,
    CorrectAnswer,
    WrongAnswer,
    BlankGray,
    Regular,
}

/// Formats shared by every cell of the report, built once per document.
#[derive(Debug, Clone)]
pub struct Styles {
    top_header: Format,
    correct_answer: Format,
    wrong_answer: Format,
    blank_gray: Format,
    regular: Format,
    english: Format,
    verbal: Format,
    quantitative: Format,
}

impl Default for Styles {
    fn default() -> Self {
        let text = || Format::new().set_font_size(TEXT_SIZE);
        Styles {
            top_header: Format::new()
                .set_background_color(Color::Blue)
                .set_font_size(30),
            correct_answer: text().set_background_color(Color::Green),
            wrong_answer: text().set_background_color(Color::Red),
            blank_gray: Format::new().set_background_color(Color::Gray),
            regular: text(),
            english: text().set_background_color(Color::RGB(0xFFA8BF)),
            verbal: text().set_background_color(Color::RGB(0xA8D1FF)),
            quantitative: text().set_background_color(Color::RGB(0xF1FFA8)),
        }
    }
}

impl Styles {
    pub fn get(&self, style: Style) -> &Format {
        match style {
            Style::TopHeader => &self.top_header,
            Style::CorrectAnswer => &self.correct_answer,
            Style::WrongAnswer => &self.wrong_answer,
            Style::BlankGray => &self.blank_gray,
            Style::Regular => &self.regular,
        }
    }

    pub fn category(&self, category: Category) -> &Format {
        match category {
            Category::English => &self.english,
            Category::Verbal => &self.verbal,
            Category::Quantitative => &self.quantitative,
        }
    }

    pub fn answer(&self, correct: bool) -> &Format {
        if correct {
            self.get(Style::CorrectAnswer)
        } else {
            self.get(Style::WrongAnswer)
        }
    }
}
