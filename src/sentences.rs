//! Example sentences showing a pronoun set in use.
//!
//! Every set gets the same five sentences, rendered three ways: plain text,
//! HTML with the pronoun in `<strong>`, and markdown with the pronoun in `**`.

use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

use crate::table::Row;

/// Upper-case the first grapheme cluster of `text`.
pub fn capitalize(text: &str) -> String {
    let mut graphemes = text.graphemes(true);
    match graphemes.next() {
        Some(first) => {
            let mut out = first.to_uppercase();
            out.push_str(graphemes.as_str());
            out
        }
        None => String::new(),
    }
}

#[derive(Debug, Clone, Copy)]
enum Part {
    Text(&'static str),
    /// Index into the canonical forms.
    Slot(usize),
}

use Part::{Slot, Text};

const SUBJECT: usize = 0;
const OBJECT: usize = 1;
const DETERMINER: usize = 2;
const POSSESSIVE: usize = 3;
const REFLEXIVE: usize = 4;

const TEMPLATES: [&[Part]; 5] = [
    &[Slot(SUBJECT), Text(" went to the park.")],
    &[Text("I went with "), Slot(OBJECT), Text(".")],
    &[
        Slot(SUBJECT),
        Text(" brought "),
        Slot(DETERMINER),
        Text(" frisbee."),
    ],
    &[Text("At least I think it was "), Slot(POSSESSIVE), Text(".")],
    &[
        Slot(SUBJECT),
        Text(" threw the frisbee to "),
        Slot(REFLEXIVE),
        Text("."),
    ],
];

/// How substituted pronouns are marked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Plain,
    Html,
    Markdown,
}

impl Emphasis {
    fn wrap(self, word: &str, out: &mut String) {
        match self {
            Emphasis::Plain => out.push_str(word),
            Emphasis::Html => {
                out.push_str("<strong>");
                out.push_str(word);
                out.push_str("</strong>");
            }
            Emphasis::Markdown => {
                out.push_str("**");
                out.push_str(word);
                out.push_str("**");
            }
        }
    }
}

/// The five example sentences for `row` with the given markup.
///
/// The first word of each sentence is capitalized inside any markup.
pub fn render(row: &Row, emphasis: Emphasis) -> [String; 5] {
    TEMPLATES.map(|template| {
        let mut sentence = String::new();
        for (idx, part) in template.iter().enumerate() {
            match *part {
                Text(text) if idx == 0 => sentence.push_str(&capitalize(text)),
                Text(text) => sentence.push_str(text),
                Slot(slot) => {
                    let word = row.slug(slot).unwrap_or_default();
                    if idx == 0 {
                        emphasis.wrap(&capitalize(word), &mut sentence);
                    } else {
                        emphasis.wrap(word, &mut sentence);
                    }
                }
            }
        }
        sentence
    })
}

/// Example sentences for a list of rows, in three parallel renderings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Examples {
    pub plain: Vec<[String; 5]>,
    pub html: Vec<[String; 5]>,
    pub markdown: Vec<[String; 5]>,
}

impl Examples {
    pub fn for_rows<'r>(rows: impl IntoIterator<Item = &'r Row>) -> Self {
        let mut examples = Self::default();
        for row in rows {
            examples.push(row);
        }
        examples
    }

    pub fn push(&mut self, row: &Row) {
        self.plain.push(render(row, Emphasis::Plain));
        self.html.push(render(row, Emphasis::Html));
        self.markdown.push(render(row, Emphasis::Markdown));
    }

    /// Number of rows rendered.
    pub fn len(&self) -> usize {
        self.plain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plain.is_empty()
    }
}
