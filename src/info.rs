use crate::refs::{ObjectReferences, RefType};
use chrono::{DateTime, Datelike, FixedOffset, Timelike};
use pdf_writer::{Date as PDate, Pdf, TextStr};

/// The document information dictionary of a report: what viewers show under
/// "Properties"
#[derive(Debug, Clone, PartialEq)]
pub struct Info {
    pub title: String,
    /// The brand the report is published under
    pub author: String,
    pub subject: Option<String>,
    /// Written as a comma separated list, as Acrobat suggests
    pub keywords: Vec<String>,
    pub created: DateTime<FixedOffset>,
}

impl Info {
    pub fn new<T: ToString, A: ToString>(title: T, author: A, created: DateTime<FixedOffset>) -> Info {
        Info {
            title: title.to_string(),
            author: author.to_string(),
            subject: None,
            keywords: Vec::new(),
            created,
        }
    }

    pub fn with_subject<S: ToString>(mut self, subject: S) -> Info {
        self.subject = Some(subject.to_string());
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Info
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.keywords = keywords.into_iter().map(|k| k.to_string()).collect();
        self
    }

    fn pdf_date(&self) -> PDate {
        let created = &self.created;
        let offset = created.offset().local_minus_utc();
        let offset_hours = offset / (60 * 60);
        let offset_minutes = ((offset - (offset_hours * (60 * 60))) / 60).abs();
        PDate::new(created.year() as u16)
            .month(created.month() as u8)
            .day(created.day() as u8)
            .hour(created.hour() as u8)
            .minute(created.minute() as u8)
            .second(created.second() as u8)
            .utc_offset_hour(offset_hours as i8)
            .utc_offset_minute(offset_minutes as u8)
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let id = refs.gen(RefType::Info);
        let date = self.pdf_date();
        let keywords = self.keywords.join(", ");

        let mut info = writer.document_info(id);
        info.title(TextStr(&self.title));
        info.author(TextStr(&self.author));
        info.creator(TextStr(&self.author));
        if let Some(subject) = &self.subject {
            info.subject(TextStr(subject));
        }
        if !keywords.is_empty() {
            info.keywords(TextStr(&keywords));
        }
        info.producer(TextStr(concat!(
            env!("CARGO_PKG_NAME"),
            " v",
            env!("CARGO_PKG_VERSION")
        )));
        info.creation_date(date);
        info.modified_date(date);
    }
}
