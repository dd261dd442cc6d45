use csv::Writer;
use rocket::http::{ContentType, Header, Status};
use rocket::response::{self, Responder, Response};
use rocket::Request;
use serde::Serialize;
use std::io::Cursor;

/// A CSV download. Rows are written with a header line taken from the first row's field names.
pub(crate) struct Csv<T> {
    pub(crate) rows: Vec<T>,
    pub(crate) filename: String,
}

impl<T> Csv<T> {
    /// `stem` is reduced to ASCII alphanumerics and dashes before use in the header.
    pub(crate) fn attachment(rows: Vec<T>, stem: &str) -> Csv<T> {
        let stem = stem
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
            .collect::<String>();
        Csv {
            rows,
            filename: format!("{}.csv", stem.trim_matches('-')),
        }
    }
}

impl<'r, T: Serialize> Responder<'r, 'static> for Csv<T> {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        let string = write_csv(self.rows).map_err(|e| {
            log::error!("CSV failed to serialize: {:?}", e);
            Status::InternalServerError
        })?;
        Response::build_from(string.respond_to(req)?)
            .header(ContentType::CSV)
            .header(Header::new(
                "Content-Disposition",
                format!("attachment; filename=\"{}\"", self.filename),
            ))
            .ok()
    }
}

pub(crate) fn write_csv<T: Serialize>(rows: Vec<T>) -> anyhow::Result<String> {
    let mut writer = Writer::from_writer(Cursor::new(Vec::new()));
    for row in rows {
        writer.serialize(row)?;
    }
    let buf = writer.into_inner()?.into_inner();
    Ok(String::from_utf8(buf)?)
}
