//! Turns an uploaded spreadsheet into preview rows.
//!
//! Only the first worksheet is read. Its first row is the header; every later row
//! is mapped to an `ImportRow` by header text and checked for required fields.
//! Numeric date cells use the 1900 serial convention; text dates must be
//! `YYYY-MM-DD`.

use crate::config::AppConfig;
use crate::error::ServiceError;
use crate::services::upload::read_file_part;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use common::model::import::ImportRow;
use common::spreadsheet::{
    parse_iso_date, serial_to_date, CERT_DATE_PREFIX, COL_ACCOUNT_ID, COL_CERT_NAME,
    COL_DRIVE_LINK, COL_NAME, COL_NIK, COL_NOTES, COL_TYPE,
};
use log::info;
use std::io::Cursor;

pub async fn process(
    payload: Multipart,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, ServiceError> {
    let part = read_file_part(payload, config.max_upload_bytes).await?;
    let file_name = part.file_name.clone();
    let rows = web::block(move || parse_upload(&part.file_name, part.bytes)).await??;
    info!(
        "Parsed {}: {} rows, {} valid",
        file_name,
        rows.len(),
        rows.iter().filter(|r| r.is_valid).count()
    );
    Ok(HttpResponse::Ok().json(rows))
}

/// A cell reduced to what the row mapping needs.
#[derive(Debug, Clone, PartialEq)]
enum Cell {
    Empty,
    Text(String),
    Number(f64),
}

impl Cell {
    fn text(&self) -> Option<String> {
        match self {
            Cell::Empty => None,
            Cell::Text(s) => Some(s.clone()),
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => Some(format!("{}", *n as i64)),
            Cell::Number(n) => Some(n.to_string()),
        }
    }

    fn date(&self) -> Option<chrono::NaiveDate> {
        match self {
            Cell::Empty => None,
            Cell::Text(s) => parse_iso_date(s),
            Cell::Number(n) => serial_to_date(*n),
        }
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Int(i) => Cell::Number(*i as f64),
            Data::Float(f) => Cell::Number(*f),
            Data::DateTime(dt) => Cell::Number(dt.as_f64()),
            Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => text_cell(s),
            Data::Bool(b) => Cell::Text(b.to_string()),
            Data::Error(_) | Data::Empty => Cell::Empty,
        }
    }
}

static EMPTY_CELL: Cell = Cell::Empty;

fn text_cell(raw: &str) -> Cell {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Cell::Empty
    } else {
        Cell::Text(trimmed.to_string())
    }
}

/// Column positions resolved from the header row.
#[derive(Debug, Default)]
struct Columns {
    account_id: Option<usize>,
    nik: Option<usize>,
    name: Option<usize>,
    cert_type: Option<usize>,
    cert_name: Option<usize>,
    cert_date: Option<usize>,
    notes: Option<usize>,
    drive_link: Option<usize>,
}

impl Columns {
    fn from_header(header: &[Cell]) -> Result<Self, ServiceError> {
        let mut columns = Columns::default();
        for (idx, cell) in header.iter().enumerate() {
            let Some(title) = cell.text() else { continue };
            let slot = match title.as_str() {
                COL_ACCOUNT_ID => &mut columns.account_id,
                COL_NIK => &mut columns.nik,
                COL_NAME => &mut columns.name,
                COL_TYPE => &mut columns.cert_type,
                COL_CERT_NAME => &mut columns.cert_name,
                COL_NOTES => &mut columns.notes,
                COL_DRIVE_LINK => &mut columns.drive_link,
                t if t.starts_with(CERT_DATE_PREFIX) => &mut columns.cert_date,
                _ => continue,
            };
            slot.get_or_insert(idx);
        }

        let known = [
            columns.account_id,
            columns.cert_type,
            columns.cert_name,
            columns.cert_date,
        ];
        if known.iter().all(Option::is_none) {
            return Err(ServiceError::Spreadsheet(
                "header row has none of the expected columns".to_string(),
            ));
        }
        Ok(columns)
    }

    fn row(&self, cells: &[Cell]) -> ImportRow {
        let at = |col: Option<usize>| col.and_then(|i| cells.get(i)).unwrap_or(&EMPTY_CELL);
        ImportRow {
            account_id: at(self.account_id).text(),
            nik: at(self.nik).text(),
            full_name: at(self.name).text(),
            cert_type: at(self.cert_type).text(),
            cert_name: at(self.cert_name).text(),
            cert_date: at(self.cert_date).date(),
            notes: at(self.notes).text(),
            drive_link: at(self.drive_link).text(),
            is_valid: false,
        }
        .validated()
    }
}

fn is_csv(file_name: &str) -> bool {
    file_name.to_ascii_lowercase().ends_with(".csv")
}

/// Parses a workbook (or a CSV export of one) into import rows. Blank rows are
/// skipped; rows missing required data are kept and flagged invalid.
pub fn parse_upload(file_name: &str, bytes: Vec<u8>) -> Result<Vec<ImportRow>, ServiceError> {
    let grid = if is_csv(file_name) {
        read_csv(&bytes)?
    } else {
        read_workbook(bytes)?
    };

    let mut rows = grid.into_iter();
    let header = rows
        .next()
        .ok_or_else(|| ServiceError::Spreadsheet("the first sheet is empty".to_string()))?;
    let columns = Columns::from_header(&header)?;

    Ok(rows
        .filter(|cells| cells.iter().any(|c| *c != Cell::Empty))
        .map(|cells| columns.row(&cells))
        .collect())
}

fn read_workbook(bytes: Vec<u8>) -> Result<Vec<Vec<Cell>>, ServiceError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ServiceError::Spreadsheet("the workbook has no worksheet".to_string()))??;
    Ok(range
        .rows()
        .map(|row| row.iter().map(Cell::from).collect())
        .collect())
}

fn read_csv(bytes: &[u8]) -> Result<Vec<Vec<Cell>>, ServiceError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);
    let mut grid = Vec::new();
    for record in reader.records() {
        grid.push(record?.iter().map(text_cell).collect());
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{multipart_file, TestState};
    use actix_web::http::{header, StatusCode};
    use actix_web::{test as actix_test, App};
    use chrono::NaiveDate;
    use common::spreadsheet::TEMPLATE_HEADERS;
    use rust_xlsxwriter::{Format, Workbook};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Workbook with the template header and a few filled rows.
    fn sample_workbook() -> Vec<u8> {
        let mut workbook = Workbook::new();
        let date_format = Format::new().set_num_format("yyyy-mm-dd");
        let sheet = workbook.add_worksheet();
        for (col, title) in TEMPLATE_HEADERS.iter().enumerate() {
            sheet.write_string(0, col as u16, *title).unwrap();
        }
        // Serial number in a plain numeric cell.
        sheet.write_string(1, 0, "acc-1").unwrap();
        sheet.write_string(1, 2, "Budi Santoso").unwrap();
        sheet.write_string(1, 3, "Safety").unwrap();
        sheet.write_string(1, 4, "First Aid").unwrap();
        sheet.write_number(1, 5, 44197.0).unwrap();
        sheet
            .write_string(1, 7, "https://drive.google.com/file/d/1AbCdEfGhIjKlMnOpQrStUvWxYz1234567/view")
            .unwrap();
        // Missing category.
        sheet.write_string(2, 0, "acc-2").unwrap();
        sheet.write_string(2, 4, "TOEFL").unwrap();
        sheet.write_string(2, 5, "2023-05-06").unwrap();
        // Date-formatted cell and a numeric account id.
        sheet.write_number(4, 0, 1042.0).unwrap();
        sheet.write_string(4, 3, "Language").unwrap();
        sheet.write_string(4, 4, "IELTS").unwrap();
        sheet.write_number_with_format(4, 5, 45351.0, &date_format).unwrap();
        sheet.write_string(4, 6, "band 7").unwrap();
        workbook.save_to_buffer().unwrap()
    }

    #[test]
    fn workbook_rows_are_mapped_and_validated() {
        let rows = parse_upload("filled.xlsx", sample_workbook()).unwrap();
        assert_eq!(rows.len(), 3, "blank row 4 is skipped");

        assert_eq!(rows[0].account_id.as_deref(), Some("acc-1"));
        assert_eq!(rows[0].full_name.as_deref(), Some("Budi Santoso"));
        assert_eq!(rows[0].cert_date, Some(ymd(2021, 1, 1)));
        assert!(rows[0].drive_link.is_some());
        assert!(rows[0].is_valid);

        assert_eq!(rows[1].cert_date, Some(ymd(2023, 5, 6)));
        assert!(!rows[1].is_valid, "row without category");

        assert_eq!(rows[2].account_id.as_deref(), Some("1042"));
        assert_eq!(rows[2].cert_date, Some(ymd(2024, 2, 29)));
        assert_eq!(rows[2].notes.as_deref(), Some("band 7"));
        assert!(rows[2].is_valid);
    }

    #[test]
    fn unfilled_template_parses_to_invalid_rows() {
        let accounts = vec![common::model::account::Account {
            id: "a1".into(),
            full_name: "Budi Santoso".into(),
            internal_nik: Some("HR-001".into()),
        }];
        let bytes = super::super::template::build_template(&accounts).unwrap();
        let rows = parse_upload("template.xlsx", bytes).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].nik.as_deref(), Some("HR-001"));
        assert!(!rows[0].is_valid);
    }

    #[test]
    fn csv_uploads_are_accepted() {
        let csv = "Account ID,NIK,Name,Type,Cert Name,Cert Date,Notes\n\
                   acc-1,HR-001,Budi,Safety,CPR,2022-08-09,\n\
                   ,,,,,,\n\
                   acc-2,HR-002,Siti,Safety,CPR,09/08/2022,\n";
        let rows = parse_upload("export.CSV", csv.as_bytes().to_vec()).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].is_valid);
        assert_eq!(rows[0].notes, None);
        assert_eq!(rows[1].cert_date, None);
        assert!(!rows[1].is_valid);
    }

    #[test]
    fn garbage_is_a_spreadsheet_error() {
        let err = parse_upload("notes.xlsx", b"definitely not a zip".to_vec()).unwrap_err();
        assert!(matches!(err, ServiceError::Spreadsheet(_)));
    }

    #[test]
    fn unrelated_header_is_a_spreadsheet_error() {
        let err = parse_upload("other.csv", b"foo,bar\n1,2\n".to_vec()).unwrap_err();
        assert!(matches!(err, ServiceError::Spreadsheet(_)));
    }

    #[test]
    fn empty_csv_is_a_spreadsheet_error() {
        assert!(matches!(
            parse_upload("empty.csv", Vec::new()),
            Err(ServiceError::Spreadsheet(_))
        ));
    }

    #[actix_web::test]
    async fn parse_endpoint_returns_rows_or_unprocessable() {
        let state = TestState::new();
        let app = actix_test::init_service(App::new().configure(|cfg| state.register(cfg))).await;

        let (content_type, body) = multipart_file("filled.xlsx", &sample_workbook());
        let req = actix_test::TestRequest::post()
            .uri("/api/certifications/import/parse")
            .insert_header((header::CONTENT_TYPE, content_type))
            .set_payload(body)
            .to_request();
        let rows: Vec<ImportRow> = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(rows.iter().filter(|r| r.is_valid).count(), 2);

        let (content_type, body) = multipart_file("broken.xlsx", b"not a workbook");
        let req = actix_test::TestRequest::post()
            .uri("/api/certifications/import/parse")
            .insert_header((header::CONTENT_TYPE, content_type))
            .set_payload(body)
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
