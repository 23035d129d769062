use crate::error::ServiceError;
use crate::store::{accounts, Database};
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpResponse};
use chrono::Local;
use common::model::account::Account;
use common::spreadsheet::{template_file_name, SHEET_NAME, TEMPLATE_HEADERS};
use log::info;
use rust_xlsxwriter::{DataValidation, DataValidationRule, ExcelDateTime, Format, Workbook};

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Last 1-based sheet row that always gets the date format and validation, so
/// users can add rows below the pre-filled employees.
const BULK_ROWS: u32 = 1000;
const DATE_COL: u16 = 5;
const COLUMN_WIDTHS: [f64; 8] = [38.0, 14.0, 28.0, 18.0, 30.0, 22.0, 30.0, 45.0];

pub async fn process(db: web::Data<Database>) -> Result<HttpResponse, ServiceError> {
    let db = db.into_inner();
    let file_name = template_file_name(Local::now().date_naive());
    let (bytes, employees) = web::block(move || {
        let accounts = db.with_conn(accounts::list)?;
        let bytes = build_template(&accounts)?;
        Ok::<_, ServiceError>((bytes, accounts.len()))
    })
    .await??;

    info!(
        "Generated import template {} for {} employees",
        file_name, employees
    );
    Ok(HttpResponse::Ok()
        .content_type(XLSX_MIME)
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(file_name)],
        })
        .body(bytes))
}

/// Builds the import workbook: bold frozen header, one row per employee (id, NIK,
/// name), and a `yyyy-mm-dd` date column constrained to real dates.
pub fn build_template(accounts: &[Account]) -> Result<Vec<u8>, ServiceError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, title) in TEMPLATE_HEADERS.iter().enumerate() {
        let col = col as u16;
        worksheet.write_string_with_format(0, col, *title, &header)?;
        worksheet.set_column_width(col, COLUMN_WIDTHS[col as usize])?;
    }
    worksheet.set_freeze_panes(1, 0)?;

    for (idx, account) in accounts.iter().enumerate() {
        let row = idx as u32 + 1;
        worksheet.write_string(row, 0, &account.id)?;
        if let Some(nik) = &account.internal_nik {
            worksheet.write_string(row, 1, nik)?;
        }
        worksheet.write_string(row, 2, &account.full_name)?;
    }

    let last_row = last_date_row(accounts.len());
    for row in 1..=last_row {
        worksheet.write_blank(row, DATE_COL, &date_format)?;
    }
    let validation = DataValidation::new().allow_date(DataValidationRule::GreaterThanOrEqualTo(
        ExcelDateTime::from_ymd(1900, 1, 1)?,
    ));
    worksheet.add_data_validation(1, DATE_COL, last_row, DATE_COL, &validation)?;

    Ok(workbook.save_to_buffer()?)
}

/// 0-based index of the last row in the date column range: sheet rows
/// `2..=max(BULK_ROWS, employees + 1)`.
fn last_date_row(employees: usize) -> u32 {
    (BULK_ROWS - 1).max(employees as u32)
}
