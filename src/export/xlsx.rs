// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::get_headers;
use crate::export::{RecordExport, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Styled XLSX export with auto-sized columns and a total row.
pub(crate) fn export_xlsx(records: &[RecordExport], path: &Path, total: f64) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Employee Hours").map_err(to_export_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (i, rec) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        let bg = if i % 2 == 0 { band1 } else { band2 };

        write_number(worksheet, row, 0, rec.row as f64, bg)?;
        write_text(worksheet, row, 1, &rec.name, bg)?;
        col_widths[1] = col_widths[1].max(UnicodeWidthStr::width(rec.name.as_str()));

        let numbers = [
            rec.start_time,
            rec.end_time,
            rec.hourly_rate,
            rec.days,
            rec.total_hours,
            rec.total_compensation,
        ];
        for (offset, value) in numbers.iter().enumerate() {
            let col = offset + 2;
            write_number(worksheet, row, col as u16, *value, bg)?;
            col_widths[col] = col_widths[col].max(value.to_string().len());
        }
    }

    // ---------------------------
    // Total
    // ---------------------------
    let total_row = (records.len() + 2) as u32;
    let bold = Format::new().set_bold();
    let last_col = (headers.len() - 1) as u16;
    worksheet
        .write_with_format(total_row, last_col - 1, "Total Compensation", &bold)
        .map_err(to_export_error)?;
    worksheet
        .write_with_format(total_row, last_col, total, &bold)
        .map_err(to_export_error)?;

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn cell_format(bg: Color) -> Format {
    Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn write_number(ws: &mut Worksheet, row: u32, col: u16, value: f64, bg: Color) -> AppResult<()> {
    let fmt = cell_format(bg).set_align(FormatAlign::Right);
    ws.write_with_format(row, col, value, &fmt)
        .map_err(to_export_error)?;
    Ok(())
}

fn write_text(ws: &mut Worksheet, row: u32, col: u16, value: &str, bg: Color) -> AppResult<()> {
    ws.write_with_format(row, col, value, &cell_format(bg))
        .map_err(to_export_error)?;
    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
