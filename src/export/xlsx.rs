// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::parse_to_excel_date;
use crate::export::model::{entry_to_row, get_headers};
use crate::export::{EntryExport, notify_export_success};
use crate::models::MonthlyStatistics;
use crate::ui::messages::info;
use crate::utils::date::YearMonth;
use rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet,
};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const HEADER_BG: u32 = 0x2F75B5;
const BAND_1: u32 = 0xEAF3FB;
const BAND_2: u32 = 0xFFFFFF;

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(HEADER_BG))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn band_format(bg: Color) -> Format {
    Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

/// Styled XLSX export: an "Entries" sheet, plus a "Summary" sheet when
/// the export covers exactly one month.
pub(crate) fn export_xlsx(
    entries: &[EntryExport],
    summary: Option<(YearMonth, &MonthlyStatistics)>,
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();

    write_entries_sheet(workbook.add_worksheet(), entries)?;

    if let Some((month, stats)) = summary {
        write_summary_sheet(workbook.add_worksheet(), month, stats)?;
    }

    workbook.save(path_str(path)?).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_entries_sheet(worksheet: &mut Worksheet, entries: &[EntryExport]) -> AppResult<()> {
    worksheet.set_name("Entries").map_err(to_export_error)?;

    let headers = get_headers();
    let header_fmt = header_format();

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_fmt)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    for (row_index, entry) in entries.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { BAND_1 } else { BAND_2 };

        for (col, value) in entry_to_row(entry).iter().enumerate() {
            let v = value.as_str();
            write_xlsx_cell(worksheet, row, col as u16, v, Color::RGB(band))?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(v));
        }
    }

    set_widths(worksheet, &col_widths)
}

fn write_summary_sheet(
    worksheet: &mut Worksheet,
    month: YearMonth,
    stats: &MonthlyStatistics,
) -> AppResult<()> {
    worksheet.set_name("Summary").map_err(to_export_error)?;

    let title = format!("{} {}", month.name(), month.year());
    let header_fmt = header_format();
    worksheet
        .write_with_format(0, 0, title.as_str(), &header_fmt)
        .map_err(to_export_error)?;
    worksheet
        .write_with_format(0, 1, "value", &header_fmt)
        .map_err(to_export_error)?;

    let rows: [(&str, f64); 18] = [
        ("office_hours", stats.office_hours),
        ("remote_hours", stats.remote_hours),
        ("annual_leave_hours", stats.annual_leave_hours),
        ("total_hours", stats.total_hours),
        ("standard_hours", stats.standard_hours),
        ("office_overwork", stats.office_overwork),
        ("remote_overwork", stats.remote_overwork),
        ("total_overwork", stats.total_overwork),
        ("average_office_hours", stats.average_office_hours),
        ("average_remote_hours", stats.average_remote_hours),
        ("business_days", stats.business_days as f64),
        ("work_days", stats.work_days as f64),
        ("office_days", stats.office_days as f64),
        ("remote_days", stats.remote_days as f64),
        ("leave_days", stats.leave_days as f64),
        ("office_percentage", stats.office_percentage as f64),
        ("remote_percentage", stats.remote_percentage as f64),
        ("leave_percentage", stats.leave_percentage as f64),
    ];

    let mut label_w = UnicodeWidthStr::width(title.as_str());

    for (i, (label, value)) in rows.iter().enumerate() {
        let row = (i + 1) as u32;
        let band = Color::RGB(if i % 2 == 0 { BAND_1 } else { BAND_2 });

        worksheet
            .write_with_format(row, 0, *label, &band_format(band))
            .map_err(to_export_error)?;
        worksheet
            .write_with_format(
                row,
                1,
                *value,
                &band_format(band)
                    .set_align(FormatAlign::Right)
                    .set_num_format("0.00"),
            )
            .map_err(to_export_error)?;

        label_w = label_w.max(UnicodeWidthStr::width(*label));
    }

    set_widths(worksheet, &[label_w, 10])
}

fn set_widths(worksheet: &mut Worksheet, widths: &[usize]) -> AppResult<()> {
    for (c, w) in widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }
    Ok(())
}

/// Writes one cell, typing dates, times and numbers when the text allows.
fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    s: &str,
    bg: Color,
) -> AppResult<()> {
    if let Some((num_format, serial)) = parse_to_excel_date(s) {
        let fmt = band_format(bg).set_num_format(num_format);
        worksheet
            .write_with_format(row, col, serial, &fmt)
            .map_err(to_export_error)?;
        return Ok(());
    }

    if let Ok(num) = s.parse::<f64>() {
        let fmt = band_format(bg).set_align(FormatAlign::Right);
        worksheet
            .write_with_format(row, col, num, &fmt)
            .map_err(to_export_error)?;
        return Ok(());
    }

    worksheet
        .write_with_format(row, col, s, &band_format(bg))
        .map_err(to_export_error)?;

    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::Export(format!("invalid path: {}", path.display())))
}
