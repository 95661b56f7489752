use std::{
    fs,
    path::{Path, PathBuf},
};

use bigdecimal::{BigDecimal, ToPrimitive};
use chrono::NaiveDate;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use tracing::info;

use crate::{error::Error, model::ReportRow};

pub const OUTPUT_PREFIX: &str = "aleo大矿工统计";

pub const HEADER: [&str; 11] = [
    "排名",
    "标记",
    "地址",
    "累计出块奖励(Puzzle Credits)",
    "占全网比例",
    "昨日奖励",
    "单日奖励占比",
    "节点速率(M s/s)",
    "速率占比",
    "GPU数量/3080",
    "GPU数量/4090",
];

const AMOUNT_FORMAT: &str = "0.00";

/// `aleo大矿工统计-YYYY-MM-DD.xlsx`; one file per calendar day.
pub fn output_file_name(date: NaiveDate) -> String {
    format!("{}-{}.xlsx", OUTPUT_PREFIX, date.format("%Y-%m-%d"))
}

/// Writes the dated report under `output_dir`, replacing any file of
/// the same name.
pub fn export(
    rows: &[ReportRow],
    output_dir: &Path,
    date: NaiveDate,
) -> Result<PathBuf, Error> {
    let path = output_dir.join(output_file_name(date));
    write_report(rows, &path)?;
    info!("Wrote {} rows to {}", rows.len(), path.display());

    Ok(path)
}

/// The workbook is rendered in memory first so a failure while filling
/// cells never leaves a file behind.
pub fn write_report(rows: &[ReportRow], path: &Path) -> Result<(), Error> {
    let mut workbook = build_workbook(rows)?;
    let buffer = workbook.save_to_buffer()?;
    fs::write(path, buffer)?;

    Ok(())
}

pub fn build_workbook(rows: &[ReportRow]) -> Result<Workbook, Error> {
    let mut workbook = Workbook::new();
    let header_format = Format::new()
        .set_bold()
        .set_font_name("Calibri")
        .set_font_size(12);
    let amount_format = Format::new().set_num_format(AMOUNT_FORMAT);

    let sheet = workbook.add_worksheet();
    sheet.set_name("Sheet1")?;

    for (col, title) in HEADER.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, &header_format)?;
    }

    for (index, item) in rows.iter().enumerate() {
        let row = u32::try_from(index + 1).map_err(|_| {
            Error::NumberConversion(format!("row {} exceeds sheet", index))
        })?;
        write_row(sheet, row, item, &amount_format)?;
    }

    Ok(workbook)
}

fn write_row(
    sheet: &mut Worksheet,
    row: u32,
    item: &ReportRow,
    amount_format: &Format,
) -> Result<(), Error> {
    sheet.write_number(row, 0, f64::from(item.rank))?;
    sheet.write_string(row, 1, item.label.as_str())?;
    sheet.write_string(row, 2, item.address.as_str())?;
    sheet.write_number_with_format(
        row,
        3,
        to_cell_number(&item.total_puzzle_credits)?,
        amount_format,
    )?;
    sheet.write_string(row, 4, item.total_puzzle_credits_percentage.as_str())?;
    sheet.write_number_with_format(
        row,
        5,
        to_cell_number(&item.daily_puzzle_credits)?,
        amount_format,
    )?;
    sheet.write_string(row, 6, item.daily_puzzle_credits_percentage.as_str())?;
    sheet.write_number_with_format(
        row,
        7,
        to_cell_number(&item.network_speed_mega)?,
        amount_format,
    )?;
    sheet.write_string(row, 8, item.network_speed_percentage.as_str())?;
    sheet.write_number(row, 9, to_cell_number(&item.gpu_count_3080)?)?;
    sheet.write_number(row, 10, to_cell_number(&item.gpu_count_4090)?)?;

    Ok(())
}

fn to_cell_number(value: &BigDecimal) -> Result<f64, Error> {
    value
        .to_f64()
        .filter(|n| n.is_finite())
        .ok_or_else(|| {
            Error::NumberConversion(format!("{} does not fit a cell", value))
        })
}
