//! Excel workbook output format.

use krxchart_analytics::PriceFrame;
use rust_xlsxwriter::{Format, Workbook};
use std::io::Write;

use crate::{COLUMNS, FormatError, Formatter};

/// Name of the single worksheet.
pub const SHEET_NAME: &str = "Sheet1";

/// Number format applied to the date column.
const DATE_FORMAT: &str = "yyyy-mm-dd";

/// Excel workbook formatter.
///
/// Writes one sheet: a header row followed by one row per bar. Dates are
/// real date cells; undefined moving averages and the first row's return
/// are left blank.
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxFormatter;

impl XlsxFormatter {
    /// Creates a new workbook formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Builds the workbook and returns it as bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the workbook cannot be assembled.
    pub fn workbook_bytes(&self, frame: &PriceFrame) -> Result<Vec<u8>, FormatError> {
        let mut workbook = Workbook::new();
        let header = Format::new().set_bold();
        let date = Format::new().set_num_format(DATE_FORMAT);

        let sheet = workbook.add_worksheet();
        sheet.set_name(SHEET_NAME)?;
        sheet.set_column_width(0, 12)?;

        for (col, name) in COLUMNS.iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, *name, &header)?;
        }

        for (i, row) in frame.rows().enumerate() {
            let r = i as u32 + 1;
            let bar = row.bar;
            sheet.write_datetime_with_format(r, 0, &bar.date, &date)?;
            sheet.write_number(r, 1, bar.open)?;
            sheet.write_number(r, 2, bar.high)?;
            sheet.write_number(r, 3, bar.low)?;
            sheet.write_number(r, 4, bar.close)?;
            sheet.write_number(r, 5, bar.volume as f64)?;

            let derived = row.moving_averages.into_iter().chain([row.daily_return]);
            for (offset, value) in derived.enumerate() {
                if let Some(v) = value.filter(|v| v.is_finite()) {
                    sheet.write_number(r, 6 + offset as u16, v)?;
                }
            }
        }

        Ok(workbook.save_to_buffer()?)
    }
}

impl Formatter for XlsxFormatter {
    fn write_frame<W: Write + Send>(
        &self,
        frame: &PriceFrame,
        mut writer: W,
    ) -> Result<(), FormatError> {
        writer.write_all(&self.workbook_bytes(frame)?)?;
        Ok(())
    }

    fn to_bytes(&self, frame: &PriceFrame) -> Result<Vec<u8>, FormatError> {
        self.workbook_bytes(frame)
    }

    fn extension(&self) -> &str {
        "xlsx"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use calamine::{Data, Reader, Xlsx};
    use chrono::{Days, NaiveDate};
    use krxchart_types::PriceBar;
    use std::io::Cursor;

    fn test_frame(len: usize) -> PriceFrame {
        let start = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let bars = (0..len)
            .map(|i| {
                let c = 70_000.0 + (i as f64 * 37.0) % 900.0;
                PriceBar::new(
                    start + Days::new(i as u64),
                    c - 100.0,
                    c + 250.0,
                    c - 300.0,
                    c,
                    10_000_000 + i as u64 * 1_234,
                )
            })
            .collect();
        PriceFrame::new(bars)
    }

    fn read_back(bytes: Vec<u8>) -> Vec<Vec<Data>> {
        let mut workbook: Xlsx<_> = calamine::open_workbook_from_rs(Cursor::new(bytes)).unwrap();
        let range = workbook.worksheet_range(SHEET_NAME).unwrap();
        range.rows().map(<[Data]>::to_vec).collect()
    }

    fn as_f64(cell: &Data) -> Option<f64> {
        match cell {
            Data::Float(f) => Some(*f),
            Data::Int(i) => Some(*i as f64),
            Data::DateTime(dt) => Some(dt.as_f64()),
            _ => None,
        }
    }

    /// Excel serial day number (1900 date system, day zero 1899-12-30).
    fn serial(date: NaiveDate) -> f64 {
        let day_zero = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap();
        (date - day_zero).num_days() as f64
    }

    #[test]
    fn test_dates_are_date_cells() {
        let rows = read_back(XlsxFormatter::new().to_bytes(&test_frame(1)).unwrap());

        assert!(matches!(rows[1][0], Data::DateTime(_)));
        assert_relative_eq!(as_f64(&rows[1][0]).unwrap(), 45293.0);
    }

    #[test]
    fn test_round_trip() {
        let frame = test_frame(130);
        let bytes = XlsxFormatter::new().to_bytes(&frame).unwrap();
        let rows = read_back(bytes);

        assert_eq!(rows.len(), frame.len() + 1);
        let header: Vec<String> = rows[0].iter().map(ToString::to_string).collect();
        assert_eq!(header, COLUMNS);

        for (row, expected) in rows[1..].iter().zip(frame.rows()) {
            let bar = expected.bar;
            assert_relative_eq!(as_f64(&row[0]).unwrap(), serial(bar.date));
            assert_relative_eq!(as_f64(&row[1]).unwrap(), bar.open);
            assert_relative_eq!(as_f64(&row[2]).unwrap(), bar.high);
            assert_relative_eq!(as_f64(&row[3]).unwrap(), bar.low);
            assert_relative_eq!(as_f64(&row[4]).unwrap(), bar.close);
            assert_relative_eq!(as_f64(&row[5]).unwrap(), bar.volume as f64);

            for (k, ma) in expected.moving_averages.iter().enumerate() {
                match ma {
                    Some(v) => {
                        assert_relative_eq!(as_f64(&row[6 + k]).unwrap(), *v, epsilon = 1e-9);
                    }
                    None => assert!(as_f64(row.get(6 + k).unwrap_or(&Data::Empty)).is_none()),
                }
            }
        }
    }

    #[test]
    fn test_first_row_has_blank_return() {
        let frame = test_frame(3);
        let rows = read_back(XlsxFormatter::new().to_bytes(&frame).unwrap());

        assert!(as_f64(rows[1].get(9).unwrap_or(&Data::Empty)).is_none());
        assert_relative_eq!(
            as_f64(&rows[2][9]).unwrap(),
            frame.return_column()[1].unwrap(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_single_sheet() {
        let bytes = XlsxFormatter::new().to_bytes(&test_frame(2)).unwrap();
        let workbook: Xlsx<_> = calamine::open_workbook_from_rs(Cursor::new(bytes)).unwrap();
        assert_eq!(workbook.sheet_names(), vec![SHEET_NAME.to_string()]);
    }

    #[test]
    fn test_write_frame_emits_zip() {
        let frame = test_frame(5);
        let mut out = Vec::new();
        XlsxFormatter::new().write_frame(&frame, &mut out).unwrap();
        assert!(out.starts_with(b"PK"));
    }
}
