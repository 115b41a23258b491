//! Blank time-study template generation.
//!
//! Written with the same layout the sync parser expects: title in row 1,
//! "Action"/"Seconds" headers in row 3 columns B and D, data entered from
//! row 4.

use crate::errors::{AppError, AppResult};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use std::path::Path;

pub struct TemplateLogic;

impl TemplateLogic {
    pub fn write(path: &Path) -> AppResult<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let title_format = Format::new().set_bold().set_font_size(14);

        let header_format = Format::new()
            .set_bold()
            .set_font_color(Color::RGB(0xFFFFFF))
            .set_background_color(Color::RGB(0x2F75B5))
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin)
            .set_align(FormatAlign::Center);

        worksheet
            .write_with_format(0, 1, "Time Study", &title_format)
            .map_err(to_export_error)?;

        worksheet
            .write_with_format(2, 1, "Action", &header_format)
            .map_err(to_export_error)?;
        worksheet
            .write_with_format(2, 3, "Seconds", &header_format)
            .map_err(to_export_error)?;

        worksheet.set_column_width(1, 30.0).map_err(to_export_error)?;
        worksheet.set_column_width(3, 12.0).map_err(to_export_error)?;
        worksheet.set_freeze_panes(3, 0).ok();

        let path_str = path
            .to_str()
            .ok_or_else(|| AppError::Export(format!("Invalid path: {}", path.display())))?;
        workbook.save(path_str).map_err(to_export_error)?;

        Ok(())
    }
}

fn to_export_error(e: rust_xlsxwriter::XlsxError) -> AppError {
    AppError::Export(e.to_string())
}
