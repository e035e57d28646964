use super::GamesTable;
use crate::error::Error;
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// Writes the table to a single worksheet, replacing any existing file. The first row holds the
/// column headers. Blank cells are left unwritten.
pub fn write_workbook(path: &Path, table: &GamesTable) -> Result<(), Error> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    
    for (col_idx, header) in table.columns.iter().enumerate() {
        worksheet.write_string(0, column_index(col_idx)?, header)?;
    }
    
    for (row_idx, row) in table.rows.iter().enumerate() {
        let row_num = row_index(row_idx + 1)?;
        
        for (col_idx, cell) in row.iter().enumerate() {
            if let Some(cell) = cell {
                worksheet.write_string(row_num, column_index(col_idx)?, cell)?;
            }
        }
    }
    
    workbook.save(path)?;
    Ok(())
}

fn column_index(index: usize) -> Result<u16, Error> {
    u16::try_from(index).map_err(|_e| Error::Xlsx(rust_xlsxwriter::XlsxError::RowColumnLimitError))
}

fn row_index(index: usize) -> Result<u32, Error> {
    u32::try_from(index).map_err(|_e| Error::Xlsx(rust_xlsxwriter::XlsxError::RowColumnLimitError))
}
