use crate::error::CoreError;
use crate::models::{CellValue, Sheet};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// Sheet name used for delimited text files, which carry no worksheets.
pub const CSV_SHEET_NAME: &str = "Main";

/// Reads every sheet of the source file fully into memory.
///
/// `.csv` goes through the delimited-text reader and yields a single sheet
/// named [`CSV_SHEET_NAME`]; everything else is opened as a workbook and
/// yields one sheet per worksheet, in workbook order. Sheets with no header
/// row are kept (with an empty header) so callers can report them by name.
pub fn read_source(path: &Path) -> Result<Vec<Sheet>, CoreError> {
    if path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
    {
        Ok(vec![read_csv(path)?])
    } else {
        read_workbook(path)
    }
}

/// Reads a comma-separated file as a single sheet. The first record is the
/// header; rows shorter than the header read back as empty cells.
pub fn read_csv(path: &Path) -> Result<Sheet, CoreError> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_path(path)?;

    let header: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let row = record
            .iter()
            .map(|field| {
                if field.trim().is_empty() {
                    CellValue::Empty
                } else {
                    CellValue::Text(field.to_string())
                }
            })
            .collect();
        rows.push(row);
    }

    Ok(Sheet {
        name: CSV_SHEET_NAME.to_string(),
        header,
        rows,
    })
}

/// Reads every worksheet of an xlsx/xls/ods workbook.
pub fn read_workbook(path: &Path) -> Result<Vec<Sheet>, CoreError> {
    let mut workbook = open_workbook_auto(path)?;
    let names = workbook.sheet_names().to_owned();

    let mut sheets = Vec::with_capacity(names.len());
    for name in names {
        let range = workbook.worksheet_range(&name)?;
        let mut rows = range.rows().map(|r| r.iter().map(convert).collect());

        let header: Vec<String> = rows
            .next()
            .map(|cells: Vec<CellValue>| cells.iter().map(|c| c.to_string()).collect())
            .unwrap_or_default();

        sheets.push(Sheet {
            name,
            header,
            rows: rows.collect(),
        });
    }

    Ok(sheets)
}

fn convert(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) if s.trim().is_empty() => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        // Date-typed cells convert natively so they never take the
        // string-parsing path.
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(CellValue::DateTime)
            .unwrap_or(CellValue::Empty),
        // ISO-formatted date strings fall through to the normalizer.
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) => CellValue::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).expect("create csv");
        f.write_all(contents.as_bytes()).expect("write csv");
        path
    }

    #[test]
    fn csv_reads_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "tasks.csv",
            "Due,Task\n2024-01-01,Pay rent\n,\n2024-03-01,\n",
        );

        let sheet = read_csv(&path).unwrap();

        assert_eq!(sheet.name, CSV_SHEET_NAME);
        assert_eq!(sheet.header, vec!["Due", "Task"]);
        assert_eq!(sheet.rows.len(), 3);
        assert_eq!(sheet.rows[0][1], CellValue::Text("Pay rent".to_string()));
        assert_eq!(sheet.rows[1][0], CellValue::Empty);
        assert_eq!(sheet.rows[2][1], CellValue::Empty);
    }

    #[test]
    fn read_source_dispatches_csv_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "tasks.CSV", "Due,Task\n");

        let sheets = read_source(&path).unwrap();
        assert_eq!(sheets.len(), 1);
        assert_eq!(sheets[0].name, CSV_SHEET_NAME);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.csv");
        assert!(read_source(&missing).is_err());
    }

    #[test]
    fn workbook_date_cells_convert_natively() {
        use calamine::ExcelDateTime;

        // 2024-06-01 in the 1900 date system.
        let serial = ExcelDateTime::new(
            45444.0,
            calamine::ExcelDateTimeType::DateTime,
            false,
        );
        let cell = Data::DateTime(serial);
        match convert(&cell) {
            CellValue::DateTime(dt) => {
                assert_eq!(dt.date(), chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
            }
            other => panic!("expected a datetime cell, got {:?}", other),
        }
    }
}
