//! Spreadsheet parsing into student records

use crate::{RosterError, Result, Student, ID_COLUMN, NAME_COLUMN};
use calamine::{Data, Reader, Xlsx};
use std::io::Cursor;

/// XLSX files are ZIP containers; anything else is treated as CSV
const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// Parse roster bytes into students, preserving row order.
///
/// The format is sniffed from the magic bytes. Both formats require the
/// `Nombres` and `Identificacion` columns in the header row and fail with
/// [`RosterError::MissingColumn`] before any rendering happens. Rows whose
/// name and identifier are both empty are skipped.
pub fn parse_roster(data: &[u8]) -> Result<Vec<Student>> {
    if data.len() >= ZIP_MAGIC.len() && data[..ZIP_MAGIC.len()] == ZIP_MAGIC {
        parse_xlsx(data)
    } else {
        parse_csv(data)
    }
}

fn parse_xlsx(data: &[u8]) -> Result<Vec<Student>> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(data))
        .map_err(|e| RosterError::Workbook(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(RosterError::NoWorksheet)?
        .map_err(|e| RosterError::Workbook(e.to_string()))?;

    let mut rows = range.rows();
    let header = rows.next().ok_or(RosterError::MissingColumn(NAME_COLUMN))?;

    let name_idx = find_column(header, NAME_COLUMN)?;
    let id_idx = find_column(header, ID_COLUMN)?;

    let mut students = Vec::new();
    for row in rows {
        let name = row.get(name_idx).map(cell_to_string).unwrap_or_default();
        let identifier = row.get(id_idx).map(cell_to_string).unwrap_or_default();

        if name.is_empty() && identifier.is_empty() {
            continue;
        }
        students.push(Student { name, identifier });
    }

    Ok(students)
}

fn parse_csv(data: &[u8]) -> Result<Vec<Student>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(data);

    let headers = reader.headers()?.clone();
    let name_idx = headers
        .iter()
        .position(|h| h.trim() == NAME_COLUMN)
        .ok_or(RosterError::MissingColumn(NAME_COLUMN))?;
    let id_idx = headers
        .iter()
        .position(|h| h.trim() == ID_COLUMN)
        .ok_or(RosterError::MissingColumn(ID_COLUMN))?;

    let mut students = Vec::new();
    for record in reader.records() {
        let record = record?;
        let name = record.get(name_idx).unwrap_or("").trim().to_string();
        let identifier = record.get(id_idx).unwrap_or("").trim().to_string();

        if name.is_empty() && identifier.is_empty() {
            continue;
        }
        students.push(Student { name, identifier });
    }

    Ok(students)
}

fn find_column(header: &[Data], wanted: &'static str) -> Result<usize> {
    header
        .iter()
        .position(|cell| cell_to_string(cell) == wanted)
        .ok_or(RosterError::MissingColumn(wanted))
}

/// Coerce a cell to its string form.
///
/// Integral floats drop the decimal point so identifiers stored as numbers
/// render as `111`, not `111.0`.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Int(i) => i.to_string(),
        other => other.to_string().trim().to_string(),
    }
}
