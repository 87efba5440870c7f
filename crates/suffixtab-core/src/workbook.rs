//! Spreadsheet output.
//!
//! Both outputs go through [`Grid`], a plain rows-of-cells shape, and are
//! saved as single-sheet `.xlsx` files.

use camino::Utf8Path;
use rust_xlsxwriter::Workbook;

use crate::classify::WordClass;
use crate::error::WorkbookError;
use crate::statistics::Statistics;
use crate::table::Table;

const MAX_ROWS: usize = 1_048_576;
const MAX_COLUMNS: usize = 16_384;

/// One spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// String cell. Empty text leaves the cell blank.
    Text(String),
    /// Numeric cell.
    Number(f64),
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<usize> for Cell {
    fn from(count: usize) -> Self {
        Self::Number(count as f64)
    }
}

/// Rows of cells, written top-left first.
pub type Grid = Vec<Vec<Cell>>;

fn header_row() -> Vec<Cell> {
    Table::header().into_iter().map(Cell::from).collect()
}

/// The word table as a grid: header then one row per suffix.
pub fn table_grid(table: &Table) -> Grid {
    std::iter::once(header_row())
        .chain(table.rows().iter().map(|row| {
            std::iter::once(Cell::from(row.suffix.as_str()))
                .chain(row.cells.iter().map(|cell| Cell::from(cell.as_str())))
                .collect()
        }))
        .collect()
}

/// The statistics as a grid: header then one row of counts per suffix.
pub fn statistics_grid(statistics: &Statistics) -> Grid {
    std::iter::once(header_row())
        .chain(statistics.entries().iter().map(|(suffix, counts)| {
            std::iter::once(Cell::from(suffix.as_str()))
                .chain(WordClass::ALL.map(|class| Cell::from(counts.get(class))))
                .collect()
        }))
        .collect()
}

/// Save `grid` as a one-sheet workbook at `path`, replacing any file there.
#[tracing::instrument(skip_all, fields(path = %path, rows = grid.len()))]
pub fn write_grid(grid: &[Vec<Cell>], path: &Utf8Path) -> Result<(), WorkbookError> {
    let columns = grid.iter().map(Vec::len).max().unwrap_or(0);
    if grid.len() > MAX_ROWS || columns > MAX_COLUMNS {
        return Err(WorkbookError::TooLarge {
            path: path.to_owned(),
            rows: grid.len(),
            columns,
        });
    }
    let write_error = |source| WorkbookError::Write {
        path: path.to_owned(),
        source,
    };

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (row, cells) in (0u32..).zip(grid) {
        for (column, cell) in (0u16..).zip(cells) {
            match cell {
                Cell::Text(text) if text.is_empty() => {}
                Cell::Text(text) => {
                    worksheet
                        .write_string(row, column, text)
                        .map_err(write_error)?;
                }
                Cell::Number(value) => {
                    worksheet
                        .write_number(row, column, *value)
                        .map_err(write_error)?;
                }
            }
        }
    }
    workbook.save(path).map_err(write_error)?;
    tracing::info!(path = %path, "workbook written");
    Ok(())
}

/// Write the suffix x class word table.
pub fn write_table(table: &Table, path: &Utf8Path) -> Result<(), WorkbookError> {
    write_grid(&table_grid(table), path)
}

/// Write the suffix x class occurrence counts.
pub fn write_statistics(statistics: &Statistics, path: &Utf8Path) -> Result<(), WorkbookError> {
    write_grid(&statistics_grid(statistics), path)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::classify::Classification;
    use crate::matcher::SuffixList;
    use crate::statistics::calculate_statistics;
    use crate::table::build_table;
    use camino::Utf8PathBuf;
    use std::io::Read;
    use tempfile::TempDir;

    /// Read one part of a written workbook as text.
    pub(crate) fn read_part(path: &Utf8Path, part: &str) -> String {
        let file = std::fs::File::open(path).unwrap();
        let mut archive = zip::ZipArchive::new(file).unwrap();
        let mut entry = archive.by_name(part).unwrap();
        let mut xml = String::new();
        entry.read_to_string(&mut xml).unwrap();
        xml
    }

    fn classification() -> Classification {
        let mut classification = Classification::new();
        classification.insert(WordClass::Verb, "running");
        classification.insert(WordClass::Verb, "sleeping");
        classification.insert(WordClass::Adverb, "quickly");
        classification
    }

    #[test]
    fn table_grid_has_header_and_rows() {
        let table = build_table(&SuffixList::new(["ing"]), &classification());
        let grid = table_grid(&table);
        assert_eq!(grid.len(), 2);
        assert_eq!(grid[0][0], Cell::from(""));
        assert_eq!(grid[0][5], Cell::from("Unknown"));
        assert_eq!(grid[1][0], Cell::from("ing"));
        assert_eq!(grid[1][2], Cell::from("running, sleeping"));
    }

    #[test]
    fn statistics_grid_uses_numbers() {
        let words = ["running", "running", "quickly"];
        let stats = calculate_statistics(&words, &SuffixList::new(["ing", "ly"]), &classification());
        let grid = statistics_grid(&stats);
        assert_eq!(grid.len(), 3);
        assert_eq!(grid[1][2], Cell::Number(2.0));
        assert_eq!(grid[2][4], Cell::Number(1.0));
        assert_eq!(grid[2][1], Cell::Number(0.0));
    }

    #[test]
    fn empty_suffix_list_writes_header_only() {
        let grid = table_grid(&build_table(&SuffixList::default(), &classification()));
        assert_eq!(grid, vec![header_row()]);
    }

    #[test]
    fn writes_table_workbook() {
        let dir = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(dir.path().join("result.xlsx")).unwrap();
        let table = build_table(&SuffixList::new(["ing", "ly"]), &classification());
        write_table(&table, &path).unwrap();

        let strings = read_part(&path, "xl/sharedStrings.xml");
        for expected in ["Noun", "Adjective", "Unknown", "ing", "running, sleeping", "quickly"] {
            assert!(strings.contains(expected), "missing {expected}");
        }
    }

    #[test]
    fn writes_statistics_workbook_with_numbers() {
        let dir = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(dir.path().join("statistics.xlsx")).unwrap();
        let words = ["running", "running", "running", "quickly"];
        let stats = calculate_statistics(&words, &SuffixList::new(["ing"]), &classification());
        write_statistics(&stats, &path).unwrap();

        let sheet = read_part(&path, "xl/worksheets/sheet1.xml");
        assert!(sheet.contains("<v>3</v>"));
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(dir.path().join("result.xlsx")).unwrap();
        std::fs::write(&path, "stale").unwrap();
        write_grid(&[vec![Cell::from("fresh")]], &path).unwrap();
        assert!(read_part(&path, "xl/sharedStrings.xml").contains("fresh"));
    }

    #[test]
    fn unwritable_destination_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(dir.path().join("missing").join("out.xlsx")).unwrap();
        let err = write_grid(&[vec![Cell::from("x")]], &path).unwrap_err();
        assert!(matches!(err, WorkbookError::Write { .. }));
        assert!(err.to_string().contains("out.xlsx"));
    }
}
