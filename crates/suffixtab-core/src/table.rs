//! Suffix by part-of-speech word table.

use crate::classify::{Classification, WordClass};
use crate::matcher::SuffixList;

/// Separator between words inside one table cell.
pub const CELL_SEPARATOR: &str = ", ";

/// One suffix row: the suffix and one joined cell per class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// The suffix this row describes.
    pub suffix: String,
    /// Sorted, comma-joined words per class, in [`WordClass::ALL`] order.
    pub cells: [String; 5],
}

impl TableRow {
    /// Cell for `class`.
    pub fn cell(&self, class: WordClass) -> &str {
        &self.cells[class as usize]
    }
}

/// Header plus one row per suffix, in suffix-list order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<TableRow>,
}

impl Table {
    /// Header row: an empty corner cell then the class labels.
    pub fn header() -> [&'static str; 6] {
        let mut header = [""; 6];
        for (slot, class) in header[1..].iter_mut().zip(WordClass::ALL) {
            *slot = class.label();
        }
        header
    }

    /// Suffix rows, without the header.
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Whether the table has no suffix rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Cross-tabulate classified words by suffix.
///
/// Each cell lists the unique words of a class ending with the row's
/// suffix. A word ending with several suffixes shows up in several rows,
/// and a suffix listed twice yields two identical rows.
#[tracing::instrument(skip_all, fields(suffixes = suffixes.len()))]
pub fn build_table(suffixes: &SuffixList, classification: &Classification) -> Table {
    let rows = suffixes
        .iter()
        .map(|suffix| TableRow {
            suffix: suffix.clone(),
            cells: WordClass::ALL.map(|class| {
                classification
                    .words(class)
                    .iter()
                    .filter(|word| word.ends_with(suffix.as_str()))
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(CELL_SEPARATOR)
            }),
        })
        .collect();
    Table { rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classification(entries: &[(WordClass, &str)]) -> Classification {
        let mut classification = Classification::new();
        for (class, word) in entries {
            classification.insert(*class, *word);
        }
        classification
    }

    #[test]
    fn header_has_blank_corner() {
        assert_eq!(
            Table::header(),
            ["", "Noun", "Verb", "Adjective", "Adverb", "Unknown"]
        );
    }

    #[test]
    fn cells_are_sorted_and_joined() {
        let classification = classification(&[
            (WordClass::Verb, "sleeping"),
            (WordClass::Verb, "running"),
            (WordClass::Noun, "building"),
            (WordClass::Adverb, "quickly"),
        ]);
        let table = build_table(&SuffixList::new(["ing", "ly"]), &classification);

        assert_eq!(table.rows().len(), 2);
        let ing = &table.rows()[0];
        assert_eq!(ing.suffix, "ing");
        assert_eq!(ing.cell(WordClass::Noun), "building");
        assert_eq!(ing.cell(WordClass::Verb), "running, sleeping");
        assert_eq!(ing.cell(WordClass::Adjective), "");
        assert_eq!(table.rows()[1].cell(WordClass::Adverb), "quickly");
    }

    #[test]
    fn cells_hold_only_matching_words_of_their_class() {
        let classification = classification(&[
            (WordClass::Noun, "kindness"),
            (WordClass::Noun, "bus"),
            (WordClass::Adjective, "careless"),
            (WordClass::Verb, "bless"),
            (WordClass::Unknown, "unless"),
        ]);
        let suffixes = SuffixList::new(["ness", "less", "s"]);
        let table = build_table(&suffixes, &classification);

        for row in table.rows() {
            for class in WordClass::ALL {
                for word in row.cell(class).split(CELL_SEPARATOR).filter(|w| !w.is_empty()) {
                    assert!(word.ends_with(&row.suffix), "{word} in row {}", row.suffix);
                    assert!(classification.contains(class, word));
                }
            }
        }
        assert_eq!(table.rows()[2].cell(WordClass::Noun), "bus, kindness");
    }

    #[test]
    fn duplicate_suffixes_duplicate_rows() {
        let classification = classification(&[(WordClass::Noun, "nation")]);
        let table = build_table(&SuffixList::new(["ion", "ion"]), &classification);
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[0], table.rows()[1]);
    }

    #[test]
    fn empty_suffix_list_gives_header_only() {
        let classification = classification(&[(WordClass::Noun, "nation")]);
        let table = build_table(&SuffixList::default(), &classification);
        assert!(table.is_empty());
    }
}
