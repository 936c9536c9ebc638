//! CSV word-list loading.
//!
//! Each source is a headed CSV file with any subset of the columns
//! `article, word, plural, translation, category` (case-sensitive). Sources
//! are unioned into one [`Table`]; columns a source lacks load as `None`.
//! A source that fails to open or parse is logged and skipped. Only when
//! every source fails does loading fail.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::drill_engine::models::{Record, Table};
use crate::error::{DrillError, Result};

/// Headers and records parsed from one source.
#[derive(Debug, Clone, Default)]
pub struct Source {
    pub headers: Vec<String>,
    pub records: Vec<Record>,
}

/// Parse CSV from any reader.
pub fn load_from_reader<R: Read>(reader: R) -> std::result::Result<Source, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    let records = reader
        .deserialize::<Record>()
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(Source { headers, records })
}

/// Open and parse a single CSV file.
pub fn load_source(path: &Path) -> Result<Source> {
    let file = File::open(path).map_err(|source| DrillError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_reader(file).map_err(|source| DrillError::Csv {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and union every readable source, in argument order.
pub fn load(paths: &[PathBuf]) -> Result<Table> {
    let mut table = Table::default();
    let mut loaded = 0usize;

    for path in paths {
        let source = match load_source(path) {
            Ok(source) => source,
            Err(e) => {
                warn!("skipping word source: {e}");
                continue;
            }
        };
        debug!(path = %path.display(), columns = ?source.headers, "parsed source");
        info!(path = %path.display(), rows = source.records.len(), "loaded word source");

        for header in source.headers {
            if !table.has_column(&header) {
                table.columns.push(header);
            }
        }
        table.records.extend(source.records);
        loaded += 1;
    }

    if loaded == 0 {
        return Err(DrillError::NoReadableSource { attempted: paths.len() });
    }
    info!(sources = loaded, rows = table.len(), "word table ready");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut f = File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn reader_fills_missing_columns_with_none() {
        let csv = "word,translation\nlaufen,to run\n";
        let source = load_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(source.headers, vec!["word", "translation"]);
        let r = &source.records[0];
        assert_eq!(r.word.as_deref(), Some("laufen"));
        assert_eq!(r.article, None);
        assert_eq!(r.plural, None);
        assert_eq!(r.category, None);
    }

    #[test]
    fn empty_cells_load_as_none() {
        let csv = "article,word,plural,translation,category\n,schnell,,fast,adjective\n";
        let source = load_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(source.records[0].article, None);
        assert_eq!(source.records[0].plural, None);
    }

    #[test]
    fn unknown_columns_are_ignored() {
        let csv = "word,translation,notes\nHaus,house,irregular\n";
        let source = load_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(source.records[0].translation.as_deref(), Some("house"));
    }

    #[test]
    fn sources_union_columns() {
        let dir = TempDir::new().unwrap();
        let a = write(&dir, "a.csv", "article,word,plural,translation,category\nder,Tisch,Tische,table,noun\n");
        let b = write(&dir, "b.csv", "article,word,translation,category\ndas,Haus,house,noun\n");

        let table = load(&[a, b]).unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.has_column("plural"));
        assert_eq!(table.records[0].plural.as_deref(), Some("Tische"));
        assert_eq!(table.records[1].plural, None);
    }

    #[test]
    fn unreadable_source_is_skipped() {
        let dir = TempDir::new().unwrap();
        let good = write(&dir, "good.csv", "word,translation\ngehen,to go\n");
        let missing = dir.path().join("missing.csv");

        let table = load(&[missing, good]).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn all_sources_unreadable_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = load(&[dir.path().join("nope.csv"), dir.path().join("nada.csv")]).unwrap_err();
        assert!(matches!(err, DrillError::NoReadableSource { attempted: 2 }));
    }

    #[test]
    fn no_paths_is_an_error() {
        assert!(matches!(load(&[]), Err(DrillError::NoReadableSource { attempted: 0 })));
    }
}
