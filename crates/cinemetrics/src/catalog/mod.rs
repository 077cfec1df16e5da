mod cleaner;
mod parser;
mod query;

pub use query::HighlightsQuery;

use serde::Serialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum CatalogImportError {
    #[error("failed to read movie dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid movie CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// One cleaned record of the source table. Every retained movie has a
/// parseable rating, year, runtime and at least one genre label; gross is the
/// only optional field.
#[derive(Debug, Clone, Serialize)]
pub struct Movie {
    pub title: String,
    pub rating: f64,
    pub year: i32,
    pub runtime_minutes: u32,
    pub genres: Vec<String>,
    pub director: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gross: Option<f64>,
}

impl Movie {
    /// First label of the genre list.
    pub fn primary_genre(&self) -> &str {
        self.genres.first().map(String::as_str).unwrap_or("")
    }
}

/// The cleaned dataset: built once by the importer, read-only afterward.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    movies: Vec<Movie>,
    discarded_rows: usize,
}

impl Catalog {
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Source rows dropped during cleaning for lacking a required field.
    pub fn discarded_rows(&self) -> usize {
        self.discarded_rows
    }
}

pub struct CatalogImporter;

impl CatalogImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Catalog, CatalogImportError> {
        let mut movies = Vec::new();
        let mut discarded_rows = 0;

        for row in parser::read_rows(reader)? {
            match clean_row(row) {
                Some(movie) => movies.push(movie),
                None => discarded_rows += 1,
            }
        }

        Ok(Catalog {
            movies,
            discarded_rows,
        })
    }
}

fn clean_row(row: parser::SourceRow) -> Option<Movie> {
    let rating = cleaner::parse_rating(row.rating.as_deref()?)?;
    let year = cleaner::parse_year(row.year.as_deref()?)?;
    let runtime_minutes = cleaner::parse_runtime(row.runtime.as_deref()?)?;
    let genres = cleaner::split_genres(row.genre.as_deref()?);
    if genres.is_empty() {
        return None;
    }

    // Gross is tracked separately: a missing gross keeps the row.
    let gross = row.gross.as_deref().and_then(cleaner::parse_gross);

    Some(Movie {
        title: row.title,
        rating,
        year,
        runtime_minutes,
        genres,
        director: row.director,
        gross,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn importer_keeps_rows_with_all_required_fields() {
        let csv = "Series_Title,IMDB_Rating,Released_Year,Runtime,Genre,Director,Gross\n\
A,9.0,2005,120 min,Drama,Jane Doe,\"$1,000\"\n\
B,9.0,1990,90 min,\"Drama, Comedy\",John Roe,nan\n";
        let catalog = CatalogImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.discarded_rows(), 0);

        let a = &catalog.movies()[0];
        assert_eq!(a.title, "A");
        assert_eq!(a.gross, Some(1000.0));
        assert_eq!(a.primary_genre(), "Drama");

        let b = &catalog.movies()[1];
        assert_eq!(b.genres, vec!["Drama", "Comedy"]);
        assert_eq!(b.gross, None);
    }

    #[test]
    fn importer_drops_rows_missing_required_fields() {
        let csv = "Series_Title,IMDB_Rating,Released_Year,Runtime,Genre,Director,Gross\n\
No Rating,,2005,120 min,Drama,A,\n\
Bad Year,8.0,PG,120 min,Drama,B,\n\
Bad Runtime,8.0,2005,long,Drama,C,\n\
No Genre,8.0,2005,120 min,,D,\n\
Kept,8.0,2005,120 min,Drama,E,\n";
        let catalog = CatalogImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.discarded_rows(), 4);
        assert_eq!(catalog.movies()[0].title, "Kept");
    }

    #[test]
    fn importer_accepts_empty_dataset() {
        let csv = "Series_Title,IMDB_Rating,Released_Year,Runtime,Genre,Director,Gross\n";
        let catalog = CatalogImporter::from_reader(Cursor::new(csv)).expect("import succeeds");
        assert!(catalog.is_empty());
        assert_eq!(catalog.discarded_rows(), 0);
    }

    #[test]
    fn importer_keeps_missing_director_as_empty_string() {
        let csv = "Series_Title,IMDB_Rating,Released_Year,Runtime,Genre,Director,Gross\n\
Orphan,7.5,2012,100 min,Drama,,\n";
        let catalog = CatalogImporter::from_reader(Cursor::new(csv)).expect("import succeeds");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.movies()[0].director, "");
    }

    #[test]
    fn importer_from_path_propagates_io_errors() {
        let error = CatalogImporter::from_path("./does-not-exist.csv")
            .expect_err("expected io error");

        match error {
            CatalogImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
