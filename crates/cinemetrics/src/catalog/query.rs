use super::{Catalog, Movie};

/// Filter over the cleaned catalog: strictly-above a rating floor and at or
/// after a release year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightsQuery {
    pub min_rating: f64,
    pub min_year: i32,
}

impl Default for HighlightsQuery {
    fn default() -> Self {
        Self {
            min_rating: 8.5,
            min_year: 2000,
        }
    }
}

impl HighlightsQuery {
    pub fn select<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Movie> {
        catalog
            .movies()
            .iter()
            .filter(|movie| movie.rating > self.min_rating && movie.year >= self.min_year)
            .collect()
    }
}
