use super::charts::{ChartKind, ChartSection, ChartSpec};
use super::views::{
    DirectorRatingRow, DirectorVolumeRow, GenreCountRow, GenreRatingRow, GrossRatingRow,
    RuntimeRatingRow, TopRatedRow, YearTrendRow,
};
use crate::catalog::Catalog;
use serde::Serialize;
use std::collections::BTreeMap;

const DASHBOARD_TITLE: &str = "IMDb Movie Catalog Dashboard";

const TOP_RATED_LIMIT: usize = 20;
const GENRE_LIMIT: usize = 10;
const DIRECTOR_VOLUME_LIMIT: usize = 15;
const DIRECTOR_RATING_LIMIT: usize = 20;

// Year window for the rating trend; releases outside it are noise rows.
const TREND_FIRST_YEAR: i32 = 1950;
const TREND_LAST_YEAR: i32 = 2025;

#[derive(Debug, Default, Clone, Copy)]
pub struct DashboardOptions {
    /// Also compute the average-rating-by-primary-genre section. Off by
    /// default so the standard dashboard renders exactly its seven charts.
    pub include_genre_ratings: bool,
}

/// The full dashboard: page title, row accounting, and every section in page
/// order. Field order here is the render order.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub title: &'static str,
    pub source_rows: usize,
    pub cleaned_rows: usize,
    pub top_rated: ChartSection<TopRatedRow>,
    pub genre_distribution: ChartSection<GenreCountRow>,
    pub rating_trend: ChartSection<YearTrendRow>,
    pub runtime_rating: ChartSection<RuntimeRatingRow>,
    pub director_volume: ChartSection<DirectorVolumeRow>,
    pub gross_rating: ChartSection<GrossRatingRow>,
    pub director_rating: ChartSection<DirectorRatingRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre_ratings: Option<ChartSection<GenreRatingRow>>,
}

impl Dashboard {
    /// Build every view from the cleaned catalog. Pure and deterministic:
    /// rebuilding from the same catalog yields identical sections.
    pub fn build(catalog: &Catalog, options: DashboardOptions) -> Self {
        Dashboard {
            title: DASHBOARD_TITLE,
            source_rows: catalog.len() + catalog.discarded_rows(),
            cleaned_rows: catalog.len(),
            top_rated: top_rated(catalog),
            genre_distribution: genre_distribution(catalog),
            rating_trend: rating_trend(catalog),
            runtime_rating: runtime_rating(catalog),
            director_volume: director_volume(catalog),
            gross_rating: gross_rating(catalog),
            director_rating: director_rating(catalog),
            genre_ratings: options
                .include_genre_ratings
                .then(|| genre_ratings(catalog)),
        }
    }
}

fn top_rated(catalog: &Catalog) -> ChartSection<TopRatedRow> {
    let mut ranked: Vec<_> = catalog.movies().iter().collect();
    // Stable sort: equal ratings keep their original catalog order.
    ranked.sort_by(|a, b| b.rating.total_cmp(&a.rating));

    let rows = ranked
        .into_iter()
        .take(TOP_RATED_LIMIT)
        .map(|movie| TopRatedRow {
            title: movie.title.clone(),
            rating: movie.rating,
            year: movie.year,
            genres: movie.genres.clone(),
            director: movie.director.clone(),
        })
        .collect();

    ChartSection {
        heading: "Top Rated Movies",
        spec: ChartSpec {
            kind: ChartKind::Bar,
            title: "Top 20 IMDb Rated Movies",
            x: "title",
            y: "rating",
            color: Some("rating"),
            hover: vec!["year", "genres", "director"],
            x_tick_angle: Some(-45),
            log_x: false,
            markers: false,
        },
        rows,
    }
}

fn genre_distribution(catalog: &Catalog) -> ChartSection<GenreCountRow> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for movie in catalog.movies() {
        for genre in &movie.genres {
            *counts.entry(genre.as_str()).or_default() += 1;
        }
    }

    // BTreeMap iteration gives label order; the stable sort then ranks by
    // count with label as the tie-break.
    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let rows = ranked
        .into_iter()
        .take(GENRE_LIMIT)
        .map(|(genre, count)| GenreCountRow {
            genre: genre.to_string(),
            count,
        })
        .collect();

    ChartSection {
        heading: "Genre Distribution",
        spec: ChartSpec {
            kind: ChartKind::Pie,
            title: "Top 10 Genres Distribution",
            x: "genre",
            y: "count",
            color: None,
            hover: Vec::new(),
            x_tick_angle: None,
            log_x: false,
            markers: false,
        },
        rows,
    }
}

fn rating_trend(catalog: &Catalog) -> ChartSection<YearTrendRow> {
    let mut by_year: BTreeMap<i32, (f64, usize)> = BTreeMap::new();
    for movie in catalog.movies() {
        if (TREND_FIRST_YEAR..=TREND_LAST_YEAR).contains(&movie.year) {
            let entry = by_year.entry(movie.year).or_insert((0.0, 0));
            entry.0 += movie.rating;
            entry.1 += 1;
        }
    }

    let rows = by_year
        .into_iter()
        .map(|(year, (sum, count))| YearTrendRow {
            year,
            mean_rating: sum / count as f64,
        })
        .collect();

    ChartSection {
        heading: "Rating Trends by Year",
        spec: ChartSpec {
            kind: ChartKind::Line,
            title: "Average IMDb Rating Over Years",
            x: "year",
            y: "mean_rating",
            color: None,
            hover: Vec::new(),
            x_tick_angle: None,
            log_x: false,
            markers: true,
        },
        rows,
    }
}

fn runtime_rating(catalog: &Catalog) -> ChartSection<RuntimeRatingRow> {
    let rows = catalog
        .movies()
        .iter()
        .map(|movie| RuntimeRatingRow {
            title: movie.title.clone(),
            runtime_minutes: movie.runtime_minutes,
            rating: movie.rating,
            primary_genre: movie.primary_genre().to_string(),
            year: movie.year,
            director: movie.director.clone(),
        })
        .collect();

    ChartSection {
        heading: "Runtime vs Rating",
        spec: ChartSpec {
            kind: ChartKind::Scatter,
            title: "Runtime vs IMDb Rating",
            x: "runtime_minutes",
            y: "rating",
            color: Some("primary_genre"),
            hover: vec!["title", "year", "director"],
            x_tick_angle: None,
            log_x: false,
            markers: false,
        },
        rows,
    }
}

fn director_volume(catalog: &Catalog) -> ChartSection<DirectorVolumeRow> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for movie in catalog.movies() {
        // An absent director is kept as its own (empty-name) group.
        *counts.entry(movie.director.as_str()).or_default() += 1;
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let rows = ranked
        .into_iter()
        .take(DIRECTOR_VOLUME_LIMIT)
        .map(|(director, movie_count)| DirectorVolumeRow {
            director: director.to_string(),
            movie_count,
        })
        .collect();

    ChartSection {
        heading: "Most Prolific Directors",
        spec: ChartSpec {
            kind: ChartKind::Bar,
            title: "Top Directors by Number of Movies",
            x: "director",
            y: "movie_count",
            color: Some("movie_count"),
            hover: Vec::new(),
            x_tick_angle: Some(-45),
            log_x: false,
            markers: false,
        },
        rows,
    }
}

fn gross_rating(catalog: &Catalog) -> ChartSection<GrossRatingRow> {
    let rows = catalog
        .movies()
        .iter()
        .filter_map(|movie| {
            movie.gross.map(|gross| GrossRatingRow {
                title: movie.title.clone(),
                gross,
                rating: movie.rating,
                director: movie.director.clone(),
                year: movie.year,
            })
        })
        .collect();

    ChartSection {
        heading: "Gross Earnings vs Rating",
        spec: ChartSpec {
            kind: ChartKind::Scatter,
            title: "Gross Earnings vs IMDb Rating",
            x: "gross",
            y: "rating",
            color: Some("rating"),
            hover: vec!["title", "director", "year"],
            x_tick_angle: None,
            log_x: true,
            markers: false,
        },
        rows,
    }
}

fn director_rating(catalog: &Catalog) -> ChartSection<DirectorRatingRow> {
    let mut totals: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for movie in catalog.movies() {
        let entry = totals.entry(movie.director.as_str()).or_insert((0.0, 0));
        entry.0 += movie.rating;
        entry.1 += 1;
    }

    let mut ranked: Vec<(&str, f64)> = totals
        .into_iter()
        .map(|(director, (sum, count))| (director, sum / count as f64))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    let rows = ranked
        .into_iter()
        .take(DIRECTOR_RATING_LIMIT)
        .map(|(director, mean_rating)| DirectorRatingRow {
            director: director.to_string(),
            mean_rating,
        })
        .collect();

    ChartSection {
        heading: "Top Directors by Average IMDb Rating",
        spec: ChartSpec {
            kind: ChartKind::Bar,
            title: "Top 20 Directors by Average IMDb Rating",
            x: "director",
            y: "mean_rating",
            color: Some("mean_rating"),
            hover: Vec::new(),
            x_tick_angle: Some(-45),
            log_x: false,
            markers: false,
        },
        rows,
    }
}

fn genre_ratings(catalog: &Catalog) -> ChartSection<GenreRatingRow> {
    let mut totals: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for movie in catalog.movies() {
        let entry = totals.entry(movie.primary_genre()).or_insert((0.0, 0));
        entry.0 += movie.rating;
        entry.1 += 1;
    }

    let mut ranked: Vec<(&str, f64)> = totals
        .into_iter()
        .map(|(genre, (sum, count))| (genre, sum / count as f64))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    let rows = ranked
        .into_iter()
        .map(|(genre, mean_rating)| GenreRatingRow {
            genre: genre.to_string(),
            mean_rating,
        })
        .collect();

    ChartSection {
        heading: "Average Rating by Primary Genre",
        spec: ChartSpec {
            kind: ChartKind::Bar,
            title: "Average IMDb Rating by Primary Genre",
            x: "genre",
            y: "mean_rating",
            color: Some("mean_rating"),
            hover: Vec::new(),
            x_tick_angle: Some(-45),
            log_x: false,
            markers: false,
        },
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogImporter;
    use std::io::Cursor;

    fn catalog_from(rows: &[(&str, f64, i32, u32, &str, &str, &str)]) -> Catalog {
        let mut csv =
            String::from("Series_Title,IMDB_Rating,Released_Year,Runtime,Genre,Director,Gross\n");
        for (title, rating, year, runtime, genre, director, gross) in rows {
            csv.push_str(&format!(
                "{title},{rating},{year},{runtime} min,\"{genre}\",{director},\"{gross}\"\n"
            ));
        }
        CatalogImporter::from_reader(Cursor::new(csv)).expect("import succeeds")
    }

    #[test]
    fn top_rated_ties_keep_catalog_order() {
        let catalog = catalog_from(&[
            ("First", 9.0, 2005, 120, "Drama", "A", "1,000"),
            ("Second", 9.0, 1990, 90, "Drama, Comedy", "B", "nan"),
            ("Lower", 8.0, 2000, 100, "Drama", "C", "nan"),
        ]);

        let section = top_rated(&catalog);
        let titles: Vec<&str> = section.rows.iter().map(|row| row.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second", "Lower"]);
    }

    #[test]
    fn genre_distribution_breaks_count_ties_by_label() {
        let catalog = catalog_from(&[
            ("One", 8.0, 2000, 100, "Western", "A", "nan"),
            ("Two", 8.0, 2001, 100, "Adventure", "B", "nan"),
            ("Three", 8.0, 2002, 100, "Drama", "C", "nan"),
            ("Four", 8.0, 2003, 100, "Drama", "D", "nan"),
        ]);

        let section = genre_distribution(&catalog);
        assert_eq!(
            section.rows,
            vec![
                GenreCountRow {
                    genre: "Drama".to_string(),
                    count: 2
                },
                GenreCountRow {
                    genre: "Adventure".to_string(),
                    count: 1
                },
                GenreCountRow {
                    genre: "Western".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn rating_trend_averages_within_the_year_window() {
        let catalog = catalog_from(&[
            ("Too Early", 9.9, 1949, 100, "Drama", "A", "nan"),
            ("Edge Low", 8.0, 1950, 100, "Drama", "B", "nan"),
            ("Edge Low Again", 9.0, 1950, 100, "Drama", "C", "nan"),
            ("Edge High", 7.0, 2025, 100, "Drama", "D", "nan"),
            ("Too Late", 9.9, 2026, 100, "Drama", "E", "nan"),
        ]);

        let section = rating_trend(&catalog);
        assert_eq!(section.rows.len(), 2);
        assert_eq!(section.rows[0].year, 1950);
        assert!((section.rows[0].mean_rating - 8.5).abs() < 1e-9);
        assert_eq!(section.rows[1].year, 2025);
    }

    #[test]
    fn director_views_group_the_empty_director() {
        let catalog = catalog_from(&[
            ("One", 8.0, 2000, 100, "Drama", "", "nan"),
            ("Two", 9.0, 2001, 100, "Drama", "", "nan"),
            ("Three", 7.0, 2002, 100, "Drama", "Named", "nan"),
        ]);

        let volume = director_volume(&catalog);
        assert_eq!(volume.rows.len(), 2);
        assert_eq!(volume.rows[0].director, "");
        assert_eq!(volume.rows[0].movie_count, 2);

        let rating = director_rating(&catalog);
        assert_eq!(rating.rows[0].director, "");
        assert!((rating.rows[0].mean_rating - 8.5).abs() < 1e-9);
    }

    #[test]
    fn gross_view_drops_rows_without_gross() {
        let catalog = catalog_from(&[
            ("A", 9.0, 2005, 120, "Drama", "Jane", "$1,000"),
            ("B", 9.0, 1990, 90, "Drama, Comedy", "John", "nan"),
        ]);

        let section = gross_rating(&catalog);
        assert_eq!(section.rows.len(), 1);
        assert_eq!(section.rows[0].title, "A");
        assert_eq!(section.rows[0].gross, 1000.0);
        assert!(section.spec.log_x);
    }

    #[test]
    fn genre_ratings_average_by_primary_genre_only() {
        let catalog = catalog_from(&[
            ("A", 9.0, 2005, 120, "Drama", "Jane", "nan"),
            ("B", 7.0, 1990, 90, "Drama, Comedy", "John", "nan"),
            ("C", 8.0, 2000, 100, "Comedy", "Jill", "nan"),
        ]);

        let section = genre_ratings(&catalog);
        assert_eq!(section.rows.len(), 2);
        // Comedy as a secondary label never forms a group of its own.
        assert_eq!(section.rows[0].genre, "Drama");
        assert!((section.rows[0].mean_rating - 8.0).abs() < 1e-9);
        assert_eq!(section.rows[1].genre, "Comedy");
    }

    #[test]
    fn build_includes_genre_ratings_only_on_request() {
        let catalog = catalog_from(&[("A", 9.0, 2005, 120, "Drama", "Jane", "nan")]);

        let standard = Dashboard::build(&catalog, DashboardOptions::default());
        assert!(standard.genre_ratings.is_none());

        let extended = Dashboard::build(
            &catalog,
            DashboardOptions {
                include_genre_ratings: true,
            },
        );
        assert!(extended.genre_ratings.is_some());
    }
}
