use cinemetrics::catalog::{CatalogImporter, HighlightsQuery};
use cinemetrics::config::AppConfig;
use cinemetrics::dashboard::{Dashboard, DashboardOptions};
use cinemetrics::error::AppError;
use clap::Args;
use std::io::Cursor;
use std::path::PathBuf;

const SAMPLE_EXPORT: &str = include_str!("../../../data/sample_movies.csv");

#[derive(Args, Debug, Default)]
pub(crate) struct DashboardRenderArgs {
    /// Movie CSV export to build from (defaults to the configured dataset path)
    #[arg(long)]
    pub(crate) dataset: Option<PathBuf>,
    /// Include the average-rating-by-primary-genre section
    #[arg(long)]
    pub(crate) genre_ratings: bool,
    /// Print the full dashboard payload as pretty JSON instead of the summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional movie CSV export to run the demo against (defaults to a bundled sample)
    #[arg(long)]
    pub(crate) dataset: Option<PathBuf>,
    /// Include the average-rating-by-primary-genre section in the output
    #[arg(long)]
    pub(crate) genre_ratings: bool,
    /// Skip the highlights query portion of the demo
    #[arg(long)]
    pub(crate) skip_highlights: bool,
}

pub(crate) fn run_dashboard_render(args: DashboardRenderArgs) -> Result<(), AppError> {
    let DashboardRenderArgs {
        dataset,
        genre_ratings,
        json,
    } = args;

    let path = match dataset {
        Some(path) => path,
        None => AppConfig::load()?.dataset.path,
    };
    let catalog = CatalogImporter::from_path(&path)?;
    let dashboard = Dashboard::build(
        &catalog,
        DashboardOptions {
            include_genre_ratings: genre_ratings,
        },
    );

    if json {
        match serde_json::to_string_pretty(&dashboard) {
            Ok(payload) => println!("{payload}"),
            Err(err) => println!("dashboard payload unavailable: {err}"),
        }
        return Ok(());
    }

    println!("Dataset: {}", path.display());
    render_dashboard(&dashboard);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        dataset,
        genre_ratings,
        skip_highlights,
    } = args;

    println!("Movie dashboard demo");
    let catalog = match dataset {
        Some(path) => {
            println!("Data source: {}", path.display());
            CatalogImporter::from_path(path)?
        }
        None => {
            println!("Data source: bundled sample export");
            CatalogImporter::from_reader(Cursor::new(SAMPLE_EXPORT))?
        }
    };

    let dashboard = Dashboard::build(
        &catalog,
        DashboardOptions {
            include_genre_ratings: genre_ratings,
        },
    );
    render_dashboard(&dashboard);

    if skip_highlights {
        return Ok(());
    }

    let query = HighlightsQuery::default();
    let matches = query.select(&catalog);
    if matches.is_empty() {
        println!(
            "\nHighlights (rating > {}, year >= {}): none",
            query.min_rating, query.min_year
        );
    } else {
        println!(
            "\nHighlights (rating > {}, year >= {})",
            query.min_rating, query.min_year
        );
        for movie in matches {
            println!(
                "- {} ({}) rated {:.1} by {}",
                movie.title, movie.year, movie.rating, movie.director
            );
        }
    }

    Ok(())
}

/// Print each dashboard section in page order. Scatter sections are large,
/// so they render as row counts rather than full listings.
pub(crate) fn render_dashboard(dashboard: &Dashboard) {
    println!("{}", dashboard.title);
    println!(
        "Cleaned rows: {} of {} source rows",
        dashboard.cleaned_rows, dashboard.source_rows
    );

    if dashboard.top_rated.rows.is_empty() {
        println!("\n{}: none", dashboard.top_rated.heading);
    } else {
        println!("\n{}", dashboard.top_rated.heading);
        for row in &dashboard.top_rated.rows {
            println!(
                "- {} ({}) rated {:.1} by {}",
                row.title, row.year, row.rating, row.director
            );
        }
    }

    if dashboard.genre_distribution.rows.is_empty() {
        println!("\n{}: none", dashboard.genre_distribution.heading);
    } else {
        println!("\n{}", dashboard.genre_distribution.heading);
        for row in &dashboard.genre_distribution.rows {
            println!("- {}: {} titles", row.genre, row.count);
        }
    }

    if dashboard.rating_trend.rows.is_empty() {
        println!("\n{}: none", dashboard.rating_trend.heading);
    } else {
        println!("\n{}", dashboard.rating_trend.heading);
        for row in &dashboard.rating_trend.rows {
            println!("- {}: {:.2}", row.year, row.mean_rating);
        }
    }

    println!(
        "\n{}: {} titles plotted",
        dashboard.runtime_rating.heading,
        dashboard.runtime_rating.rows.len()
    );

    if dashboard.director_volume.rows.is_empty() {
        println!("\n{}: none", dashboard.director_volume.heading);
    } else {
        println!("\n{}", dashboard.director_volume.heading);
        for row in &dashboard.director_volume.rows {
            println!("- {}: {} movies", row.director, row.movie_count);
        }
    }

    println!(
        "\n{}: {} titles with reported gross",
        dashboard.gross_rating.heading,
        dashboard.gross_rating.rows.len()
    );

    if dashboard.director_rating.rows.is_empty() {
        println!("\n{}: none", dashboard.director_rating.heading);
    } else {
        println!("\n{}", dashboard.director_rating.heading);
        for row in &dashboard.director_rating.rows {
            println!("- {}: {:.2} average", row.director, row.mean_rating);
        }
    }

    if let Some(genre_ratings) = &dashboard.genre_ratings {
        if genre_ratings.rows.is_empty() {
            println!("\n{}: none", genre_ratings.heading);
        } else {
            println!("\n{}", genre_ratings.heading);
            for row in &genre_ratings.rows {
                println!("- {}: {:.2} average", row.genre, row.mean_rating);
            }
        }
    }
}
