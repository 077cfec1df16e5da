mod builder;
mod charts;
mod views;

pub use builder::{Dashboard, DashboardOptions};
pub use charts::{ChartKind, ChartSection, ChartSpec};
pub use views::{
    DirectorRatingRow, DirectorVolumeRow, GenreCountRow, GenreRatingRow, GrossRatingRow,
    RuntimeRatingRow, TopRatedRow, YearTrendRow,
};
