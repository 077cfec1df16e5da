use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopRatedRow {
    pub title: String,
    pub rating: f64,
    pub year: i32,
    pub genres: Vec<String>,
    pub director: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreCountRow {
    pub genre: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearTrendRow {
    pub year: i32,
    pub mean_rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuntimeRatingRow {
    pub title: String,
    pub runtime_minutes: u32,
    pub rating: f64,
    pub primary_genre: String,
    pub year: i32,
    pub director: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectorVolumeRow {
    pub director: String,
    pub movie_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrossRatingRow {
    pub title: String,
    pub gross: f64,
    pub rating: f64,
    pub director: String,
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectorRatingRow {
    pub director: String,
    pub mean_rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreRatingRow {
    pub genre: String,
    pub mean_rating: f64,
}
