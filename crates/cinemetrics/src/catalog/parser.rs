use serde::{Deserialize, Deserializer};
use std::io::Read;

/// One raw row of the source export, before any coercion. Unknown columns in
/// the export are ignored; absent or blank cells arrive as `None`.
#[derive(Debug, Deserialize)]
pub(crate) struct SourceRow {
    #[serde(rename = "Series_Title", default)]
    pub(crate) title: String,
    #[serde(
        rename = "IMDB_Rating",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) rating: Option<String>,
    #[serde(
        rename = "Released_Year",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) year: Option<String>,
    #[serde(rename = "Runtime", default, deserialize_with = "empty_string_as_none")]
    pub(crate) runtime: Option<String>,
    #[serde(rename = "Genre", default, deserialize_with = "empty_string_as_none")]
    pub(crate) genre: Option<String>,
    #[serde(rename = "Director", default)]
    pub(crate) director: String,
    #[serde(rename = "Gross", default, deserialize_with = "empty_string_as_none")]
    pub(crate) gross: Option<String>,
}

pub(crate) fn read_rows<R: Read>(reader: R) -> Result<Vec<SourceRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();

    for row in csv_reader.deserialize::<SourceRow>() {
        rows.push(row?);
    }

    Ok(rows)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn blank_cells_become_none() {
        let csv = "Series_Title,IMDB_Rating,Released_Year,Runtime,Genre,Director,Gross\n\
Blank Movie,,1999, ,Drama,,\n";
        let rows = read_rows(Cursor::new(csv)).expect("parse");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Blank Movie");
        assert!(rows[0].rating.is_none());
        assert_eq!(rows[0].year.as_deref(), Some("1999"));
        assert!(rows[0].runtime.is_none());
        assert_eq!(rows[0].director, "");
        assert!(rows[0].gross.is_none());
    }

    #[test]
    fn unknown_columns_are_ignored() {
        let csv = "Poster_Link,Series_Title,IMDB_Rating,Released_Year,Runtime,Genre,Director,Gross,No_of_Votes\n\
http://example/poster.jpg,Known Movie,8.1,2001,100 min,Drama,Jane Doe,\"1,000\",123456\n";
        let rows = read_rows(Cursor::new(csv)).expect("parse");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Known Movie");
        assert_eq!(rows[0].gross.as_deref(), Some("1,000"));
    }
}
