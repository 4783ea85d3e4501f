use csv::{ByteRecord, ReaderBuilder, Trim};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::path::Path;

use super::models::{FlatRating, MAX_RATING, MIN_RATING, MovieId, MovieRecord, RatingRecord, RatingTable};
use crate::config::DataSettings;
use crate::errors::LoadError;

const RATINGS_DELIMITER: u8 = b'\t';
const ITEMS_DELIMITER: u8 = b'|';
const RATINGS_FIELDS: usize = 4;
const ITEMS_MIN_FIELDS: usize = 2;

/// Load both sources named in `settings` and join them into the flat table.
pub fn load_table(settings: &DataSettings) -> Result<RatingTable, LoadError> {
    load_table_from(&settings.ratings_path, &settings.items_path)
}

pub fn load_table_from(ratings_path: &Path, items_path: &Path) -> Result<RatingTable, LoadError> {
    let ratings = read_ratings(ratings_path)?;
    info!("Read {} ratings from {}", ratings.len(), ratings_path.display());

    let movies = read_movies(items_path)?;
    info!("Read {} movies from {}", movies.len(), items_path.display());

    let table = join(&ratings, &movies);
    if table.is_empty() {
        return Err(LoadError::NoMatches {
            ratings: ratings_path.to_path_buf(),
            items: items_path.to_path_buf(),
        });
    }

    info!("Flat rating table has {} rows", table.len());
    Ok(table)
}

/// Tab separated `user_id movie_id rating timestamp`, no header.
pub fn read_ratings(path: &Path) -> Result<Vec<RatingRecord>, LoadError> {
    let records = read_byte_records(path, RATINGS_DELIMITER, Trim::All)?;

    let ratings = records
        .iter()
        .map(|(line, record)| parse_rating(path, *line, record))
        .collect::<Result<Vec<_>, _>>()?;

    ensure_not_empty(path, ratings)
}

/// Pipe separated items file; only `movie_id` and `title` are used.
///
/// Titles are decoded as Latin-1, so every byte value maps to a character,
/// and are kept byte for byte; only the movie id is trimmed.
pub fn read_movies(path: &Path) -> Result<Vec<MovieRecord>, LoadError> {
    let records = read_byte_records(path, ITEMS_DELIMITER, Trim::None)?;

    let movies = records
        .iter()
        .map(|(line, record)| parse_movie(path, *line, record))
        .collect::<Result<Vec<_>, _>>()?;

    ensure_not_empty(path, movies)
}

/// Inner join on `movie_id`. Ratings for unknown movies are dropped.
pub fn join(ratings: &[RatingRecord], movies: &[MovieRecord]) -> RatingTable {
    let titles = index_titles(movies);

    let rows: Vec<FlatRating> = ratings
        .iter()
        .filter_map(|r| {
            titles.get(&r.movie_id).map(|title| FlatRating {
                user_id: r.user_id,
                movie_id: r.movie_id,
                rating: r.rating,
                timestamp: r.timestamp,
                title: (*title).to_string(),
            })
        })
        .collect();

    let dropped = ratings.len() - rows.len();
    if dropped > 0 {
        warn!("Dropped {} ratings with no matching movie", dropped);
    }

    RatingTable::new(rows)
}

fn index_titles(movies: &[MovieRecord]) -> HashMap<MovieId, &str> {
    let mut titles = HashMap::with_capacity(movies.len());
    for movie in movies {
        if titles.contains_key(&movie.movie_id) {
            debug!("Ignoring repeated movie id {}", movie.movie_id);
            continue;
        }
        titles.insert(movie.movie_id, movie.title.as_str());
    }
    titles
}

fn read_byte_records(
    path: &Path,
    delimiter: u8,
    trim: Trim,
) -> Result<Vec<(u64, ByteRecord)>, LoadError> {
    if !path.exists() {
        return Err(LoadError::Missing {
            path: path.to_path_buf(),
        });
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(trim)
        .from_path(path)
        .map_err(|e| LoadError::io(path, e))?;

    let mut records = Vec::new();
    for result in reader.byte_records() {
        let record = result.map_err(|e| LoadError::io(path, e))?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        records.push((line, record));
    }
    Ok(records)
}

fn parse_rating(path: &Path, line: u64, record: &ByteRecord) -> Result<RatingRecord, LoadError> {
    if record.len() != RATINGS_FIELDS {
        return Err(LoadError::malformed(
            path,
            line,
            format!("expected {} fields, found {}", RATINGS_FIELDS, record.len()),
        ));
    }

    let rating: RatingRecord = record
        .deserialize(None)
        .map_err(|e| LoadError::malformed(path, line, e.to_string()))?;

    if !(MIN_RATING..=MAX_RATING).contains(&rating.rating) {
        return Err(LoadError::malformed(
            path,
            line,
            format!("rating {} outside {}..={}", rating.rating, MIN_RATING, MAX_RATING),
        ));
    }

    Ok(rating)
}

fn parse_movie(path: &Path, line: u64, record: &ByteRecord) -> Result<MovieRecord, LoadError> {
    if record.len() < ITEMS_MIN_FIELDS {
        return Err(LoadError::malformed(
            path,
            line,
            format!("expected at least {} fields, found {}", ITEMS_MIN_FIELDS, record.len()),
        ));
    }

    let movie_id = std::str::from_utf8(&record[0])
        .ok()
        .and_then(|s| s.trim().parse::<MovieId>().ok())
        .ok_or_else(|| LoadError::malformed(path, line, "movie id is not an integer"))?;

    Ok(MovieRecord {
        movie_id,
        title: decode_latin1(&record[1]),
    })
}

fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

fn ensure_not_empty<T>(path: &Path, rows: Vec<T>) -> Result<Vec<T>, LoadError> {
    if rows.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(contents: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(contents).expect("write contents");
        file
    }

    #[test]
    fn test_load_joins_titles_onto_ratings() {
        let ratings = write_file(b"196\t242\t3\t881250949\n186\t302\t3\t891717742\n22\t377\t1\t878887116\n");
        let items = write_file(
            b"242|Kolya (1996)|24-Jan-1997||http://x|0|0\n302|L.A. Confidential (1997)|01-Jan-1997||http://y|0|0\n",
        );

        let table = load_table_from(ratings.path(), items.path()).expect("load table");

        // movie 377 has no item row and is dropped by the join
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0].title, "Kolya (1996)");
        assert_eq!(table.rows()[0].user_id, 196);
        assert_eq!(table.rows()[1].title, "L.A. Confidential (1997)");
        assert_eq!(table.rows()[1].timestamp, 891717742);
    }

    #[test]
    fn test_titles_tolerate_non_utf8_bytes() {
        let movies = {
            let items = write_file(b"1|Ma vie en rose (1997)\n2|Caf\xe9 au lait (1993)\n");
            read_movies(items.path()).expect("read movies")
        };

        assert_eq!(movies[1].title, "Café au lait (1993)");
    }

    #[test]
    fn test_wrong_field_count_is_malformed() {
        let ratings = write_file(b"1\t10\t5\t100\n2\t10\t4\n");

        let err = read_ratings(ratings.path()).unwrap_err();
        match err {
            LoadError::Malformed { line, reason, .. } => {
                assert_eq!(line, 2);
                assert!(reason.contains("found 3"));
            }
            other => panic!("expected malformed, got {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_and_out_of_range_ratings_are_malformed() {
        let text = write_file(b"1\t10\tfive\t100\n");
        assert!(matches!(read_ratings(text.path()), Err(LoadError::Malformed { .. })));

        let too_high = write_file(b"1\t10\t6\t100\n");
        assert!(matches!(read_ratings(too_high.path()), Err(LoadError::Malformed { .. })));
    }

    #[test]
    fn test_titles_keep_surrounding_whitespace() {
        let ratings = write_file(b"1\t1\t4\t100\n2\t2\t2\t100\n");
        let items = write_file(b" 1 |Heat (1995)\n2|Heat (1995) \n");

        let table = load_table_from(ratings.path(), items.path()).expect("load table");

        assert_eq!(table.titles(), vec!["Heat (1995)", "Heat (1995) "]);
        assert_eq!(table.rows()[0].movie_id, 1);
    }

    #[test]
    fn test_items_need_two_fields() {
        let items = write_file(b"1\n");
        assert!(matches!(read_movies(items.path()), Err(LoadError::Malformed { .. })));
    }

    #[test]
    fn test_missing_and_empty_sources() {
        let missing = Path::new("/definitely/not/here/u.data");
        assert!(matches!(read_ratings(missing), Err(LoadError::Missing { .. })));

        let empty = write_file(b"");
        assert!(matches!(read_ratings(empty.path()), Err(LoadError::Empty { .. })));
    }

    #[test]
    fn test_join_without_matches_fails() {
        let ratings = write_file(b"1\t99\t5\t100\n");
        let items = write_file(b"1|Toy Story (1995)\n");

        let err = load_table_from(ratings.path(), items.path()).unwrap_err();
        assert!(matches!(err, LoadError::NoMatches { .. }));
    }

    #[test]
    fn test_first_title_wins_for_repeated_movie_id() {
        let ratings = [RatingRecord {
            user_id: 1,
            movie_id: 7,
            rating: 4,
            timestamp: 0,
        }];
        let movies = [
            MovieRecord { movie_id: 7, title: "First".to_string() },
            MovieRecord { movie_id: 7, title: "Second".to_string() },
        ];

        let table = join(&ratings, &movies);
        assert_eq!(table.rows()[0].title, "First");
    }
}
