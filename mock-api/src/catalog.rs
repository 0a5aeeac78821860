//! In-memory movie records served by the stand-in database.

use payloads::responses::SearchHit;
use payloads::{PAGE_SIZE, RawRecord};
use serde_json::{Value, json};

/// An ordered set of raw movie records.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<RawRecord>,
}

impl Catalog {
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self { records }
    }

    /// A small set of real titles for development.
    pub fn demo() -> Self {
        let records = vec![
            movie("tt1375666", "Inception", "2010").with(json!({
                "Rated": "PG-13",
                "Released": "16 Jul 2010",
                "Runtime": "148 min",
                "Genre": "Action, Adventure, Sci-Fi",
                "Director": "Christopher Nolan",
                "Writer": "Christopher Nolan",
                "Actors": "Leonardo DiCaprio, Joseph Gordon-Levitt, Elliot Page",
                "Plot": "A thief who steals corporate secrets through the use of dream-sharing technology is given the inverse task of planting an idea into the mind of a C.E.O.",
                "Language": "English, Japanese, French",
                "Country": "United States, United Kingdom",
                "Awards": "Won 4 Oscars. 159 wins & 220 nominations total",
                "Metascore": "74",
                "imdbRating": "8.8",
                "imdbVotes": "2,500,000",
                "BoxOffice": "$292,587,330",
            })),
            movie("tt0133093", "The Matrix", "1999").with(json!({
                "Rated": "R",
                "Released": "31 Mar 1999",
                "Runtime": "136 min",
                "Genre": "Action, Sci-Fi",
                "Director": "Lana Wachowski, Lilly Wachowski",
                "Writer": "Lilly Wachowski, Lana Wachowski",
                "Actors": "Keanu Reeves, Laurence Fishburne, Carrie-Anne Moss",
                "Plot": "When a beautiful stranger leads computer hacker Neo to a forbidding underworld, he discovers the shocking truth: the life he knows is the elaborate deception of an evil cyber-intelligence.",
                "Language": "English",
                "Country": "United States, Australia",
                "Awards": "Won 4 Oscars. 42 wins & 51 nominations total",
                "imdbRating": "8.7",
            })),
            movie("tt0234215", "The Matrix Reloaded", "2003"),
            movie("tt0242653", "The Matrix Revolutions", "2003"),
            movie("tt0816692", "Interstellar", "2014").with(json!({
                "Rated": "PG-13",
                "Runtime": "169 min",
                "Genre": "Adventure, Drama, Sci-Fi",
                "Director": "Christopher Nolan",
                "Actors": "Matthew McConaughey, Anne Hathaway, Jessica Chastain",
                "Plot": "When Earth becomes uninhabitable in the future, a farmer and ex-NASA pilot is tasked to pilot a spacecraft to find a new planet for humans.",
                "Awards": "Won 1 Oscar. 44 wins & 148 nominations total",
                "imdbRating": "8.7",
            })),
            movie("tt0372784", "Batman Begins", "2005"),
            movie("tt0468569", "The Dark Knight", "2008").with(json!({
                "Rated": "PG-13",
                "Runtime": "152 min",
                "Genre": "Action, Crime, Drama",
                "Director": "Christopher Nolan",
                "Actors": "Christian Bale, Heath Ledger, Aaron Eckhart",
                "Plot": "When the menace known as the Joker wreaks havoc and chaos on the people of Gotham, Batman must accept one of the greatest psychological and physical tests of his ability to fight injustice.",
                "imdbRating": "9.0",
            })),
            movie("tt1345836", "The Dark Knight Rises", "2012"),
            movie("tt0078748", "Alien", "1979").with(json!({
                "Rated": "R",
                "Runtime": "117 min",
                "Genre": "Horror, Sci-Fi",
                "Director": "Ridley Scott",
                "Actors": "Sigourney Weaver, Tom Skerritt, John Hurt",
                "Plot": "The crew of a commercial spacecraft encounters a deadly lifeform after investigating an unknown transmission.",
                "imdbRating": "8.5",
            })),
            movie("tt0090605", "Aliens", "1986"),
            movie("tt0103644", "Alien 3", "1992"),
            movie("tt0118583", "Alien: Resurrection", "1997"),
            movie("tt2316204", "Alien: Covenant", "2017"),
            movie("tt0370263", "Alien vs. Predator", "2004"),
            movie("tt0758730", "Aliens vs. Predator: Requiem", "2007"),
            movie("tt0094631", "Alien Nation", "1988"),
            movie("tt0092534", "Alien from L.A.", "1988"),
            movie("tt0409847", "Cowboys & Aliens", "2011"),
            movie("tt0775552", "Aliens in the Attic", "2009"),
            movie("tt0083658", "Blade Runner", "1982"),
            movie("tt1856101", "Blade Runner 2049", "2017"),
        ];
        Self::new(records.into_iter().map(|movie| movie.0).collect())
    }

    /// `count` movies titled "{prefix} 1", "{prefix} 2", ...
    pub fn generated(prefix: &str, count: usize) -> Self {
        let records = (1..=count)
            .map(|n| {
                movie(&format!("tt9{n:06}"), &format!("{prefix} {n}"), "2020").0
            })
            .collect();
        Self::new(records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Case-insensitive title search.
    ///
    /// Returns the hits on the requested 1-based page and the total number of
    /// matches, or `None` when the page has no hits.
    pub fn search(&self, text: &str, page: u32) -> Option<(Vec<SearchHit>, usize)> {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        let matches: Vec<&RawRecord> = self
            .records
            .iter()
            .filter(|record| {
                string_field(record, "Title")
                    .is_some_and(|title| title.to_lowercase().contains(&needle))
            })
            .collect();

        let page_size = PAGE_SIZE as usize;
        let skip = (page.max(1) as usize - 1).saturating_mul(page_size);
        let hits: Vec<SearchHit> = matches
            .iter()
            .skip(skip)
            .take(page_size)
            .filter_map(|record| to_hit(record))
            .collect();

        if hits.is_empty() {
            None
        } else {
            Some((hits, matches.len()))
        }
    }

    pub fn find(&self, id: &str) -> Option<&RawRecord> {
        self.records
            .iter()
            .find(|record| string_field(record, "imdbID") == Some(id))
    }
}

struct Movie(RawRecord);

impl Movie {
    /// Merge extra fields into the record.
    fn with(mut self, extra: Value) -> Self {
        if let Value::Object(fields) = extra {
            self.0.extend(fields);
        }
        self
    }
}

fn movie(id: &str, title: &str, year: &str) -> Movie {
    let mut record = RawRecord::new();
    record.insert("Title".into(), title.into());
    record.insert("Year".into(), year.into());
    record.insert("imdbID".into(), id.into());
    record.insert("Type".into(), "movie".into());
    record.insert("Poster".into(), "N/A".into());
    record.insert("Awards".into(), "N/A".into());
    record.insert("Response".into(), "True".into());
    Movie(record)
}

fn string_field<'a>(record: &'a RawRecord, key: &str) -> Option<&'a str> {
    record.get(key).and_then(Value::as_str)
}

fn to_hit(record: &RawRecord) -> Option<SearchHit> {
    Some(SearchHit {
        title: string_field(record, "Title")?.to_string(),
        year: string_field(record, "Year").map(str::to_string),
        imdb_id: string_field(record, "imdbID")?.to_string(),
        kind: string_field(record, "Type").map(str::to_string),
        poster: string_field(record, "Poster").map(str::to_string),
    })
}
