use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use shelfapp::filter::{CharacterPattern, FilterMode, FilterSpec, RatingFilter, RatingMode};
use shelfapp::model::{Category, TraitId, ValueId};
use shelfapp::query::SortKey;
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "shelf", bin_name = "shelf", version)]
#[command(about = "Faceted search over a personal book library", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Library data directory (defaults to $SHELF_DATA, then the OS data dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search books (lists everything without filters)
    Search(SearchArgs),

    /// Show a book with its artists, genres, tags and characters
    Info { id: u64 },

    /// List the books in the same series as a book, in reading order
    Series { id: u64 },

    /// Add, edit or delete books
    #[command(subcommand)]
    Book(BookCommands),

    /// Manage artists, genres, tags and series
    #[command(subcommand)]
    Value(ValueCommands),

    /// Manage character traits
    #[command(subcommand)]
    Trait(TraitCommands),

    /// Show configuration (all keys, or one)
    Config { key: Option<String> },
}

/// Facet flags take comma-separated tokens: `+ID` must have, `-ID` must not
/// have, `~ID` may have (any of). A bare `ID` means `+ID`.
#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// Case-insensitive title substring (matches alternate titles too)
    #[arg(long)]
    pub title: Option<String>,

    /// Rating to match (exact unless --at-least)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=10))]
    pub rating: Option<u8>,

    /// Treat --rating as a lower bound
    #[arg(long, requires = "rating")]
    pub at_least: bool,

    /// Only books without a rating
    #[arg(long, conflicts_with = "rating")]
    pub unrated: bool,

    #[arg(long, value_name = "N")]
    pub pages_min: Option<u32>,

    #[arg(long, value_name = "N")]
    pub pages_max: Option<u32>,

    /// Added on or after (YYYY-MM-DD or RFC 3339)
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    pub added_after: Option<DateTime<Utc>>,

    /// Added on or before (YYYY-MM-DD covers the whole day, or RFC 3339)
    #[arg(long, value_name = "DATE", value_parser = parse_date_end)]
    pub added_before: Option<DateTime<Utc>>,

    #[arg(long = "artist", value_name = "TOKENS", value_delimiter = ',',
          allow_hyphen_values = true, value_parser = parse_facet_token)]
    pub artists: Vec<FilterToken>,

    #[arg(long = "genre", value_name = "TOKENS", value_delimiter = ',',
          allow_hyphen_values = true, value_parser = parse_facet_token)]
    pub genres: Vec<FilterToken>,

    #[arg(long = "tag", value_name = "TOKENS", value_delimiter = ',',
          allow_hyphen_values = true, value_parser = parse_facet_token)]
    pub tags: Vec<FilterToken>,

    #[arg(long = "series", value_name = "TOKENS", value_delimiter = ',',
          allow_hyphen_values = true, value_parser = parse_facet_token)]
    pub series: Vec<FilterToken>,

    /// One character pattern over trait ids, e.g. "+1,~4,-2" (repeatable)
    #[arg(long = "character", value_name = "TOKENS", allow_hyphen_values = true,
          value_parser = parse_character_pattern)]
    pub characters: Vec<CharacterPattern>,

    /// Only books with no link in this category (repeatable)
    #[arg(long, value_name = "CATEGORY", value_parser = parse_category)]
    pub unlinked: Vec<Category>,

    /// Read a JSON filter specification; flags are applied on top of it
    #[arg(long, value_name = "FILE")]
    pub spec: Option<PathBuf>,

    /// Sort key (title, title-desc, rating, rating-desc, pages, pages-desc,
    /// date, date-desc, random); defaults to the configured one
    #[arg(long, value_parser = parse_sort)]
    pub sort: Option<SortKey>,
}

#[derive(Subcommand, Debug)]
pub enum BookCommands {
    /// Add a book
    Add {
        title: String,
        /// Directory holding the page images (defaults to the title)
        #[arg(long)]
        directory: Option<String>,
        #[arg(long, default_value_t = 0)]
        pages: u32,
    },
    /// Edit a book; fields not given keep their current value
    Update(BookUpdateArgs),
    /// Delete a book with its links and characters
    Delete { id: u64 },
}

#[derive(Args, Debug, Default)]
pub struct BookUpdateArgs {
    pub id: u64,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub alt_title: Option<String>,

    /// Series value id
    #[arg(long)]
    pub series: Option<u64>,

    /// Remove the book from its series
    #[arg(long, conflicts_with = "series")]
    pub no_series: bool,

    #[arg(long)]
    pub series_order: Option<f64>,

    #[arg(long)]
    pub rating: Option<u8>,

    /// Clear the rating
    #[arg(long, conflicts_with = "rating")]
    pub unrated: bool,

    #[arg(long)]
    pub notes: Option<String>,

    /// Replace artist links (comma-separated value ids)
    #[arg(long = "artist", value_delimiter = ',')]
    pub artists: Option<Vec<u64>>,

    /// Replace genre links (comma-separated value ids)
    #[arg(long = "genre", value_delimiter = ',')]
    pub genres: Option<Vec<u64>>,

    /// Replace tag links (comma-separated value ids)
    #[arg(long = "tag", value_delimiter = ',')]
    pub tags: Option<Vec<u64>>,

    /// Drop every link in this category (repeatable)
    #[arg(long, value_name = "CATEGORY", value_parser = parse_category)]
    pub clear: Vec<Category>,

    /// Replace characters: one flag per character, trait ids comma-separated
    #[arg(long = "character", value_name = "TRAITS", value_parser = parse_trait_list)]
    pub characters: Vec<TraitList>,

    /// Remove every character
    #[arg(long, conflicts_with = "characters")]
    pub no_characters: bool,
}

#[derive(Subcommand, Debug)]
pub enum ValueCommands {
    /// List the values of a category
    List {
        #[arg(value_parser = parse_category)]
        category: Category,
    },
    /// Create a value
    Add {
        #[arg(value_parser = parse_category)]
        category: Category,
        name: String,
    },
    /// Rename a value
    Rename {
        #[arg(value_parser = parse_category)]
        category: Category,
        id: u64,
        name: String,
    },
    /// Delete a value and unlink it from every book
    Delete {
        #[arg(value_parser = parse_category)]
        category: Category,
        id: u64,
    },
}

#[derive(Subcommand, Debug)]
pub enum TraitCommands {
    /// List traits
    List,
    /// Create a trait
    Add {
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Rename a trait
    Rename { id: u64, name: String },
    /// Delete a trait; characters left without traits are removed
    Delete { id: u64 },
}

/// One facet flag token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterToken {
    pub id: u64,
    pub mode: FilterMode,
}

/// Trait ids of one character, as given to `book update --character`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraitList(pub Vec<TraitId>);

pub fn parse_facet_token(raw: &str) -> Result<FilterToken, String> {
    let raw = raw.trim();
    let (mode, digits) = match raw.chars().next() {
        Some('+') => (FilterMode::MustHave, &raw[1..]),
        Some('-') => (FilterMode::MustNotHave, &raw[1..]),
        Some('~') => (FilterMode::MayHave, &raw[1..]),
        Some(c) if c.is_ascii_digit() => (FilterMode::MustHave, raw),
        _ => {
            return Err(format!(
                "invalid filter token '{}' (expected +ID, -ID or ~ID)",
                raw
            ))
        }
    };
    let id = digits
        .parse::<u64>()
        .map_err(|_| format!("invalid id in filter token '{}'", raw))?;
    Ok(FilterToken { id, mode })
}

/// An empty string is a valid pattern: it matches any character.
pub fn parse_character_pattern(raw: &str) -> Result<CharacterPattern, String> {
    let mut pattern = CharacterPattern::new();
    for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let token = parse_facet_token(token)?;
        pattern.set_mode(TraitId(token.id), token.mode);
    }
    Ok(pattern)
}

pub fn parse_trait_list(raw: &str) -> Result<TraitList, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| {
            t.parse::<u64>()
                .map(TraitId)
                .map_err(|_| format!("invalid trait id '{}'", t))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(TraitList)
}

pub fn parse_category(raw: &str) -> Result<Category, String> {
    raw.parse()
}

pub fn parse_sort(raw: &str) -> Result<SortKey, String> {
    raw.parse()
}

/// Start of the day for `YYYY-MM-DD`, or the exact RFC 3339 instant.
pub fn parse_date(raw: &str) -> Result<DateTime<Utc>, String> {
    parse_instant(raw, |d| d.and_hms_opt(0, 0, 0))
}

/// Last instant of the day for `YYYY-MM-DD`, so an inclusive upper bound
/// keeps books added during that day.
pub fn parse_date_end(raw: &str) -> Result<DateTime<Utc>, String> {
    parse_instant(raw, |d| d.and_hms_nano_opt(23, 59, 59, 999_999_999))
}

fn parse_instant(
    raw: &str,
    time_of_day: impl Fn(NaiveDate) -> Option<NaiveDateTime>,
) -> Result<DateTime<Utc>, String> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(time_of_day)
        .map(|dt| dt.and_utc())
        .ok_or_else(|| format!("invalid date '{}' (expected YYYY-MM-DD)", raw))
}

impl SearchArgs {
    /// Layers the flags over `base` (an empty spec, or one read from `--spec`).
    pub fn apply_to(&self, mut spec: FilterSpec) -> FilterSpec {
        if let Some(title) = &self.title {
            spec.scalar.title = Some(title.clone());
        }
        if self.unrated {
            spec.scalar.rating = Some(RatingFilter::unrated());
        } else if let Some(value) = self.rating {
            spec.scalar.rating = Some(RatingFilter {
                value: Some(value),
                mode: if self.at_least {
                    RatingMode::AtLeast
                } else {
                    RatingMode::Exact
                },
            });
        }
        if self.pages_min.is_some() {
            spec.scalar.pages_low = self.pages_min;
        }
        if self.pages_max.is_some() {
            spec.scalar.pages_high = self.pages_max;
        }
        if self.added_after.is_some() {
            spec.scalar.date_low = self.added_after;
        }
        if self.added_before.is_some() {
            spec.scalar.date_high = self.added_before;
        }

        let facets = [
            (Category::Artists, &self.artists),
            (Category::Genres, &self.genres),
            (Category::Tags, &self.tags),
            (Category::Series, &self.series),
        ];
        for (category, tokens) in facets {
            if tokens.is_empty() {
                continue;
            }
            let facet = spec.facet_mut(category);
            for token in tokens {
                facet.set_mode(ValueId(token.id), token.mode);
            }
        }
        for category in &self.unlinked {
            spec.facet_mut(*category).unlinked = true;
        }
        for pattern in &self.characters {
            spec = spec.with_character(pattern.clone());
        }
        spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shelfapp::query::evaluate;
    use shelfapp::store::Library;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["shelf"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    fn search_args(args: &[&str]) -> SearchArgs {
        let mut argv = vec!["search"];
        argv.extend_from_slice(args);
        match parse(&argv).command {
            Some(Commands::Search(args)) => args,
            other => panic!("expected search, got {:?}", other),
        }
    }

    #[test]
    fn test_facet_tokens() {
        assert_eq!(
            parse_facet_token("+3").unwrap(),
            FilterToken { id: 3, mode: FilterMode::MustHave }
        );
        assert_eq!(parse_facet_token("-3").unwrap().mode, FilterMode::MustNotHave);
        assert_eq!(parse_facet_token("~12").unwrap().id, 12);
        assert_eq!(parse_facet_token("~12").unwrap().mode, FilterMode::MayHave);
        assert_eq!(parse_facet_token("7").unwrap().mode, FilterMode::MustHave);
        assert!(parse_facet_token("x1").is_err());
        assert!(parse_facet_token("+").is_err());
        assert!(parse_facet_token("").is_err());
    }

    #[test]
    fn test_character_pattern() {
        let pattern = parse_character_pattern("+1, ~4,-2").unwrap();
        assert_eq!(pattern, CharacterPattern::new().all([1]).any([4]).none([2]));
        assert_eq!(parse_character_pattern("").unwrap(), CharacterPattern::new());
        assert!(parse_character_pattern("+1,?").is_err());
    }

    #[test]
    fn test_trait_list() {
        assert_eq!(
            parse_trait_list("1, 2").unwrap(),
            TraitList(vec![TraitId(1), TraitId(2)])
        );
        assert!(parse_trait_list("1,a").is_err());
    }

    #[test]
    fn test_dates() {
        let day = parse_date("2024-03-01").unwrap();
        assert_eq!(day, Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
        let exact = parse_date("2024-03-01T12:30:00+02:00").unwrap();
        assert_eq!(exact, Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap());
        assert!(parse_date("March 1st").is_err());

        let end = parse_date_end("2024-03-01").unwrap();
        assert!(end > Utc.with_ymd_and_hms(2024, 3, 1, 23, 59, 59).unwrap());
        assert!(end < Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap());
        assert_eq!(
            parse_date_end("2024-03-01T12:30:00Z").unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap()
        );
        assert!(parse_date_end("2024-13-01").is_err());
    }

    #[test]
    fn test_added_before_keeps_books_from_that_day() {
        let mut lib = Library::new();
        let same_day = lib.add_book("Same day", "same");
        let next_day = lib.add_book("Next day", "next");
        lib.book_mut(same_day).unwrap().date_added =
            Utc.with_ymd_and_hms(2024, 3, 10, 14, 0, 0).unwrap();
        lib.book_mut(next_day).unwrap().date_added =
            Utc.with_ymd_and_hms(2024, 3, 11, 0, 0, 0).unwrap();

        let spec = search_args(&["--added-after", "2024-03-10", "--added-before", "2024-03-10"])
            .apply_to(FilterSpec::new());
        let got = evaluate(&lib, Some(&spec), SortKey::TitleAsc).unwrap();
        let ids: Vec<_> = got.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![same_day]);
    }

    #[test]
    fn test_search_flags_build_spec() {
        let args = search_args(&[
            "--title", "dune",
            "--rating", "7", "--at-least",
            "--genre", "+1,-2",
            "--tag", "~5", "--tag", "~6",
            "--character", "+1,-3",
            "--character", "",
            "--unlinked", "series",
            "--sort", "rating-desc",
        ]);
        assert_eq!(args.sort, Some(SortKey::RatingDesc));

        let spec = args.apply_to(FilterSpec::new());
        assert_eq!(spec.scalar.title.as_deref(), Some("dune"));
        assert_eq!(spec.scalar.rating, Some(RatingFilter::at_least(7)));

        let genres = &spec.categories[&Category::Genres];
        assert!(genres.values.must_have_all.contains(&ValueId(1)));
        assert!(genres.values.must_not_have.contains(&ValueId(2)));

        let tags = &spec.categories[&Category::Tags];
        assert_eq!(tags.values.must_have_any_of.len(), 2);
        assert!(spec.categories[&Category::Series].unlinked);
        assert!(!spec.categories.contains_key(&Category::Artists));

        assert_eq!(spec.patterns().len(), 2);
        assert_eq!(spec.patterns()[1], CharacterPattern::new());
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_unrated_conflicts_with_rating() {
        assert!(Cli::try_parse_from(["shelf", "search", "--unrated", "--rating", "3"]).is_err());
        let spec = search_args(&["--unrated"]).apply_to(FilterSpec::new());
        assert_eq!(spec.scalar.rating, Some(RatingFilter::unrated()));
    }

    #[test]
    fn test_rating_out_of_range_is_rejected() {
        assert!(Cli::try_parse_from(["shelf", "search", "--rating", "11"]).is_err());
    }

    #[test]
    fn test_flags_layer_over_base_spec() {
        let base = FilterSpec::new()
            .with_title("old")
            .with_pages(Some(10), Some(50));
        let spec = search_args(&["--pages-max", "80"]).apply_to(base);
        assert_eq!(spec.scalar.title.as_deref(), Some("old"));
        assert_eq!(spec.scalar.pages_low, Some(10));
        assert_eq!(spec.scalar.pages_high, Some(80));
    }

    #[test]
    fn test_no_flags_is_unconstrained() {
        let spec = search_args(&[]).apply_to(FilterSpec::new());
        assert!(spec.is_unconstrained());
    }

    #[test]
    fn test_global_flags() {
        let cli = parse(&["--output", "json", "-v", "value", "list", "genre"]);
        assert_eq!(cli.output, OutputFormat::Json);
        assert!(cli.verbose);
        match cli.command {
            Some(Commands::Value(ValueCommands::List { category })) => {
                assert_eq!(category, Category::Genres)
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_book_update_flags() {
        let cli = parse(&[
            "book", "update", "4", "--rating", "9", "--tag", "1,2",
            "--character", "1,3", "--character", "2", "--clear", "artists",
        ]);
        match cli.command {
            Some(Commands::Book(BookCommands::Update(args))) => {
                assert_eq!(args.id, 4);
                assert_eq!(args.rating, Some(9));
                assert_eq!(args.tags, Some(vec![1, 2]));
                assert_eq!(args.artists, None);
                assert_eq!(args.characters.len(), 2);
                assert_eq!(args.clear, vec![Category::Artists]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
