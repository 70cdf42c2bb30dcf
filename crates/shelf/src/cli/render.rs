//! # Rendering
//!
//! Turns command results into terminal text. Layout (widths, truncation,
//! padding) is computed here with Unicode-aware widths; colors come from
//! [`super::styles`] and are dropped automatically when stdout is not a
//! terminal.
//!
//! Every `render_*` function returns a `String` so the output can be checked
//! in tests; only [`print_messages`] writes to stdout.

use super::styles::{DIM, ERROR, ID, INFO, LABEL, RATING, SUCCESS, TIME, TITLE, WARNING};
use chrono::{DateTime, Utc};
use shelfapp::commands::{BookInfo, CmdMessage, MessageLevel};
use shelfapp::config::ShelfConfig;
use shelfapp::filter::MAX_RATING;
use shelfapp::model::{Book, CategoricalValue, Trait};
use unicode_width::UnicodeWidthStr;

/// Configuration for list rendering.
pub const LINE_WIDTH: usize = 100;
pub const TIME_WIDTH: usize = 14;
const ID_WIDTH: usize = 6;
const RATING_WIDTH: usize = 5;
const PAGES_WIDTH: usize = 8;

/// One line per book: id, title, rating, pages, time since it was added.
pub fn render_book_list(books: &[Book]) -> String {
    let mut out = String::new();
    for book in books {
        let id = format!("{:>width$}.", book.id.0, width = ID_WIDTH - 1);
        let rating = format_rating(book.rating);
        let pages = format!("{:>width$}", format!("{} pp", book.pages), width = PAGES_WIDTH);

        // id, title, rating, pages and time are separated by single spaces
        let fixed = ID_WIDTH + RATING_WIDTH + PAGES_WIDTH + TIME_WIDTH + 4;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let title = truncate_to_width(&book.title, available);
        let padding = " ".repeat(available.saturating_sub(title.width()));

        out.push_str(&format!(
            "{} {}{} {} {} {}\n",
            ID.apply_to(id),
            TITLE.apply_to(title),
            padding,
            RATING.apply_to(rating),
            DIM.apply_to(pages),
            TIME.apply_to(format_time_ago(book.date_added)),
        ));
    }
    out
}

pub fn render_book_info(info: &BookInfo) -> String {
    let book = &info.book;
    let mut out = format!(
        "{} {}\n",
        ID.apply_to(format!("{}.", book.id)),
        TITLE.apply_to(&book.title)
    );

    if let Some(alt) = &book.alt_title {
        push_field(&mut out, "alt title", alt);
    }
    if let Some(series) = &info.series {
        let order = book
            .series_order
            .map(|o| format!(" #{}", o))
            .unwrap_or_default();
        push_field(&mut out, "series", &format!("{}{}", series.name, order));
    }
    push_field(&mut out, "rating", format_rating(book.rating).trim());
    push_field(&mut out, "pages", &book.pages.to_string());
    push_field(
        &mut out,
        "added",
        &format!(
            "{} ({})",
            book.date_added.format("%Y-%m-%d"),
            format_time_ago(book.date_added).trim()
        ),
    );
    push_field(&mut out, "directory", &book.directory);

    for (label, values) in [
        ("artists", &info.artists),
        ("genres", &info.genres),
        ("tags", &info.tags),
    ] {
        if !values.is_empty() {
            push_field(&mut out, label, &join_names(values));
        }
    }

    if !info.characters.is_empty() {
        out.push_str(&format!("  {}\n", LABEL.apply_to("characters:")));
        for (n, character) in info.characters.iter().enumerate() {
            let traits: Vec<&str> = character.traits.iter().map(|t| t.name.as_str()).collect();
            out.push_str(&format!("    {}. {}\n", n + 1, traits.join(", ")));
        }
    }

    if let Some(notes) = &book.notes {
        push_field(&mut out, "notes", notes);
    }
    out
}

pub fn render_values(values: &[CategoricalValue]) -> String {
    values
        .iter()
        .map(|v| {
            format!(
                "{} {}\n",
                ID.apply_to(format!("{:>width$}.", v.id.0, width = ID_WIDTH - 1)),
                v.name
            )
        })
        .collect()
}

pub fn render_traits(traits: &[Trait]) -> String {
    traits
        .iter()
        .map(|t| {
            let id = ID.apply_to(format!("{:>width$}.", t.id.0, width = ID_WIDTH - 1));
            match &t.description {
                Some(desc) => format!("{} {}  {}\n", id, t.name, DIM.apply_to(desc)),
                None => format!("{} {}\n", id, t.name),
            }
        })
        .collect()
}

pub fn render_config(config: &ShelfConfig) -> String {
    ShelfConfig::KEYS
        .iter()
        .filter_map(|key| config.get(key).map(|value| (key, value)))
        .map(|(key, value)| format!("{} = {}\n", LABEL.apply_to(key), value))
        .collect()
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|msg| {
            let style = match msg.level {
                MessageLevel::Info => &*INFO,
                MessageLevel::Success => &*SUCCESS,
                MessageLevel::Warning => &*WARNING,
                MessageLevel::Error => &*ERROR,
            };
            format!("{}\n", style.apply_to(&msg.content))
        })
        .collect()
}

/// Prints command messages to stdout.
pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

fn push_field(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!(
        "  {} {}\n",
        LABEL.apply_to(format!("{}:", label)),
        value
    ));
}

fn join_names(values: &[CategoricalValue]) -> String {
    values
        .iter()
        .map(|v| v.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_rating(rating: Option<u8>) -> String {
    match rating {
        Some(r) => format!("{:>2}/{}", r, MAX_RATING),
        None => format!("{:^width$}", "-", width = RATING_WIDTH),
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = timeago::Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use shelfapp::commands::CharacterInfo;
    use shelfapp::model::{BookId, Category, CharacterId, TraitId, ValueId};

    fn book(id: u64, title: &str) -> Book {
        Book::new(BookId(id), title, format!("dir{}", id))
    }

    fn value(id: u64, category: Category, name: &str) -> CategoricalValue {
        CategoricalValue {
            id: ValueId(id),
            category,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_empty_book_list_renders_nothing() {
        assert_eq!(render_book_list(&[]), "");
    }

    #[test]
    fn test_book_line_contents() {
        let mut b = book(12, "Akira");
        b.rating = Some(8);
        b.pages = 182;
        let output = render_book_list(&[b]);
        assert!(output.contains("12."));
        assert!(output.contains("Akira"));
        assert!(output.contains(" 8/10"));
        assert!(output.contains("182 pp"));
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_long_titles_are_truncated() {
        let title = "x".repeat(200);
        let output = render_book_list(&[book(1, &title)]);
        assert!(output.contains('…'));
        assert!(!output.contains(&title));
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
        // wide characters count double
        assert_eq!(truncate_to_width("漫画漫画漫画", 5), "漫画…");
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(Some(10)), "10/10");
        assert_eq!(format_rating(Some(3)), " 3/10");
        assert_eq!(format_rating(None).trim(), "-");
        assert_eq!(format_rating(None).len(), RATING_WIDTH);
    }

    #[test]
    fn test_time_ago_is_padded() {
        let output = format_time_ago(Utc::now() - Duration::days(3));
        assert_eq!(output.width(), TIME_WIDTH);
        assert!(output.contains("3 days ago"));
    }

    #[test]
    fn test_book_info() {
        let mut b = book(3, "Dune");
        b.series = Some(ValueId(1));
        b.series_order = Some(2.0);
        b.notes = Some("reread".into());
        let info = BookInfo {
            book: b,
            series: Some(value(1, Category::Series, "Dune Saga")),
            artists: vec![],
            genres: vec![
                value(1, Category::Genres, "sci-fi"),
                value(2, Category::Genres, "epic"),
            ],
            tags: vec![],
            characters: vec![CharacterInfo {
                id: CharacterId(1),
                traits: vec![Trait {
                    id: TraitId(1),
                    name: "hero".into(),
                    description: None,
                }],
            }],
        };
        let output = render_book_info(&info);
        assert!(output.contains("Dune"));
        assert!(output.contains("Dune Saga #2"));
        assert!(output.contains("sci-fi, epic"));
        assert!(output.contains("1. hero"));
        assert!(output.contains("reread"));
        assert!(!output.contains("artists:"));
    }

    #[test]
    fn test_values_and_traits() {
        let output = render_values(&[value(4, Category::Tags, "color")]);
        assert!(output.contains("4."));
        assert!(output.contains("color"));

        let output = render_traits(&[Trait {
            id: TraitId(2),
            name: "tall".into(),
            description: Some("over 180cm".into()),
        }]);
        assert!(output.contains("tall"));
        assert!(output.contains("over 180cm"));
    }

    #[test]
    fn test_config_lists_every_key() {
        let output = render_config(&ShelfConfig::default());
        for key in ShelfConfig::KEYS {
            assert!(output.contains(key));
        }
        assert!(output.contains("library.json"));
    }

    #[test]
    fn test_messages() {
        let output = render_messages(&[
            CmdMessage::success("Added 'Akira' (1)"),
            CmdMessage::error("Unknown config key: nope"),
        ]);
        assert!(output.contains("Added 'Akira' (1)"));
        assert!(output.contains("Unknown config key"));
        assert_eq!(output.lines().count(), 2);
        assert_eq!(render_messages(&[]), "");
    }
}
