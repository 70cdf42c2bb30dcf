use std::cmp::Ordering;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::model::{Book, BookId};
use crate::store::backend::StorageBackend;
use crate::store::Catalog;

/// Reading order: by series order, books without one last, then by id.
fn reading_order(a: &Book, b: &Book) -> Ordering {
    let by_order = match (a.series_order, b.series_order) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_order.then(a.id.cmp(&b.id))
}

/// Every book in the same series as `id`, the book itself included.
pub fn run<B: StorageBackend>(catalog: &Catalog<B>, id: BookId) -> Result<CmdResult> {
    let library = catalog.snapshot()?;
    let book = library
        .book(id)
        .ok_or(ShelfError::NotFound { kind: "book", id: id.0 })?;

    let mut result = CmdResult::default();
    let Some(series) = book.series else {
        result.add_message(CmdMessage::info(format!(
            "'{}' is not part of a series",
            book.title
        )));
        return Ok(result);
    };

    let mut books: Vec<Book> = library
        .iter_books()
        .filter(|b| b.series == Some(series))
        .cloned()
        .collect();
    books.sort_by(reading_order);

    if let Some(value) = library.value(crate::model::Category::Series, series) {
        result.add_message(CmdMessage::info(format!(
            "{}: {} volume{}",
            value.name,
            books.len(),
            if books.len() == 1 { "" } else { "s" }
        )));
    }
    Ok(result.with_listed_books(books))
}
