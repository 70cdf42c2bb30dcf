//! Adding, editing and deleting books.
//!
//! An update replaces the book's links and characters wholesale, the way a
//! metadata editor submits its whole form at once.

use tracing::info;

use crate::commands::{clean_name, CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::filter::MAX_RATING;
use crate::model::{Book, BookEdit, BookId, Category};
use crate::store::backend::StorageBackend;
use crate::store::Catalog;

pub fn add<B: StorageBackend>(
    catalog: &mut Catalog<B>,
    title: &str,
    directory: &str,
    pages: u32,
) -> Result<CmdResult> {
    let title = clean_name("book", title)?;
    let directory = directory.trim();
    if directory.is_empty() {
        return Err(ShelfError::Api("book directory cannot be empty".to_string()));
    }

    let book = catalog.edit(|lib| {
        let id = lib.add_book(title.clone(), directory);
        let book = lib.book_mut(id).ok_or(ShelfError::NotFound { kind: "book", id: id.0 })?;
        book.pages = pages;
        Ok(book.clone())
    })?;
    info!(id = %book.id, title = %book.title, "added book");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added '{}' ({})",
        book.title, book.id
    )));
    Ok(result.with_affected_books(vec![book]))
}

pub fn update<B: StorageBackend>(
    catalog: &mut Catalog<B>,
    id: BookId,
    edit: BookEdit,
) -> Result<CmdResult> {
    let title = clean_name("book", &edit.title)?;
    if let Some(rating) = edit.rating {
        if rating > MAX_RATING {
            return Err(ShelfError::Api(format!(
                "rating {} is above the maximum of {}",
                rating, MAX_RATING
            )));
        }
    }

    let (book, characters) = catalog.edit(|lib| {
        let book = lib.book_mut(id).ok_or(ShelfError::NotFound { kind: "book", id: id.0 })?;
        book.title = title;
        book.alt_title = edit.alt_title.filter(|t| !t.trim().is_empty());
        book.series_order = edit.series_order;
        book.rating = edit.rating;
        book.notes = edit.notes.filter(|n| !n.trim().is_empty());

        lib.set_links(id, Category::Series, edit.series)?;
        lib.set_links(id, Category::Artists, edit.artists)?;
        lib.set_links(id, Category::Genres, edit.genres)?;
        lib.set_links(id, Category::Tags, edit.tags)?;

        lib.remove_characters_of(id);
        let mut characters = 0usize;
        for traits in edit.characters.into_iter().filter(|t| !t.is_empty()) {
            lib.add_character(id, traits)?;
            characters += 1;
        }

        let book = lib
            .book(id)
            .cloned()
            .ok_or(ShelfError::NotFound { kind: "book", id: id.0 })?;
        Ok((book, characters))
    })?;
    info!(%id, characters, "updated book");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Updated '{}'", book.title)));
    Ok(result.with_affected_books(vec![book]))
}

/// Deletes a book with its links and characters. Page images on disk are
/// left alone.
pub fn delete<B: StorageBackend>(catalog: &mut Catalog<B>, id: BookId) -> Result<CmdResult> {
    let book: Book = catalog.edit(|lib| {
        lib.remove_book(id)
            .ok_or(ShelfError::NotFound { kind: "book", id: id.0 })
    })?;
    info!(%id, title = %book.title, "deleted book");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Deleted '{}'", book.title)));
    Ok(result.with_affected_books(vec![book]))
}
