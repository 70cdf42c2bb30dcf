use tracing::debug;

use crate::commands::{plural, CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::FilterSpec;
use crate::query::{self, SortKey};
use crate::store::backend::StorageBackend;
use crate::store::Catalog;

/// Evaluates `spec` against the current library. `None` lists every book.
pub fn run<B: StorageBackend>(
    catalog: &Catalog<B>,
    spec: Option<&FilterSpec>,
    sort: SortKey,
) -> Result<CmdResult> {
    let library = catalog.snapshot()?;
    let books = query::evaluate(&library, spec, sort)?;
    debug!(matched = books.len(), total = library.book_count(), %sort, "search finished");

    let mut result = CmdResult::default();
    if library.book_count() == 0 {
        result.add_message(CmdMessage::info("The library is empty"));
    } else if books.is_empty() {
        result.add_message(CmdMessage::info("No books match the filter"));
    } else {
        result.add_message(CmdMessage::info(format!(
            "{} of {}",
            plural(books.len(), "book"),
            library.book_count()
        )));
    }
    Ok(result.with_listed_books(books))
}
