//! Categorical value management.
//!
//! - `list`: every value of a category, by name
//! - `create`: add a value, refusing case-insensitive duplicates
//! - `rename`: change a value's name
//! - `delete`: remove a value and unlink it from every book

use tracing::info;

use crate::commands::{clean_name, plural, same_name, CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::model::{CategoricalValue, Category, ValueId};
use crate::store::backend::StorageBackend;
use crate::store::{Catalog, Library};

/// Values of `category`, sorted case-insensitively by name.
pub fn sorted_values(library: &Library, category: Category) -> Vec<CategoricalValue> {
    let mut values: Vec<CategoricalValue> = library.iter_values(category).cloned().collect();
    values.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then(a.id.cmp(&b.id))
    });
    values
}

pub fn list<B: StorageBackend>(catalog: &Catalog<B>, category: Category) -> Result<CmdResult> {
    let library = catalog.snapshot()?;
    let values = sorted_values(&library, category);

    let mut result = CmdResult::default();
    if values.is_empty() {
        result.add_message(CmdMessage::info(format!("No {} defined", category)));
    }
    Ok(result.with_values(values))
}

pub fn create<B: StorageBackend>(
    catalog: &mut Catalog<B>,
    category: Category,
    name: &str,
) -> Result<CmdResult> {
    let name = clean_name(category.singular(), name)?;

    let value = catalog.edit(|lib| {
        ensure_unique(lib, category, &name, None)?;
        let id = lib.add_value(category, name.clone());
        lib.value(category, id)
            .cloned()
            .ok_or_else(|| ShelfError::Store(format!("{} {} vanished", category.singular(), id)))
    })?;
    info!(%category, id = %value.id, name = %value.name, "created value");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Created {} '{}' ({})",
        category.singular(),
        value.name,
        value.id
    )));
    Ok(result.with_values(vec![value]))
}

pub fn rename<B: StorageBackend>(
    catalog: &mut Catalog<B>,
    category: Category,
    id: ValueId,
    new_name: &str,
) -> Result<CmdResult> {
    let new_name = clean_name(category.singular(), new_name)?;

    let (old_name, value) = catalog.edit(|lib| {
        ensure_unique(lib, category, &new_name, Some(id))?;
        let value = lib.value_mut(category, id).ok_or(ShelfError::NotFound {
            kind: category.singular(),
            id: id.0,
        })?;
        let old = std::mem::replace(&mut value.name, new_name.clone());
        Ok((old, value.clone()))
    })?;
    info!(%category, %id, from = %old_name, to = %value.name, "renamed value");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Renamed {} '{}' to '{}'",
        category.singular(),
        old_name,
        value.name
    )));
    Ok(result.with_values(vec![value]))
}

/// Deletes a value. Books lose the link; for series, the books' series
/// reference is cleared.
pub fn delete<B: StorageBackend>(
    catalog: &mut Catalog<B>,
    category: Category,
    id: ValueId,
) -> Result<CmdResult> {
    let (removed, unlinked) = catalog.edit(|lib| {
        let unlinked = lib
            .iter_books()
            .filter(|b| lib.links_of(b.id, category).contains(&id))
            .count();
        let removed = lib.remove_value(category, id).ok_or(ShelfError::NotFound {
            kind: category.singular(),
            id: id.0,
        })?;
        Ok((removed, unlinked))
    })?;
    info!(%category, %id, unlinked, "deleted value");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Deleted {} '{}'",
        category.singular(),
        removed.name
    )));
    if unlinked > 0 {
        result.add_message(CmdMessage::info(format!(
            "Removed from {}",
            plural(unlinked, "book")
        )));
    }
    Ok(result.with_values(vec![removed]))
}

fn ensure_unique(
    lib: &Library,
    category: Category,
    name: &str,
    except: Option<ValueId>,
) -> Result<()> {
    let clash = lib
        .iter_values(category)
        .any(|v| Some(v.id) != except && same_name(&v.name, name));
    if clash {
        return Err(ShelfError::Duplicate {
            kind: category.singular(),
            name: name.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BookId;
    use crate::store::memory::fixtures::LibraryFixture;
    use crate::store::memory::InMemoryCatalog;

    #[test]
    fn list_sorts_case_insensitively() {
        let catalog = LibraryFixture::new()
            .values(Category::Artists, &["zed", "Alice", "bob"])
            .catalog();
        let result = list(&catalog, Category::Artists).unwrap();
        let names: Vec<_> = result.values.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "bob", "zed"]);
    }

    #[test]
    fn list_empty_category_has_message() {
        let catalog = InMemoryCatalog::new();
        let result = list(&catalog, Category::Genres).unwrap();
        assert!(result.values.is_empty());
        assert_eq!(result.messages[0].content, "No genres defined");
    }

    #[test]
    fn create_rejects_duplicates_in_same_category() {
        let mut catalog = InMemoryCatalog::new();
        create(&mut catalog, Category::Tags, "Noir").unwrap();

        let err = create(&mut catalog, Category::Tags, " noir").unwrap_err();
        assert!(matches!(err, ShelfError::Duplicate { kind: "tag", .. }));

        // Other categories have their own namespace.
        assert!(create(&mut catalog, Category::Genres, "Noir").is_ok());
    }

    #[test]
    fn rename_keeps_id_and_checks_clashes() {
        let mut catalog = LibraryFixture::new()
            .values(Category::Genres, &["horror", "comedy"])
            .catalog();

        let result = rename(&mut catalog, Category::Genres, ValueId(1), "Horror").unwrap();
        assert_eq!(result.values[0].id, ValueId(1));
        assert_eq!(result.values[0].name, "Horror");

        let err = rename(&mut catalog, Category::Genres, ValueId(1), "Comedy").unwrap_err();
        assert!(matches!(err, ShelfError::Duplicate { .. }));

        let err = rename(&mut catalog, Category::Genres, ValueId(9), "x").unwrap_err();
        assert!(matches!(err, ShelfError::NotFound { id: 9, .. }));
    }

    #[test]
    fn delete_unlinks_books() {
        let mut catalog = LibraryFixture::new()
            .book("One")
            .book("Two")
            .values(Category::Tags, &["shared"])
            .link(1, Category::Tags, &[1])
            .link(2, Category::Tags, &[1])
            .catalog();

        let result = delete(&mut catalog, Category::Tags, ValueId(1)).unwrap();
        assert_eq!(result.messages[1].content, "Removed from 2 books");

        let lib = catalog.snapshot().unwrap();
        assert!(lib.links_of(BookId(1), Category::Tags).is_empty());
        assert_eq!(lib.iter_values(Category::Tags).count(), 0);
    }

    #[test]
    fn delete_series_clears_reference() {
        let mut catalog = LibraryFixture::new()
            .book("Vol 1")
            .values(Category::Series, &["Saga"])
            .link(1, Category::Series, &[1])
            .catalog();

        delete(&mut catalog, Category::Series, ValueId(1)).unwrap();
        let lib = catalog.snapshot().unwrap();
        assert_eq!(lib.book(BookId(1)).unwrap().series, None);
    }
}
