//! Character trait management.
//!
//! Deleting a trait strips it from every character; characters left with no
//! traits at all are deleted with it.

use tracing::info;

use crate::commands::{clean_name, plural, same_name, CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::model::{Trait, TraitId};
use crate::store::backend::StorageBackend;
use crate::store::{Catalog, Library};

pub fn sorted_traits(library: &Library) -> Vec<Trait> {
    let mut traits: Vec<Trait> = library.iter_traits().cloned().collect();
    traits.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then(a.id.cmp(&b.id))
    });
    traits
}

pub fn list<B: StorageBackend>(catalog: &Catalog<B>) -> Result<CmdResult> {
    let traits = sorted_traits(&catalog.snapshot()?);
    let mut result = CmdResult::default();
    if traits.is_empty() {
        result.add_message(CmdMessage::info("No traits defined"));
    }
    Ok(result.with_traits(traits))
}

pub fn create<B: StorageBackend>(
    catalog: &mut Catalog<B>,
    name: &str,
    description: Option<String>,
) -> Result<CmdResult> {
    let name = clean_name("trait", name)?;
    let description = description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());

    let created = catalog.edit(|lib| {
        ensure_unique(lib, &name, None)?;
        let id = lib.add_trait(name.clone(), description);
        lib.trait_(id)
            .cloned()
            .ok_or_else(|| ShelfError::Store(format!("trait {} vanished", id)))
    })?;
    info!(id = %created.id, name = %created.name, "created trait");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Created trait '{}' ({})",
        created.name, created.id
    )));
    Ok(result.with_traits(vec![created]))
}

pub fn rename<B: StorageBackend>(
    catalog: &mut Catalog<B>,
    id: TraitId,
    new_name: &str,
) -> Result<CmdResult> {
    let new_name = clean_name("trait", new_name)?;

    let (old_name, renamed) = catalog.edit(|lib| {
        ensure_unique(lib, &new_name, Some(id))?;
        let tr = lib
            .trait_mut(id)
            .ok_or(ShelfError::NotFound { kind: "trait", id: id.0 })?;
        let old = std::mem::replace(&mut tr.name, new_name.clone());
        Ok((old, tr.clone()))
    })?;
    info!(%id, from = %old_name, to = %renamed.name, "renamed trait");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Renamed trait '{}' to '{}'",
        old_name, renamed.name
    )));
    Ok(result.with_traits(vec![renamed]))
}

pub fn delete<B: StorageBackend>(catalog: &mut Catalog<B>, id: TraitId) -> Result<CmdResult> {
    let (removed, dropped) = catalog.edit(|lib| {
        let before = count_characters(lib);
        let removed = lib
            .remove_trait(id)
            .ok_or(ShelfError::NotFound { kind: "trait", id: id.0 })?;
        Ok((removed, before - count_characters(lib)))
    })?;
    info!(%id, dropped_characters = dropped, "deleted trait");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Deleted trait '{}'",
        removed.name
    )));
    if dropped > 0 {
        result.add_message(CmdMessage::info(format!(
            "Removed {} left without traits",
            plural(dropped, "character")
        )));
    }
    Ok(result.with_traits(vec![removed]))
}

fn count_characters(lib: &Library) -> usize {
    lib.iter_books().map(|b| lib.characters_of(b.id).len()).sum()
}

fn ensure_unique(lib: &Library, name: &str, except: Option<TraitId>) -> Result<()> {
    if lib
        .iter_traits()
        .any(|t| Some(t.id) != except && same_name(&t.name, name))
    {
        return Err(ShelfError::Duplicate {
            kind: "trait",
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
    fn create_and_list() {
        let mut catalog = InMemoryCatalog::new();
        create(&mut catalog, "tsundere", Some("  ".into())).unwrap();
        create(&mut catalog, "Brave", Some("fearless".into())).unwrap();

        let result = list(&catalog).unwrap();
        let names: Vec<_> = result.traits.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Brave", "tsundere"]);
        assert_eq!(result.traits[1].description, None);
        assert_eq!(result.traits[0].description.as_deref(), Some("fearless"));
    }

    #[test]
    fn duplicate_trait_is_rejected() {
        let mut catalog = InMemoryCatalog::new();
        create(&mut catalog, "Brave", None).unwrap();
        let err = create(&mut catalog, "BRAVE", None).unwrap_err();
        assert!(matches!(err, ShelfError::Duplicate { kind: "trait", .. }));
    }

    #[test]
    fn rename_unknown_trait() {
        let mut catalog = InMemoryCatalog::new();
        let err = rename(&mut catalog, TraitId(3), "x").unwrap_err();
        assert!(matches!(err, ShelfError::NotFound { kind: "trait", id: 3 }));
    }

    #[test]
    fn delete_drops_emptied_characters() {
        let mut catalog = LibraryFixture::new()
            .book("Cast")
            .traits(&["brave", "tall"])
            .character(1, &[1])
            .character(1, &[1, 2])
            .catalog();

        let result = delete(&mut catalog, TraitId(1)).unwrap();
        assert_eq!(
            result.messages[1].content,
            "Removed 1 character left without traits"
        );

        let lib = catalog.snapshot().unwrap();
        let chars = lib.characters_of(BookId(1));
        assert_eq!(chars.len(), 1);
        assert!(chars[0].1.contains(&TraitId(2)));
    }
}
