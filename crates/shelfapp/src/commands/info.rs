use serde::Serialize;

use crate::commands::values::sorted_values;
use crate::commands::CmdResult;
use crate::error::{Result, ShelfError};
use crate::model::{Book, BookId, CategoricalValue, Category, CharacterId, Trait};
use crate::store::backend::StorageBackend;
use crate::store::{Catalog, Library};

/// A book with everything it links to, resolved to names.
#[derive(Debug, Clone, Serialize)]
pub struct BookInfo {
    pub book: Book,
    pub series: Option<CategoricalValue>,
    pub artists: Vec<CategoricalValue>,
    pub genres: Vec<CategoricalValue>,
    pub tags: Vec<CategoricalValue>,
    pub characters: Vec<CharacterInfo>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CharacterInfo {
    pub id: CharacterId,
    pub traits: Vec<Trait>,
}

impl BookInfo {
    pub fn collect(library: &Library, id: BookId) -> Result<Self> {
        let book = library
            .book(id)
            .cloned()
            .ok_or(ShelfError::NotFound { kind: "book", id: id.0 })?;

        let linked = |category: Category| -> Vec<CategoricalValue> {
            let ids = library.links_of(id, category);
            sorted_values(library, category)
                .into_iter()
                .filter(|v| ids.contains(&v.id))
                .collect()
        };

        let characters = library
            .characters_of(id)
            .into_iter()
            .map(|(character, trait_ids)| CharacterInfo {
                id: character,
                traits: trait_ids
                    .iter()
                    .filter_map(|t| library.trait_(*t).cloned())
                    .collect(),
            })
            .collect();

        Ok(Self {
            series: linked(Category::Series).into_iter().next(),
            artists: linked(Category::Artists),
            genres: linked(Category::Genres),
            tags: linked(Category::Tags),
            characters,
            book,
        })
    }
}

pub fn run<B: StorageBackend>(catalog: &Catalog<B>, id: BookId) -> Result<CmdResult> {
    let library = catalog.snapshot()?;
    let info = BookInfo::collect(&library, id)?;
    Ok(CmdResult::default().with_info(info))
}
