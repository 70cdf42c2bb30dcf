//! # API Facade
//!
//! The single entry point for every shelf operation, whatever the UI. It is a
//! thin layer over [`crate::commands`]: it dispatches, fills in configured
//! defaults (the sort key) and returns structured [`CmdResult`]s. It does no
//! I/O and no formatting.
//!
//! `ShelfApi<B>` is generic over the storage backend:
//! - Production: `ShelfApi<FsBackend>`
//! - Testing: `ShelfApi<MemBackend>`

use std::path::PathBuf;

use crate::commands::{self, config::ConfigAction, CmdResult};
use crate::config::ShelfConfig;
use crate::error::Result;
use crate::filter::FilterSpec;
use crate::model::{BookEdit, BookId, Category, TraitId, ValueId};
use crate::query::SortKey;
use crate::store::backend::StorageBackend;
use crate::store::Catalog;

pub struct ShelfApi<B: StorageBackend> {
    catalog: Catalog<B>,
    config: ShelfConfig,
}

impl<B: StorageBackend> ShelfApi<B> {
    pub fn new(catalog: Catalog<B>, config: ShelfConfig) -> Self {
        Self { catalog, config }
    }

    pub fn config(&self) -> &ShelfConfig {
        &self.config
    }

    pub fn location(&self) -> PathBuf {
        self.catalog.location()
    }

    /// Runs a search. Without an explicit key the configured default applies.
    pub fn search(&self, spec: Option<&FilterSpec>, sort: Option<SortKey>) -> Result<CmdResult> {
        let sort = sort.unwrap_or_else(|| self.config.sort_key());
        commands::search::run(&self.catalog, spec, sort)
    }

    pub fn book_info(&self, id: BookId) -> Result<CmdResult> {
        commands::info::run(&self.catalog, id)
    }

    pub fn series_of(&self, id: BookId) -> Result<CmdResult> {
        commands::series::run(&self.catalog, id)
    }

    pub fn add_book(&mut self, title: &str, directory: &str, pages: u32) -> Result<CmdResult> {
        commands::books::add(&mut self.catalog, title, directory, pages)
    }

    pub fn update_book(&mut self, id: BookId, edit: BookEdit) -> Result<CmdResult> {
        commands::books::update(&mut self.catalog, id, edit)
    }

    pub fn delete_book(&mut self, id: BookId) -> Result<CmdResult> {
        commands::books::delete(&mut self.catalog, id)
    }

    pub fn list_values(&self, category: Category) -> Result<CmdResult> {
        commands::values::list(&self.catalog, category)
    }

    pub fn create_value(&mut self, category: Category, name: &str) -> Result<CmdResult> {
        commands::values::create(&mut self.catalog, category, name)
    }

    pub fn rename_value(
        &mut self,
        category: Category,
        id: ValueId,
        new_name: &str,
    ) -> Result<CmdResult> {
        commands::values::rename(&mut self.catalog, category, id, new_name)
    }

    pub fn delete_value(&mut self, category: Category, id: ValueId) -> Result<CmdResult> {
        commands::values::delete(&mut self.catalog, category, id)
    }

    pub fn list_traits(&self) -> Result<CmdResult> {
        commands::traits::list(&self.catalog)
    }

    pub fn create_trait(&mut self, name: &str, description: Option<String>) -> Result<CmdResult> {
        commands::traits::create(&mut self.catalog, name, description)
    }

    pub fn rename_trait(&mut self, id: TraitId, new_name: &str) -> Result<CmdResult> {
        commands::traits::rename(&mut self.catalog, id, new_name)
    }

    pub fn delete_trait(&mut self, id: TraitId) -> Result<CmdResult> {
        commands::traits::delete(&mut self.catalog, id)
    }

    pub fn show_config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config, action)
    }
}
