//! # shelfapp
//!
//! The library behind `shelf`, a personal book and media library for
//! paginated image sets. Its core is a faceted filter-to-query compiler: a
//! [`filter::FilterSpec`] built from the user's choices (title, rating,
//! page and date bounds, AND / NOT / OR over artists, genres, tags and
//! series, per-character trait patterns) is turned into the ordered list of
//! matching books.
//!
//! ## Layers
//!
//! - [`model`]: books, categorical values, characters and traits.
//! - [`filter`]: the specification and its validation.
//! - [`query`]: the compiler, as staged set operations over an
//!   [`store::EntityStore`].
//! - [`store`]: the in-memory [`store::Library`] graph and its persistence
//!   backends.
//! - [`commands`]: editing and lookup operations, returning
//!   [`commands::CmdResult`].
//! - [`api`]: the facade UIs talk to.
//! - [`config`] and [`init`]: configuration and startup.
//!
//! ```
//! use shelfapp::filter::{FacetFilter, FilterSpec};
//! use shelfapp::model::Category;
//! use shelfapp::query::{evaluate, SortKey};
//! use shelfapp::store::Library;
//!
//! let mut lib = Library::new();
//! let dune = lib.add_book("Dune", "dune");
//! lib.add_book("Emma", "emma");
//! let scifi = lib.add_value(Category::Genres, "sci-fi");
//! lib.set_links(dune, Category::Genres, [scifi]).unwrap();
//!
//! let spec = FilterSpec::new().with_facet(Category::Genres, FacetFilter::new().all([scifi.0]));
//! let books = evaluate(&lib, Some(&spec), SortKey::TitleAsc).unwrap();
//! assert_eq!(books.len(), 1);
//! assert_eq!(books[0].title, "Dune");
//! ```

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod init;
pub mod model;
pub mod query;
pub mod store;

pub use error::{Result, ShelfError, ValidationError};
