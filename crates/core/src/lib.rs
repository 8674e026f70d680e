//! Core library for bookshelf
//!
//! This crate implements the **Functional Core** of the bookshelf storefront,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`bookshelf_core`** (this crate): Pure transformation functions with zero I/O
//! - **`bookshelf`**: File loading, terminal output and orchestration (the Imperative Shell)
//!
//! Everything here can be tested with fixture data, no mocking required. The
//! only stateful type is [`login::LoginPromptTrigger`], which is constructed
//! explicitly and handed to whoever needs it rather than living in a global.
//!
//! # Module Organization
//!
//! - [`pagination`]: Page controls for listing screens and page slicing
//! - [`users`]: Search and ordering for the user list
//! - [`login`]: The "show login" trigger and the login modal state
//! - [`config`]: Configuration file parsing
//!
//! # Example Usage
//!
//! ```rust
//! use bookshelf_core::pagination::render_pagination;
//! use bookshelf_core::users::{sort_users, SortDirection, SortField, UserRecord};
//!
//! let users = vec![
//!     UserRecord { lastname: Some("Smith".to_string()), ..Default::default() },
//!     UserRecord { lastname: Some("Adams".to_string()), ..Default::default() },
//! ];
//! let sorted = sort_users(&users, SortField::LastName, SortDirection::Asc);
//! assert_eq!(sorted[0].lastname.as_deref(), Some("Adams"));
//!
//! let controls = render_pagination(1, 3);
//! assert_eq!(controls.len(), 5);
//! ```

pub mod config;
pub mod login;
pub mod pagination;
pub mod users;
