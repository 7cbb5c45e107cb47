// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! SQLite binding for the MySQL compatible functions.
//!
//! ```no_run
//! let conn = rusqlite::Connection::open_in_memory()?;
//! mysqlite_sqlite::create_functions(&conn, None)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod aggregate;
pub mod config;
pub mod error;
pub mod host;
mod registrar;
mod value;

pub use config::FunctionConfig;
pub use error::{Error, Result};
pub use host::{DRIVER, FunctionHost, FunctionOptions};
pub use registrar::{create_functions, create_functions_with};
