//! Type-scoped settings resolution.
//!
//! Settings live as name/value string pairs inside named sections. A
//! [`SettingResolver`] bound to a type looks a setting up under the type's
//! qualified names first (`Base.Derived.LogLevel`, then `Base.LogLevel`)
//! and falls back to the bare name (`LogLevel`), so per-type overrides can
//! share untyped defaults.
//!
//! ```no_run
//! use std::sync::Arc;
//! use sayer::{FileStore, SettingResolver, TypeDescriptor};
//!
//! # fn main() -> sayer::Result<()> {
//! let store = Arc::new(FileStore::open("settings.toml")?);
//! let worker = TypeDescriptor::chain("app", ["Service", "Worker"]);
//! let settings = SettingResolver::new(store, "appSettings", worker);
//! let threads: u32 = settings.get("Threads")?;
//! # let _ = threads;
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod convert;
pub mod error;
pub mod field;
pub mod namer;
pub mod resolver;
pub mod section;
pub mod store;
pub mod types;

pub use convert::SettingValue;
pub use error::{Result, SettingsError};
pub use field::Field;
pub use namer::TypeChainNamer;
pub use resolver::{Fields, SettingResolver};
pub use section::Section;
pub use store::{FileStore, MemoryStore, SettingStore};
pub use types::TypeDescriptor;
