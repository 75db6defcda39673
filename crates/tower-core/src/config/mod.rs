//! Configuration loading and resolution
//!
//! A Tower document has two top-level collections:
//!
//! ```yaml
//! defaults:
//!   visibility: private
//!   topics: [managed-by-tower]
//!   ruleset: {}
//!
//! repositories:
//!   - name: my-org/docs
//!     has_wiki: true
//!     ruleset_disabled: true
//!   - name: my-org/api
//!     extra_topics: [backend]
//! ```
//!
//! Each repository entry is resolved against `defaults` independently:
//!
//! 1. **Scalars** - the override wins when set, otherwise the default applies
//! 2. **Topics** - `topics` replaces the default list when present (even empty),
//!    then `extra_topics` is appended
//! 3. **Ruleset** - inherited, replaced wholesale, or suppressed by `ruleset_disabled`
//! 4. **Secrets and variables** - carried over from the override untouched
//!
//! # Example
//!
//! ```ignore
//! use tower_core::config::LoadedDocument;
//!
//! let document = LoadedDocument::load("repos.yaml".as_ref())?;
//! for resolution in document.resolve().resolutions {
//!     println!("{}: {}", resolution.name, resolution.result.is_ok());
//! }
//! ```

mod document;
mod resolved;
mod resolver;

pub use document::{DocumentEntry, LoadedDocument};
pub use resolved::ResolvedConfig;
pub use resolver::{
    BatchResolution, ConfigResolver, Resolution, extend_or_replace, merge, pick, resolve,
    resolve_ruleset,
};
