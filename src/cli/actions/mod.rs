//! Actions for fixing catalog issues.
//!
//! Actions convert Issues into Operations and execute them.
//!
//! ## Architecture
//!
//! ```text
//! Issue (problem detected)
//!     ↓
//! Action (Issue → Operation conversion)
//!     ↓
//! Operation (edit addressed by <source> position)
//!     ↓
//! execute (re-parse catalog, edit, write back)
//! ```
//!
//! ## Actions
//!
//! - [`RemoveObsolete`]: Drop obsolete/vanished entries (clean)
//! - [`FixTranslation`]: Mark broken translations unfinished (fix)

mod fix_translation;
mod operation;
mod remove_obsolete;
mod traits;

pub use fix_translation::FixTranslation;
pub use operation::Operation;
pub use remove_obsolete::RemoveObsolete;
pub(crate) use traits::execute_operations;
pub use traits::{Action, ActionStats};
