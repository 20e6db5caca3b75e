//! Building blocks shared by the schema factories
//!
//! Every factory follows the same composition:
//!
//! 1. [`Presence`] decides required/optional and rejects wrong types,
//! 2. a [`RuleChain`] runs the pattern gate and the domain refinements in a
//!    fixed order,
//! 3. [`Collector`] nests part and element issues under their path for
//!    object-shaped and multi-value families.
//!
//! [`StringField`] packages steps 1 and 2 for string-valued fields.

pub mod chain;
pub mod field;
pub mod nest;
pub mod presence;

pub use chain::RuleChain;
pub use field::StringField;
pub use nest::{Collector, nested};
pub use presence::Presence;
