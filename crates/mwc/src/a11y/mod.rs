/*!
Accessibility attribute layer.

Typed reads, writes and searches over platform elements.
*/

pub(crate) mod attr;
pub(crate) mod names;
mod value;

pub use value::ValueKind;
pub(crate) use value::{AttrValue, FromAttr};
