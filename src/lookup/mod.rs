//! Handle-keyed lookup tables.
//!
//! Every table maps an identity [`Handle`] to a value. Ownership is fixed by
//! the table type: [`Lookup`] owns and drops its values, [`LookupRef`] only
//! borrows them. Entries cannot be erased; rebuild the table instead.

mod borrowed;
mod cursor;
mod default;
mod handle;
mod int;
mod owned;

pub use borrowed::*;
pub use cursor::*;
pub use default::*;
pub use handle::*;
pub use int::*;
pub use owned::*;
