//! Pure data structures for the order form: catalog rows, nutrition tables,
//! and the order DTOs that travel between a surface and the form session.

pub mod fruit;
pub mod nutrition;
pub mod order;

pub use fruit::*;
pub use nutrition::*;
pub use order::*;
