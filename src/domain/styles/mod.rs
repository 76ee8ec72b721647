//! Category registry - the closed set of colour styles.

mod category;

pub use category::Category;
