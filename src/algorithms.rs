pub mod convex_hull;

#[doc(inline)]
pub use convex_hull::{build_hull, Strategy};
