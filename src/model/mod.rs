//! Pure data structures owned by the [`Catalog`](crate::catalog::Catalog).

pub mod city;
pub mod point_of_interest;

pub use city::*;
pub use point_of_interest::*;
