pub mod csv;
pub mod product;
