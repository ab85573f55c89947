pub mod product;

