/// UI module exports

pub mod add_product;
pub mod components;
pub mod products;
