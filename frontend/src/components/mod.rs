pub mod price_update;
