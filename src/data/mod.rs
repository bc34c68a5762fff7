pub mod card;
pub mod energy;
pub mod store;
