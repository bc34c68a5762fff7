pub mod attack;
pub mod card;
pub mod dedup;
