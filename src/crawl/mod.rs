pub mod crawler;
pub mod fetch;
pub mod pages;
