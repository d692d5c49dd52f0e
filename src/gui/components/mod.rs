// src/gui/components/mod.rs
pub mod data_table;
pub mod search_bar;
pub mod status_bar;
pub mod tabs;
