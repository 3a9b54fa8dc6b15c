//! Presentation layer for the event summary tool.

pub mod table_view;
