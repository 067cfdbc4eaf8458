//! Widget builders on top of the element tree.

mod badge;
mod bar_chart;
mod data_table;
mod spinner;
mod stat_card;

pub use badge::{Badge, BadgeVariant};
pub use bar_chart::{Bar, BarChart};
pub use data_table::{
    CellValue, Column, ColumnWidth, DataTable, DisplayMode, PLACEHOLDER_ROWS,
};
pub use spinner::Spinner;
pub use stat_card::StatCard;
