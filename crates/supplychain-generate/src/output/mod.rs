pub mod cells;
pub mod csv;
pub mod records;
