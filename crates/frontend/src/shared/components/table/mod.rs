pub mod dynamic_columns;
pub mod table_cell_text;

pub use dynamic_columns::*;
pub use table_cell_text::TableCellText;
