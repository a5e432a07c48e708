pub mod dashboard;
pub mod group_table;

pub use dashboard::ResourceInventoryDashboard;
pub use group_table::GroupTable;
