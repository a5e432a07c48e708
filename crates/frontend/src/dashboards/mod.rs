pub mod d404_resource_inventory;

pub use d404_resource_inventory::ui::ResourceInventoryDashboard;
