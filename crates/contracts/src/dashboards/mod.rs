pub mod d404_resource_inventory;
