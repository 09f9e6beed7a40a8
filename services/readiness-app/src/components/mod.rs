pub mod grid_table;
pub mod severity_icon;
pub mod test_cell;
