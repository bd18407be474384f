pub mod file_list;
pub mod header;
pub mod sidebar;
pub mod spinner;
