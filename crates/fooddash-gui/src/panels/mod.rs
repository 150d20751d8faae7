pub mod charts;
pub mod page;
pub mod sidebar;
pub mod table;
