pub mod location;
pub mod menu;
pub mod router;
