pub mod asset;
pub mod asset_group;
pub mod client;
pub mod common;
pub mod location;
pub mod permission;
pub mod role;
pub mod user;
pub mod user_group;
