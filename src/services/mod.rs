//! Typed domain services, one per REST resource. Each is a thin wrapper
//! that translates resource operations into gateway calls; all auth and
//! tenant scoping happens in the gateway.

pub mod asset_groups;
pub mod assets;
pub mod clients;
pub mod locations;
pub mod permissions;
pub mod roles;
pub mod user_groups;
pub mod users;

pub use asset_groups::AssetGroupService;
pub use assets::AssetService;
pub use clients::ClientService;
pub use locations::LocationService;
pub use permissions::PermissionService;
pub use roles::RoleService;
pub use user_groups::UserGroupService;
pub use users::UserService;
