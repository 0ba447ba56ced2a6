//! The role→permission table.
//!
//! Authoritative and static: evaluated once at profile creation and stored
//! on the profile. Capability checks read the stored set from then on, so a
//! later table change never alters an existing profile's capabilities.

use vigil_types::{Permission, Role};

/// Capability set granted by a role.
pub fn permissions_for(role: Role) -> Vec<Permission> {
    use Permission::*;
    match role {
        Role::Admin => vec![Read, Write, Delete, ManageUsers, ManageSystem],
        Role::SafetyOfficer => vec![Read, Write, Review, Approve, SignalDetection],
        Role::DataEntry => vec![Read, Write],
        Role::Reviewer => vec![Read, Review],
        Role::Viewer => vec![Read],
    }
}
