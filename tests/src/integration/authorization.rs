//! The identity gate, the role table, the profile-uniqueness conflict, and
//! the deliberate authorization asymmetry between status updates and user
//! management.

#[cfg(test)]
mod tests {
    use crate::{case_input, TestRegistry};
    use vigil_engine::{CallerContext, CaseApi, CaseListFilter, RegistryError, UserApi};
    use vigil_types::{CaseStatus, Permission, Role};

    #[test]
    fn test_anonymous_callers_are_rejected_before_any_access() {
        let fixture = TestRegistry::new();
        let cases = fixture.cases();
        let anon = CallerContext::anonymous();

        let err = cases.create_case(&anon, case_input("DrugX", "Headache")).unwrap_err();
        assert_eq!(err, RegistryError::Unauthenticated);

        // Reads are gated too.
        let err = cases.get_cases(&anon, &CaseListFilter::default(), None).unwrap_err();
        assert_eq!(err, RegistryError::Unauthenticated);
        let err = cases.get_case_stats(&anon).unwrap_err();
        assert_eq!(err, RegistryError::Unauthenticated);

        // And nothing was touched.
        assert!(fixture.db.read().cases.is_empty());
        assert!(fixture.db.read().audit.is_empty());
    }

    #[test]
    fn test_unknown_token_is_as_anonymous() {
        let fixture = TestRegistry::new();
        let cases = fixture.cases();
        let forged = CallerContext::authenticated("no-such-token");

        let err = cases.create_case(&forged, case_input("DrugX", "Headache")).unwrap_err();
        assert_eq!(err, RegistryError::Unauthenticated);
    }

    #[test]
    fn test_profile_creation_is_once_per_identity() {
        let fixture = TestRegistry::new();
        let (user, ctx) = fixture.signup("dana");
        let users = fixture.users();

        users
            .create_user_profile(&ctx, Role::SafetyOfficer, "Safety".to_owned())
            .unwrap();
        let err = users
            .create_user_profile(&ctx, Role::Admin, "Safety".to_owned())
            .unwrap_err();
        assert_eq!(err, RegistryError::ProfileExists { user_id: user });

        // Exactly one profile row, still the first role.
        let db = fixture.db.read();
        assert_eq!(db.profiles.len(), 1);
        assert_eq!(db.profiles.get_by_user(&user).unwrap().record.role, Role::SafetyOfficer);
    }

    #[test]
    fn test_stored_permission_sets_match_the_role_table() {
        let fixture = TestRegistry::new();
        let users = fixture.users();

        let roles = [
            (Role::Admin, 5),
            (Role::SafetyOfficer, 5),
            (Role::DataEntry, 2),
            (Role::Reviewer, 2),
            (Role::Viewer, 1),
        ];
        for (n, (role, expected_len)) in roles.into_iter().enumerate() {
            let (user, ctx) = fixture.signup(&format!("user-{n}"));
            users.create_user_profile(&ctx, role, "Dept".to_owned()).unwrap();
            let db = fixture.db.read();
            let stored = &db.profiles.get_by_user(&user).unwrap().record.permissions;
            assert_eq!(stored.len(), expected_len, "role {role}");
        }

        // Spot-check the two ends of the table.
        let (admin, admin_ctx) = fixture.signup("admin");
        let (viewer, viewer_ctx) = fixture.signup("viewer");
        users.create_user_profile(&admin_ctx, Role::Admin, "IT".to_owned()).unwrap();
        users.create_user_profile(&viewer_ctx, Role::Viewer, "QA".to_owned()).unwrap();

        let db = fixture.db.read();
        let admin_set = &db.profiles.get_by_user(&admin).unwrap().record.permissions;
        for p in [
            Permission::Read,
            Permission::Write,
            Permission::Delete,
            Permission::ManageUsers,
            Permission::ManageSystem,
        ] {
            assert!(admin_set.contains(&p));
        }
        assert_eq!(
            db.profiles.get_by_user(&viewer).unwrap().record.permissions,
            vec![Permission::Read]
        );
    }

    #[test]
    fn test_get_all_users_requires_manage_users() {
        let fixture = TestRegistry::new();
        let (_, admin_ctx) = fixture.signup("admin");
        let (_, viewer_ctx) = fixture.signup("viewer");
        let (_, drifter_ctx) = fixture.signup("drifter");
        let users = fixture.users();

        users.create_user_profile(&admin_ctx, Role::Admin, "IT".to_owned()).unwrap();
        users.create_user_profile(&viewer_ctx, Role::Viewer, "QA".to_owned()).unwrap();

        let listing = users.get_all_users(&admin_ctx).unwrap();
        assert_eq!(listing.len(), 2);

        let err = users.get_all_users(&viewer_ctx).unwrap_err();
        assert_eq!(
            err,
            RegistryError::Forbidden {
                required: Permission::ManageUsers
            }
        );

        // No profile at all is denied the same way.
        let err = users.get_all_users(&drifter_ctx).unwrap_err();
        assert_eq!(
            err,
            RegistryError::Forbidden {
                required: Permission::ManageUsers
            }
        );
    }

    #[test]
    fn test_status_updates_need_authentication_but_no_role() {
        // The documented asymmetry: updateCaseStatus has no capability
        // check, while getAllUsers requires manage_users.
        let fixture = TestRegistry::new();
        let (_, officer_ctx) = fixture.signup("dana");
        let (_, viewer_ctx) = fixture.signup("viewer");
        let cases = fixture.cases();
        let users = fixture.users();

        users
            .create_user_profile(&viewer_ctx, Role::Viewer, "QA".to_owned())
            .unwrap();

        let id = cases
            .create_case(&officer_ctx, case_input("DrugX", "Headache"))
            .unwrap();
        // A read-only viewer can still move the status.
        cases
            .update_case_status(&viewer_ctx, &id, CaseStatus::Closed, None)
            .unwrap();
        assert!(users.get_all_users(&viewer_ctx).is_err());
    }

    #[test]
    fn test_get_current_user_is_null_not_error_for_anonymous() {
        let fixture = TestRegistry::new();
        let users = fixture.users();
        assert!(users.get_current_user(&CallerContext::anonymous()).is_none());
    }

    #[test]
    fn test_get_current_user_joins_account_and_profile() {
        let fixture = TestRegistry::new();
        let (user, ctx) = fixture.signup("dana");
        let users = fixture.users();

        // Before any profile exists.
        let me = users.get_current_user(&ctx).unwrap();
        assert_eq!(me.user_id, user);
        assert_eq!(me.name.as_deref(), Some("dana"));
        assert!(me.profile.is_none());

        users
            .create_user_profile(&ctx, Role::DataEntry, "Intake".to_owned())
            .unwrap();
        let me = users.get_current_user(&ctx).unwrap();
        assert_eq!(me.profile.as_ref().unwrap().role, Role::DataEntry);
    }

    #[test]
    fn test_update_last_login_stamps_and_silently_ignores_anonymous() {
        let fixture = TestRegistry::new();
        let (user, ctx) = fixture.signup("dana");
        let users = fixture.users();

        users.create_user_profile(&ctx, Role::Viewer, "QA".to_owned()).unwrap();
        assert!(fixture
            .db
            .read()
            .profiles
            .get_by_user(&user)
            .unwrap()
            .record
            .last_login
            .is_none());

        fixture.clock.advance(5_000);
        users.update_last_login(&ctx);
        assert_eq!(
            fixture.db.read().profiles.get_by_user(&user).unwrap().record.last_login,
            Some(crate::T0 + 5_000)
        );

        // Anonymous ping: no panic, no stamp, not audited.
        let audit_before = fixture.db.read().audit.len();
        users.update_last_login(&CallerContext::anonymous());
        assert_eq!(fixture.db.read().audit.len(), audit_before);
    }
}
