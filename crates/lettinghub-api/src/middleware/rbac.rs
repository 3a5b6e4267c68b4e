//! Role guards for route handlers.

use lettinghub_core::error::AppError;

use crate::extractors::AuthUser;

/// Checks that the authenticated user may manage listings
/// (Admin or PropertyManager).
pub fn require_property_manager(auth: &AuthUser) -> Result<(), AppError> {
    if !auth.role.can_manage_properties() {
        return Err(AppError::authorization(
            "Admin or property manager access required",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lettinghub_entity::user::UserRole;
    use lettinghub_service::context::RequestContext;

    fn auth(role: UserRole) -> AuthUser {
        AuthUser(RequestContext::new("someone".to_string(), role))
    }

    #[test]
    fn test_managers_and_admins_pass() {
        assert!(require_property_manager(&auth(UserRole::Admin)).is_ok());
        assert!(require_property_manager(&auth(UserRole::PropertyManager)).is_ok());
    }

    #[test]
    fn test_tenants_are_rejected() {
        assert!(require_property_manager(&auth(UserRole::Tenant)).is_err());
    }
}
