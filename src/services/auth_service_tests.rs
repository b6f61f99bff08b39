// src/services/auth_service_tests.rs
//
// Auth service flows against a real in-memory database: registration rules,
// login/logout, and session resolution.

#[cfg(test)]
mod auth_flow_tests {
    use std::sync::Arc;

    use crate::db::connection::create_test_pool;
    use crate::error::AppError;
    use crate::events::EventBus;
    use crate::repositories::{
        SessionRepository, SqliteSessionRepository, SqliteUserRepository, UserRepository,
    };
    use crate::services::auth_service::{AuthService, RegisterUserRequest};
    use uuid::Uuid;

    fn service() -> AuthService {
        let pool = Arc::new(create_test_pool());
        let user_repo: Arc<dyn UserRepository> = Arc::new(SqliteUserRepository::new(pool.clone()));
        let session_repo: Arc<dyn SessionRepository> =
            Arc::new(SqliteSessionRepository::new(pool));
        AuthService::new(user_repo, session_repo, Arc::new(EventBus::new()))
    }

    fn register(service: &AuthService, username: &str, email: &str) -> Uuid {
        service
            .register_user(RegisterUserRequest {
                username: username.to_string(),
                email: email.to_string(),
                password: "Sup3rSecret".to_string(),
            })
            .expect("registration succeeds")
    }

    #[test]
    fn test_register_then_login() {
        let service = service();
        let user_id = register(&service, "alice", "alice@example.com");

        let session = service.login("alice@example.com", "Sup3rSecret").unwrap();
        assert_eq!(session.user_id, user_id);

        let user = service.current_user(session.token).unwrap().unwrap();
        assert_eq!(user.username, "alice");
    }

    #[test]
    fn test_wrong_password_rejected() {
        let service = service();
        register(&service, "alice", "alice@example.com");

        let result = service.login("alice@example.com", "WrongPass1");
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_unknown_email_same_error_as_wrong_password() {
        let service = service();
        register(&service, "alice", "alice@example.com");

        let unknown = service.login("nobody@example.com", "Sup3rSecret");
        let wrong = service.login("alice@example.com", "WrongPass1");
        match (unknown, wrong) {
            (Err(AppError::Validation(a)), Err(AppError::Validation(b))) => assert_eq!(a, b),
            other => panic!("expected validation errors, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let service = service();
        register(&service, "alice", "alice@example.com");

        let result = service.register_user(RegisterUserRequest {
            username: "alice2".to_string(),
            email: "alice@example.com".to_string(),
            password: "Sup3rSecret".to_string(),
        });
        match result {
            Err(AppError::Validation(message)) => {
                assert_eq!(message, "Email already registered")
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_username_rejected() {
        let service = service();
        register(&service, "alice", "alice@example.com");

        let result = service.register_user(RegisterUserRequest {
            username: "alice".to_string(),
            email: "other@example.com".to_string(),
            password: "Sup3rSecret".to_string(),
        });
        match result {
            Err(AppError::Validation(message)) => assert_eq!(message, "Username already taken"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_weak_password_rejected() {
        let service = service();
        let result = service.register_user(RegisterUserRequest {
            username: "bob".to_string(),
            email: "bob@example.com".to_string(),
            password: "weak".to_string(),
        });
        assert!(matches!(result, Err(AppError::Domain(_))));
    }

    #[test]
    fn test_logout_invalidates_session() {
        let service = service();
        register(&service, "alice", "alice@example.com");
        let session = service.login("alice@example.com", "Sup3rSecret").unwrap();

        assert!(service.logout(session.token).unwrap());
        assert!(service.current_user(session.token).unwrap().is_none());
    }

    #[test]
    fn test_current_user_with_unknown_token() {
        let service = service();
        assert!(service.current_user(Uuid::new_v4()).unwrap().is_none());
    }
}
