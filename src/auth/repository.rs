// Credential store access for user records

use std::sync::Arc;

use chrono::Utc;

use crate::auth::{
    error::AuthError,
    models::{normalize_email, NewUser, User},
};
use crate::store::MemoryStore;

/// User repository over the in-memory store
#[derive(Clone)]
pub struct UserRepository {
    store: Arc<MemoryStore>,
}

impl UserRepository {
    /// Create a new UserRepository
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    /// Create a new user
    /// The uniqueness check and the insert happen under one write lock
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, AuthError> {
        let email = normalize_email(&new_user.email);
        let mut users = self.store.users.write().await;

        if users.find(|u| u.email == email).is_some() {
            return Err(AuthError::EmailAlreadyExists);
        }

        let now = Utc::now();
        Ok(users.insert_with(|id| User {
            id,
            email,
            password_hash: new_user.password_hash,
            first_name: new_user.first_name.trim().to_string(),
            last_name: new_user.last_name.trim().to_string(),
            phone: new_user.phone,
            role: new_user.role,
            created_at: now,
            updated_at: now,
        }))
    }

    /// Find a user by email (case-insensitive)
    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        let email = normalize_email(email);
        self.store
            .users
            .read()
            .await
            .find(|u| u.email == email)
            .cloned()
    }

    /// Find a user by ID
    pub async fn find_by_id(&self, id: i32) -> Option<User> {
        self.store.users.read().await.get(id).cloned()
    }

    /// Check if an email exists
    pub async fn email_exists(&self, email: &str) -> bool {
        self.find_by_email(email).await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::models::Role;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            password_hash: "$argon2id$stub".to_string(),
            first_name: " Ravi ".to_string(),
            last_name: "Kumar".to_string(),
            phone: None,
            role: Role::Farmer,
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = UserRepository::new(Arc::new(MemoryStore::new()));

        let user = repo.create_user(new_user("Ravi@Example.com")).await.unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.email, "ravi@example.com");
        assert_eq!(user.first_name, "Ravi");
        assert_eq!(user.created_at, user.updated_at);

        let found = repo.find_by_email(" RAVI@example.com").await.unwrap();
        assert_eq!(found.id, user.id);
        assert!(repo.find_by_id(1).await.is_some());
        assert!(repo.find_by_id(2).await.is_none());
        assert!(repo.email_exists("ravi@example.com").await);
        assert!(!repo.email_exists("sita@example.com").await);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let repo = UserRepository::new(Arc::new(MemoryStore::new()));
        repo.create_user(new_user("ravi@example.com")).await.unwrap();

        let result = repo.create_user(new_user("RAVI@example.com")).await;
        assert!(matches!(result, Err(AuthError::EmailAlreadyExists)));

        let second = repo.create_user(new_user("sita@example.com")).await.unwrap();
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_concurrent_registration_keeps_emails_unique() {
        let repo = UserRepository::new(Arc::new(MemoryStore::new()));

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.create_user(new_user("same@example.com")).await })
            })
            .collect();

        let mut created = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                created += 1;
            }
        }
        assert_eq!(created, 1);
    }
}
