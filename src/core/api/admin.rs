//! Administrative endpoints under `/api/admin`.
//!
//! Create and update take any serializable payload; the backend validates
//! the fields.

use serde::Serialize;
use serde_json::{Value, json};

use super::endpoints::namespace;
use super::{ApiClient, Method, Transport};
use crate::core::error::ApiError;
use crate::core::storage::KeyValueStore;

namespace!(
    /// Entry point for `/api/admin`.
    Admin,
    /// `/api/admin/users`
    AdminUsers,
    /// `/api/admin/organizations`
    AdminOrganizations,
    /// `/api/admin/teams`
    AdminTeams,
    /// `/api/admin/teams/{id}/members`
    AdminTeamMembers,
    /// `/api/admin/boards`
    AdminBoards,
);

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    pub fn admin(&self) -> Admin<'_, T, S> {
        Admin::new(self)
    }
}

impl<'a, T: Transport, S: KeyValueStore> Admin<'a, T, S> {
    pub async fn status(&self) -> Result<Value, ApiError> {
        self.client.get("/api/admin/status").await
    }

    pub fn users(&self) -> AdminUsers<'a, T, S> {
        AdminUsers::new(self.client)
    }

    pub fn organizations(&self) -> AdminOrganizations<'a, T, S> {
        AdminOrganizations::new(self.client)
    }

    pub fn teams(&self) -> AdminTeams<'a, T, S> {
        AdminTeams::new(self.client)
    }

    pub fn boards(&self) -> AdminBoards<'a, T, S> {
        AdminBoards::new(self.client)
    }
}

/// list / create / update / delete over one admin collection.
macro_rules! crud {
    ($name:ident, $path:literal) => {
        impl<T: Transport, S: KeyValueStore> $name<'_, T, S> {
            pub async fn list(&self) -> Result<Value, ApiError> {
                self.client.get($path).await
            }

            pub async fn create<B: Serialize + ?Sized>(&self, data: &B) -> Result<Value, ApiError> {
                self.client.send_json(Method::Post, $path, data).await
            }

            pub async fn update<B: Serialize + ?Sized>(
                &self,
                id: u32,
                data: &B,
            ) -> Result<Value, ApiError> {
                self.client
                    .send_json(Method::Put, &format!(concat!($path, "/{}"), id), data)
                    .await
            }

            pub async fn delete(&self, id: u32) -> Result<Value, ApiError> {
                self.client
                    .delete(&format!(concat!($path, "/{}"), id))
                    .await
            }
        }
    };
}

crud!(AdminUsers, "/api/admin/users");
crud!(AdminOrganizations, "/api/admin/organizations");
crud!(AdminTeams, "/api/admin/teams");
crud!(AdminBoards, "/api/admin/boards");

impl<T: Transport, S: KeyValueStore> AdminUsers<'_, T, S> {
    pub async fn reset_password(&self, user_id: u32, password: &str) -> Result<Value, ApiError> {
        self.client
            .send_json(
                Method::Post,
                &format!("/api/admin/users/{}/reset-password", user_id),
                &json!({ "password": password }),
            )
            .await
    }
}

impl<'a, T: Transport, S: KeyValueStore> AdminTeams<'a, T, S> {
    pub fn members(&self) -> AdminTeamMembers<'a, T, S> {
        AdminTeamMembers::new(self.client)
    }
}

impl<T: Transport, S: KeyValueStore> AdminTeamMembers<'_, T, S> {
    pub async fn list(&self, team_id: u32) -> Result<Value, ApiError> {
        self.client
            .get(&format!("/api/admin/teams/{}/members", team_id))
            .await
    }

    /// Users eligible to join the team.
    pub async fn available(&self, team_id: u32) -> Result<Value, ApiError> {
        self.client
            .get(&format!("/api/admin/teams/{}/available-members", team_id))
            .await
    }

    pub async fn add(&self, team_id: u32, username: &str) -> Result<Value, ApiError> {
        self.client
            .send_json(
                Method::Post,
                &format!("/api/admin/teams/{}/members", team_id),
                &json!({ "username": username }),
            )
            .await
    }

    pub async fn remove(&self, team_id: u32, user_id: u32) -> Result<Value, ApiError> {
        self.client
            .delete(&format!("/api/admin/teams/{}/members/{}", team_id, user_id))
            .await
    }
}
