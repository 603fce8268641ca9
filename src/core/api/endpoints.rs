//! Endpoint namespaces for regular users.
//!
//! Each method maps to one REST call and does nothing beyond building the
//! path, method and body. Resources without a fixed schema come back as
//! `serde_json::Value`.

use serde_json::{Value, json};

use super::{ApiClient, Method, Transport};
use crate::config::TOKEN_KEY;
use crate::core::error::ApiError;
use crate::core::storage::KeyValueStore;
use crate::models::{Ack, BoardDetail, BoardSummary, CardResponse, ColumnResponse, Created, Token};

/// Declare a borrowed view of the client used as an endpoint namespace.
macro_rules! namespace {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            pub struct $name<'a, T, S> {
                client: &'a ApiClient<T, S>,
            }

            impl<'a, T, S> $name<'a, T, S> {
                pub(crate) fn new(client: &'a ApiClient<T, S>) -> Self {
                    Self { client }
                }
            }
        )+
    };
}

pub(crate) use namespace;

namespace!(
    /// `/api/beta-signup`
    Beta,
    /// Login and token lifecycle.
    Auth,
    /// `/api/boards`
    Boards,
    /// `/api/columns`
    Columns,
    /// `/api/cards`
    Cards,
    /// `/api/comments`
    Comments,
    /// `/api/organizations`
    Organizations,
    /// `/api/organizations/{id}/members`
    OrganizationMembers,
    /// `/api/organizations/{id}/teams`
    OrganizationTeams,
    /// `/api/organizations/{id}/invites`
    OrganizationInvites,
    /// `/api/teams`
    Teams,
    /// `/api/teams/{id}/members`
    TeamMembers,
    /// `/api/api-keys`
    ApiKeys,
    /// `/api/invites`
    Invites,
);

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    pub fn beta(&self) -> Beta<'_, T, S> {
        Beta::new(self)
    }

    pub fn auth(&self) -> Auth<'_, T, S> {
        Auth::new(self)
    }

    pub fn boards(&self) -> Boards<'_, T, S> {
        Boards::new(self)
    }

    pub fn columns(&self) -> Columns<'_, T, S> {
        Columns::new(self)
    }

    pub fn cards(&self) -> Cards<'_, T, S> {
        Cards::new(self)
    }

    pub fn comments(&self) -> Comments<'_, T, S> {
        Comments::new(self)
    }

    pub fn organizations(&self) -> Organizations<'_, T, S> {
        Organizations::new(self)
    }

    pub fn teams(&self) -> Teams<'_, T, S> {
        Teams::new(self)
    }

    pub fn api_keys(&self) -> ApiKeys<'_, T, S> {
        ApiKeys::new(self)
    }

    pub fn invites(&self) -> Invites<'_, T, S> {
        Invites::new(self)
    }
}

impl<T: Transport, S: KeyValueStore> Beta<'_, T, S> {
    pub async fn signup(&self, email: &str) -> Result<Value, ApiError> {
        self.client
            .send_json(Method::Post, "/api/beta-signup", &json!({ "email": email }))
            .await
    }
}

impl<T: Transport, S: KeyValueStore> Auth<'_, T, S> {
    /// Exchange credentials for a token and persist it for later requests.
    pub async fn login(&self, username: &str, password: &str) -> Result<Token, ApiError> {
        let token: Token = self
            .client
            .send_json(
                Method::Post,
                "/api/token",
                &json!({ "username": username, "password": password }),
            )
            .await?;
        if let Err(e) = self.client.store().set(TOKEN_KEY, &token.access_token) {
            crate::utils::log::warn(&format!("could not persist token: {}", e));
        }
        Ok(token)
    }

    /// Forget the stored token.
    pub fn logout(&self) {
        if let Err(e) = self.client.store().remove(TOKEN_KEY) {
            crate::utils::log::warn(&format!("could not clear token: {}", e));
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.client.token().is_some()
    }
}

impl<T: Transport, S: KeyValueStore> Boards<'_, T, S> {
    pub async fn list(&self) -> Result<Vec<BoardSummary>, ApiError> {
        self.client.get("/api/boards").await
    }

    pub async fn get(&self, id: u32) -> Result<BoardDetail, ApiError> {
        self.client.get(&format!("/api/boards/{}", id)).await
    }

    pub async fn create(&self, name: &str) -> Result<Created, ApiError> {
        self.client
            .send_json(Method::Post, "/api/boards", &json!({ "name": name }))
            .await
    }

    /// Rename a board. The backend exposes this as `POST /api/boards/{id}`.
    pub async fn update(&self, id: u32, name: &str) -> Result<BoardDetail, ApiError> {
        self.client
            .send_json(
                Method::Post,
                &format!("/api/boards/{}", id),
                &json!({ "name": name }),
            )
            .await
    }

    pub async fn delete(&self, id: u32) -> Result<Ack, ApiError> {
        self.client.delete(&format!("/api/boards/{}", id)).await
    }

    pub async fn share(
        &self,
        id: u32,
        team_id: Option<u32>,
        is_public_to_org: bool,
    ) -> Result<Value, ApiError> {
        self.client
            .send_json(
                Method::Post,
                &format!("/api/boards/{}/share", id),
                &json!({ "team_id": team_id, "is_public_to_org": is_public_to_org }),
            )
            .await
    }
}

impl<T: Transport, S: KeyValueStore> Columns<'_, T, S> {
    pub async fn create(
        &self,
        board_id: u32,
        name: &str,
        position: i64,
    ) -> Result<ColumnResponse, ApiError> {
        self.client
            .send_json(
                Method::Post,
                "/api/columns",
                &json!({ "board_id": board_id, "name": name, "position": position }),
            )
            .await
    }

    pub async fn update(
        &self,
        id: u32,
        name: &str,
        position: i64,
    ) -> Result<ColumnResponse, ApiError> {
        self.client
            .send_json(
                Method::Put,
                &format!("/api/columns/{}", id),
                &json!({ "name": name, "position": position }),
            )
            .await
    }

    pub async fn delete(&self, id: u32) -> Result<Ack, ApiError> {
        self.client.delete(&format!("/api/columns/{}", id)).await
    }
}

impl<T: Transport, S: KeyValueStore> Cards<'_, T, S> {
    pub async fn create(
        &self,
        column_id: u32,
        title: &str,
        position: i64,
    ) -> Result<CardResponse, ApiError> {
        self.client
            .send_json(
                Method::Post,
                "/api/cards",
                &json!({ "column_id": column_id, "title": title, "position": position }),
            )
            .await
    }

    pub async fn update(
        &self,
        id: u32,
        title: &str,
        description: Option<&str>,
        position: i64,
        column_id: u32,
    ) -> Result<CardResponse, ApiError> {
        self.client
            .send_json(
                Method::Put,
                &format!("/api/cards/{}", id),
                &json!({
                    "title": title,
                    "description": description,
                    "position": position,
                    "column_id": column_id,
                }),
            )
            .await
    }

    pub async fn delete(&self, id: u32) -> Result<Ack, ApiError> {
        self.client.delete(&format!("/api/cards/{}", id)).await
    }
}

impl<T: Transport, S: KeyValueStore> Comments<'_, T, S> {
    pub async fn create(&self, card_id: u32, content: &str) -> Result<Value, ApiError> {
        self.client
            .send_json(
                Method::Post,
                "/api/comments",
                &json!({ "card_id": card_id, "content": content }),
            )
            .await
    }

    pub async fn list(&self, card_id: u32) -> Result<Value, ApiError> {
        self.client
            .get(&format!("/api/cards/{}/comments", card_id))
            .await
    }

    pub async fn update(&self, comment_id: u32, content: &str) -> Result<Value, ApiError> {
        self.client
            .send_json(
                Method::Put,
                &format!("/api/comments/{}", comment_id),
                &json!({ "content": content }),
            )
            .await
    }

    pub async fn delete(&self, comment_id: u32) -> Result<Value, ApiError> {
        self.client
            .delete(&format!("/api/comments/{}", comment_id))
            .await
    }
}

impl<'a, T: Transport, S: KeyValueStore> Organizations<'a, T, S> {
    pub async fn list(&self) -> Result<Value, ApiError> {
        self.client.get("/api/organizations").await
    }

    pub async fn get(&self, id: u32) -> Result<Value, ApiError> {
        self.client.get(&format!("/api/organizations/{}", id)).await
    }

    pub async fn create(&self, name: &str) -> Result<Value, ApiError> {
        self.client
            .send_json(Method::Post, "/api/organizations", &json!({ "name": name }))
            .await
    }

    pub async fn update(&self, id: u32, name: &str) -> Result<Value, ApiError> {
        self.client
            .send_json(
                Method::Put,
                &format!("/api/organizations/{}", id),
                &json!({ "name": name }),
            )
            .await
    }

    pub fn members(&self) -> OrganizationMembers<'a, T, S> {
        OrganizationMembers::new(self.client)
    }

    pub fn teams(&self) -> OrganizationTeams<'a, T, S> {
        OrganizationTeams::new(self.client)
    }

    pub fn invites(&self) -> OrganizationInvites<'a, T, S> {
        OrganizationInvites::new(self.client)
    }
}

impl<T: Transport, S: KeyValueStore> OrganizationMembers<'_, T, S> {
    pub async fn list(&self, org_id: u32) -> Result<Value, ApiError> {
        self.client
            .get(&format!("/api/organizations/{}/members", org_id))
            .await
    }

    pub async fn add(&self, org_id: u32, username: &str) -> Result<Value, ApiError> {
        self.client
            .send_json(
                Method::Post,
                &format!("/api/organizations/{}/members", org_id),
                &json!({ "username": username }),
            )
            .await
    }

    pub async fn remove(&self, org_id: u32, user_id: u32) -> Result<Value, ApiError> {
        self.client
            .delete(&format!("/api/organizations/{}/members/{}", org_id, user_id))
            .await
    }
}

impl<T: Transport, S: KeyValueStore> OrganizationTeams<'_, T, S> {
    pub async fn list(&self, org_id: u32) -> Result<Value, ApiError> {
        self.client
            .get(&format!("/api/organizations/{}/teams", org_id))
            .await
    }

    pub async fn create(&self, org_id: u32, name: &str) -> Result<Value, ApiError> {
        self.client
            .send_json(
                Method::Post,
                &format!("/api/organizations/{}/teams", org_id),
                &json!({ "name": name }),
            )
            .await
    }
}

impl<T: Transport, S: KeyValueStore> OrganizationInvites<'_, T, S> {
    pub async fn list(&self, org_id: u32) -> Result<Value, ApiError> {
        self.client
            .get(&format!("/api/organizations/{}/invites", org_id))
            .await
    }

    pub async fn create(&self, org_id: u32, email: &str) -> Result<Value, ApiError> {
        self.client
            .send_json(
                Method::Post,
                &format!("/api/organizations/{}/invites", org_id),
                &json!({ "email": email }),
            )
            .await
    }

    pub async fn revoke(&self, org_id: u32, invite_id: u32) -> Result<Value, ApiError> {
        self.client
            .delete(&format!("/api/organizations/{}/invites/{}", org_id, invite_id))
            .await
    }
}

impl<'a, T: Transport, S: KeyValueStore> Teams<'a, T, S> {
    pub async fn update(&self, id: u32, name: &str) -> Result<Value, ApiError> {
        self.client
            .send_json(
                Method::Put,
                &format!("/api/teams/{}", id),
                &json!({ "name": name }),
            )
            .await
    }

    pub async fn delete(&self, id: u32) -> Result<Value, ApiError> {
        self.client.delete(&format!("/api/teams/{}", id)).await
    }

    pub fn members(&self) -> TeamMembers<'a, T, S> {
        TeamMembers::new(self.client)
    }
}

impl<T: Transport, S: KeyValueStore> TeamMembers<'_, T, S> {
    pub async fn list(&self, team_id: u32) -> Result<Value, ApiError> {
        self.client
            .get(&format!("/api/teams/{}/members", team_id))
            .await
    }

    pub async fn add(&self, team_id: u32, username: &str) -> Result<Value, ApiError> {
        self.client
            .send_json(
                Method::Post,
                &format!("/api/teams/{}/members", team_id),
                &json!({ "username": username }),
            )
            .await
    }

    pub async fn remove(&self, team_id: u32, user_id: u32) -> Result<Value, ApiError> {
        self.client
            .delete(&format!("/api/teams/{}/members/{}", team_id, user_id))
            .await
    }
}

impl<T: Transport, S: KeyValueStore> ApiKeys<'_, T, S> {
    pub async fn list(&self) -> Result<Value, ApiError> {
        self.client.get("/api/api-keys").await
    }

    /// `expires_at` is an ISO-8601 timestamp, or `None` for no expiry.
    pub async fn create(&self, name: &str, expires_at: Option<&str>) -> Result<Value, ApiError> {
        self.client
            .send_json(
                Method::Post,
                "/api/api-keys",
                &json!({ "name": name, "expires_at": expires_at }),
            )
            .await
    }

    pub async fn revoke(&self, id: u32) -> Result<Value, ApiError> {
        self.client.delete(&format!("/api/api-keys/{}", id)).await
    }

    pub async fn activate(&self, id: u32) -> Result<Value, ApiError> {
        self.client
            .post_empty(&format!("/api/api-keys/{}/activate", id))
            .await
    }
}

impl<T: Transport, S: KeyValueStore> Invites<'_, T, S> {
    pub async fn get(&self, token: &str) -> Result<Value, ApiError> {
        self.client.get(&format!("/api/invites/{}", token)).await
    }

    pub async fn accept(&self, token: &str) -> Result<Value, ApiError> {
        self.client
            .post_empty(&format!("/api/invites/{}/accept", token))
            .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::super::testing::client;
    use super::*;

    fn body(request: &super::super::HttpRequest) -> Value {
        serde_json::from_str(request.body.as_deref().unwrap_or("null")).unwrap()
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_login_persists_token() {
        let (client, transport, store) = client(&[]);
        transport.respond(200, r#"{"access_token": "tok", "token_type": "bearer"}"#);

        let token = client.auth().login("alice", "secret").await.unwrap();
        assert_eq!(token.access_token, "tok");
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("tok"));
        assert!(client.auth().is_logged_in());

        let request = transport.last();
        assert_eq!(request.url, "/api/token");
        assert_eq!(body(&request), json!({"username": "alice", "password": "secret"}));

        client.auth().logout();
        assert!(!client.auth().is_logged_in());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_failed_login_keeps_no_token() {
        let (client, transport, store) = client(&[]);
        transport.respond(401, r#"{"detail": "Incorrect username or password"}"#);

        let err = client.auth().login("alice", "wrong").await.unwrap_err();
        assert_eq!(err.to_string(), "Incorrect username or password");
        assert_eq!(store.get(TOKEN_KEY), None);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_board_endpoints() {
        let (client, transport, _) = client(&[]);

        transport.respond(200, r#"[{"id": 1, "name": "Sprint 1", "created_at": "2024-01-01"}]"#);
        let boards = client.boards().list().await.unwrap();
        assert_eq!(boards[0].name, "Sprint 1");
        assert_eq!(transport.last().method, Method::Get);

        transport.respond(200, r#"{"id": 7}"#);
        let created = client.boards().create("Roadmap").await.unwrap();
        assert_eq!(created, Created { id: 7 });
        assert_eq!(body(&transport.last()), json!({"name": "Roadmap"}));

        transport.respond(200, r#"{"ok": true}"#);
        assert!(client.boards().delete(7).await.unwrap().ok);
        let request = transport.last();
        assert_eq!(request.method, Method::Delete);
        assert_eq!(request.url, "/api/boards/7");
        assert_eq!(request.body, None);

        let _ = client.boards().share(7, Some(3), false).await;
        let request = transport.last();
        assert_eq!(request.url, "/api/boards/7/share");
        assert_eq!(body(&request), json!({"team_id": 3, "is_public_to_org": false}));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_card_update_body() {
        let (client, transport, _) = client(&[]);
        transport.respond(
            200,
            r#"{"id": 5, "title": "Ship", "description": null, "position": 0}"#,
        );

        let card = client.cards().update(5, "Ship", None, 0, 3).await.unwrap();
        assert_eq!(card.title, "Ship");

        let request = transport.last();
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.url, "/api/cards/5");
        assert_eq!(
            body(&request),
            json!({"title": "Ship", "description": null, "position": 0, "column_id": 3})
        );
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_nested_namespaces() {
        let (client, transport, _) = client(&[]);

        let _ = client.organizations().members().remove(2, 9).await;
        assert_eq!(transport.last().url, "/api/organizations/2/members/9");

        let _ = client.organizations().invites().create(2, "bob@example.com").await;
        let request = transport.last();
        assert_eq!(request.url, "/api/organizations/2/invites");
        assert_eq!(body(&request), json!({"email": "bob@example.com"}));

        let _ = client.teams().members().add(4, "carol").await;
        assert_eq!(transport.last().url, "/api/teams/4/members");

        let _ = client.comments().list(11).await;
        assert_eq!(transport.last().url, "/api/cards/11/comments");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_bodyless_posts() {
        let (client, transport, _) = client(&[]);

        let _ = client.api_keys().activate(3).await;
        let request = transport.last();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, "/api/api-keys/3/activate");
        assert_eq!(request.body, None);

        let _ = client.invites().accept("abc").await;
        assert_eq!(transport.last().url, "/api/invites/abc/accept");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_api_key_without_expiry() {
        let (client, transport, _) = client(&[]);
        let _ = client.api_keys().create("ci", None).await;
        assert_eq!(
            body(&transport.last()),
            json!({"name": "ci", "expires_at": null})
        );
    }
}
