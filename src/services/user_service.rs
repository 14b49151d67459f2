// src/services/user_service.rs

use validator::Validate;

use crate::{
    error::ApiError,
    http::HttpService,
    models::{
        IdSet, ListQuery, Paginated,
        user::{CreateUserDto, UpdateUserDto, User},
    },
};

/// HTTP wrapper for the users resource.
#[derive(Debug, Clone)]
pub struct UserService {
    http: HttpService,
}

impl UserService {
    pub fn new(http: HttpService) -> Self {
        Self { http }
    }

    pub async fn get_paginated_users(&self, query: &ListQuery) -> Result<Paginated<User>, ApiError> {
        self.http
            .get_with_query("/api/users/admin-paginated", query)
            .await
    }

    pub async fn get_user(&self, id: i64) -> Result<User, ApiError> {
        self.http.get(&format!("/api/users/admin-one/{}", id)).await
    }

    pub async fn create_user(&self, input: &CreateUserDto) -> Result<User, ApiError> {
        input.validate()?;
        self.http.post("/api/users/admin-create", input).await
    }

    pub async fn update_user(&self, id: i64, input: &UpdateUserDto) -> Result<User, ApiError> {
        input.validate()?;
        self.http
            .patch(&format!("/api/users/admin-update/{}", id), input)
            .await
    }

    pub async fn delete_user(&self, id: i64) -> Result<User, ApiError> {
        self.http
            .delete(&format!("/api/users/admin-delete/{}", id))
            .await
    }

    /// Deletes every selected user, not just the first row.
    pub async fn delete_users(&self, ids: &[i64]) -> Result<Vec<User>, ApiError> {
        let body = IdSet { ids: ids.to_vec() };
        self.http
            .delete_with_body("/api/users/admin-delete-many", &body)
            .await
    }
}
