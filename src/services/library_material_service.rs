// src/services/library_material_service.rs

use validator::Validate;

use crate::{
    error::ApiError,
    http::HttpService,
    models::{
        Paginated,
        library_material::{
            CreateLibraryMaterialDto, GetLibraryMaterialsQuery, LibraryMaterial,
            UpdateLibraryMaterialDto,
        },
    },
};

/// HTTP wrapper for the library materials resource.
#[derive(Debug, Clone)]
pub struct LibraryMaterialService {
    http: HttpService,
}

impl LibraryMaterialService {
    pub fn new(http: HttpService) -> Self {
        Self { http }
    }

    pub async fn get_library_materials(
        &self,
        query: &GetLibraryMaterialsQuery,
    ) -> Result<Paginated<LibraryMaterial>, ApiError> {
        self.http.get_with_query("/api/library-materials", query).await
    }

    pub async fn get_library_material(&self, id: i64) -> Result<LibraryMaterial, ApiError> {
        self.http.get(&format!("/api/library-materials/{}", id)).await
    }

    pub async fn create_library_material(
        &self,
        input: &CreateLibraryMaterialDto,
    ) -> Result<LibraryMaterial, ApiError> {
        input.validate()?;
        self.http.post("/api/library-materials/create", input).await
    }

    pub async fn update_library_material(
        &self,
        id: i64,
        input: &UpdateLibraryMaterialDto,
    ) -> Result<LibraryMaterial, ApiError> {
        input.validate()?;
        self.http
            .put(&format!("/api/library-materials/{}", id), input)
            .await
    }

    pub async fn delete_library_material(&self, id: i64) -> Result<LibraryMaterial, ApiError> {
        self.http
            .delete(&format!("/api/library-materials/{}", id))
            .await
    }

    /// Deletes every selected material, not just the first row.
    /// This endpoint takes the bare id array as its body.
    pub async fn delete_many_library_materials(
        &self,
        ids: &[i64],
    ) -> Result<Vec<LibraryMaterial>, ApiError> {
        self.http
            .delete_with_body("/api/library-materials/delete-many", &ids)
            .await
    }
}
