use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth;
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::links::{
    dtos as links_dtos, handlers as links_handlers, models as links_models,
};
use crate::shared::types::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth::handlers::login,
        auth::handlers::status,
        auth::handlers::update_user,
        // Categories
        categories_handlers::list_categories,
        categories_handlers::create_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        categories_handlers::delete_categories,
        // Links
        links_handlers::list_links,
        links_handlers::create_link,
        links_handlers::update_link,
        links_handlers::delete_link,
        // Dashboard (public)
        dashboard_handlers::dashboard_handler::get_summary,
    ),
    components(
        schemas(
            // Auth
            auth::model::AuthenticatedUser,
            auth::dtos::LoginRequestDto,
            auth::dtos::LoginResponseDto,
            auth::dtos::UpdateUserDto,
            auth::dtos::UserResponseDto,
            ApiResponse<auth::model::AuthenticatedUser>,
            ApiResponse<auth::dtos::LoginResponseDto>,
            ApiResponse<auth::dtos::UserResponseDto>,
            // Categories
            categories_dtos::CategoryPayloadDto,
            categories_dtos::BatchDeleteCategoriesDto,
            categories_dtos::CategoryResponseDto,
            categories_dtos::CategoryTreeDto,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            ApiResponse<Vec<categories_dtos::CategoryTreeDto>>,
            // Links
            links_models::Link,
            links_dtos::LinkPayloadDto,
            ApiResponse<links_models::Link>,
            ApiResponse<Vec<links_models::Link>>,
            // Dashboard
            dashboard_dtos::DashboardSummaryDto,
            ApiResponse<dashboard_dtos::DashboardSummaryDto>,
        )
    ),
    tags(
        (name = "auth", description = "Login and account management"),
        (name = "categories", description = "Two-level category tree"),
        (name = "links", description = "Bookmarked sites"),
        (name = "dashboard", description = "Public summary counts"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Linkdir API",
        version = "0.1.0",
        description = "API documentation for Linkdir",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_category_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/categories"));
        assert!(doc.paths.paths.contains_key("/api/categories/{id}"));
        assert!(doc.paths.paths.contains_key("/api/all"));
    }

    #[test]
    fn test_info_modifier_overrides_title() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Bookmarks".to_string(),
            version: "9.9.9".to_string(),
            description: "Internal".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Bookmarks");
        assert_eq!(doc.info.version, "9.9.9");
    }
}
