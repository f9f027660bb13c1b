/// OpenAPI document and Swagger UI page
use super::{health, users};
use axum::{response::Html, Json};
use roster_core::User;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Roster", description = "User records over HTTP"),
    paths(
        users::get_user,
        users::create_user,
        users::list_users,
        users::delete_user,
        health::health,
    ),
    components(schemas(User, users::CreateUserRequest)),
    tags(
        (name = "users", description = "Create, fetch, list and delete users"),
        (name = "health", description = "Liveness"),
    )
)]
pub struct ApiDoc;

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// GET /api-docs/openapi.json
pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /swagger-ui
/// Swagger UI shell, assets come from the swagger-ui-dist CDN
pub async fn swagger_ui() -> Html<String> {
    Html(format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Roster API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.ui = SwaggerUIBundle({{ url: "{OPENAPI_PATH}", dom_id: "#swagger-ui" }});
  </script>
</body>
</html>
"##
    ))
}
