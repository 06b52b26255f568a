use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub id: String, pub content: String }

#[derive(ToSchema)]
pub struct CreateMessageDoc { pub content: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::messages::list_messages,
        crate::routes::messages::create_message,
        crate::routes::messages::get_message,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            CreateMessageDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "messages")
    )
)]
pub struct ApiDoc;
