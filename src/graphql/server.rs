use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Router, extract::State, routing::post};
use tracing::{debug, info};

use crate::error::Result;

use super::schema::SubhubSchema;

async fn graphql_handler(
    State(schema): State<SubhubSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    debug!("Executing GraphQL request");
    schema.execute(req.into_inner()).await.into()
}

/// The full HTTP surface: a single `POST /` accepting `{query, variables?}`.
pub fn router(schema: SubhubSchema) -> Router {
    Router::new()
        .route("/", post(graphql_handler))
        .with_state(schema)
}

pub async fn run_server(schema: SubhubSchema, host: &str, port: u16) -> Result<()> {
    let app = router(schema);
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
