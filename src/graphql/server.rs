use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQLResponse;
use axum::{
    Router,
    body::Bytes,
    extract::{RawQuery, State},
    http::{HeaderValue, header},
    response::{Html, IntoResponse, Response},
    routing::{any, get},
};
use serde::Deserialize;

use super::BlogSchema;

#[derive(Debug, Default, Deserialize)]
struct GraphQLParams {
    query: Option<String>,
}

/// Routes: `/graphql` for any method, and a GraphiQL page at `/`.
pub fn router(schema: BlogSchema) -> Router {
    Router::new()
        .route("/", get(graphiql))
        .route("/graphql", any(graphql_handler))
        .with_state(schema)
}

pub async fn run_server(schema: BlogSchema, host: &str, port: u16) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!(addr = %listener.local_addr()?, "GraphQL server listening");
    axum::serve(listener, router(schema)).await
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// Executes the query text from the `query` URL parameter, or from a JSON
/// body when the URL has none. Always answers 200; failures are reported in
/// the response's `errors`, as `application/json`.
async fn graphql_handler(
    State(schema): State<BlogSchema>,
    RawQuery(raw_query): RawQuery,
    body: Bytes,
) -> Response {
    let query = query_text(raw_query.as_deref(), &body);
    tracing::debug!(query = %query, "Executing GraphQL request");

    let response: GraphQLResponse = schema
        .execute(async_graphql::Request::new(query))
        .await
        .into();

    let mut response = response.into_response();
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}

fn query_text(raw_query: Option<&str>, body: &[u8]) -> String {
    raw_query
        .and_then(|raw| serde_urlencoded::from_str::<GraphQLParams>(raw).ok())
        .and_then(|params| params.query)
        .or_else(|| {
            serde_json::from_slice::<GraphQLParams>(body)
                .ok()
                .and_then(|params| params.query)
        })
        .unwrap_or_default()
}
