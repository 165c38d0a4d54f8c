//! Routing showcase: echo-style views of what the router matched.

use std::collections::HashMap;

use axum::extract::{Path, Query};
use axum::http::{Method, Uri};
use axum::Json;
use serde_json::{json, Value};

/// `GET /showcase/routing/basic`: echo the matched method and path.
pub async fn basic(method: Method, uri: Uri) -> Json<Value> {
    Json(json!({
        "feature": "routing",
        "method": method.as_str(),
        "path": uri.path(),
        "note": "A static route: the router matched this path literally.",
    }))
}

/// `GET /showcase/routing/query`: echo every query-string pair.
pub async fn query(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    Json(json!({
        "feature": "routing/query",
        "count": params.len(),
        "query": params,
        "note": "Query pairs are decoded by the framework before the handler runs.",
    }))
}

/// `GET /showcase/routing/{version}/{id}`: echo captured path parameters.
pub async fn path_params(Path((version, id)): Path<(String, String)>) -> Json<Value> {
    Json(json!({
        "feature": "routing/params",
        "params": { "version": version, "id": id },
        "note": "Both segments were captured from the route template.",
    }))
}

/// `GET|POST|PUT|DELETE /showcase/routing/methods`: echo the verb.
pub async fn methods(method: Method, uri: Uri) -> Json<Value> {
    Json(json!({
        "feature": "routing/methods",
        "method": method.as_str(),
        "path": uri.path(),
        "note": "One path, four verbs, one handler.",
    }))
}
