// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Helpers for issuing GraphQL requests to the indexer.

use std::time::Duration;

use graphql_client::GraphQLQuery;
use thiserror::Error;

/// How long a request may take before the client gives up. There is no
/// retry: a timed-out request is a failed request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum RequestError {
    /// Transport-level error
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    /// The indexer answered with GraphQL errors.
    #[error("GraphQL errors: {0:?}")]
    GraphQl(Vec<graphql_client::Error>),

    /// The indexer answered without errors but also without data.
    #[error("the response contained no data")]
    NullData,
}

/// A `reqwest` client with the standard timeout applied.
pub fn reqwest_client() -> reqwest::Client {
    reqwest::ClientBuilder::new()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap()
}

/// Posts the query to `url` and returns its response data.
///
/// This is a single-shot call: transport failures, GraphQL errors and
/// missing data are all reported as errors and never retried.
pub async fn request<Q, U>(
    client: &reqwest::Client,
    url: U,
    variables: Q::Variables,
) -> Result<Q::ResponseData, RequestError>
where
    Q: GraphQLQuery,
    U: reqwest::IntoUrl,
{
    let body = Q::build_query(variables);
    let response: graphql_client::Response<Q::ResponseData> = client
        .post(url)
        .json(&body)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    match response.errors {
        Some(errors) if !errors.is_empty() => Err(RequestError::GraphQl(errors)),
        _ => response.data.ok_or(RequestError::NullData),
    }
}
