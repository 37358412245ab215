// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Checks that the generated queries match the indexer's wire format and
//! that responses convert into the domain types.

use graphql_client::GraphQLQuery;
use serde_json::json;
use verse_base::{
    data_types::{Profile, Publication},
    identifiers::{ProfileId, PublicationId},
};
use verse_indexer_graphql_client::{explore_publications, recommended_profiles, ExplorePublications, RecommendedProfiles};

#[test]
fn recommended_profiles_query_shape() {
    let body = RecommendedProfiles::build_query(recommended_profiles::Variables);
    assert_eq!(body.operation_name, "RecommendedProfiles");
    assert!(body.query.contains("recommendedProfiles"));
}

#[test]
fn explore_publications_query_shape() {
    let body = ExplorePublications::build_query(explore_publications::Variables);
    assert_eq!(body.operation_name, "ExplorePublications");
    assert!(body.query.contains("explorePublications"));
}

#[test]
fn recommended_profiles_response_converts() -> anyhow::Result<()> {
    let data: recommended_profiles::ResponseData = serde_json::from_value(json!({
        "recommendedProfiles": [
            {
                "id": "0x09",
                "name": null,
                "handle": "wagmi.lens",
                "picture": {
                    "original": { "url": "ipfs://QmABC123" }
                }
            },
            {
                "id": "0x0a",
                "name": "DAOJones",
                "handle": "daojones.lens",
                "picture": null
            }
        ]
    }))?;

    let profiles: Vec<Profile> = data
        .recommended_profiles
        .into_iter()
        .map(Profile::from)
        .collect();

    assert_eq!(profiles.len(), 2);
    assert_eq!(profiles[0].id, ProfileId::new("0x09"));
    assert_eq!(profiles[0].avatar_url(), Some("ipfs://QmABC123"));
    assert_eq!(profiles[1].name.as_deref(), Some("DAOJones"));
    assert_eq!(profiles[1].avatar_url(), None);
    Ok(())
}

#[test]
fn explore_publications_response_converts() -> anyhow::Result<()> {
    let data: explore_publications::ResponseData = serde_json::from_value(json!({
        "explorePublications": {
            "items": [
                {
                    "id": "0x21-0x05",
                    "profile": {
                        "id": "0x21",
                        "name": null,
                        "handle": "alice.lens",
                        "picture": null
                    },
                    "metadata": { "content": "gm" }
                },
                {
                    "id": "0x22-0x01",
                    "profile": null,
                    "metadata": null
                }
            ]
        }
    }))?;

    let posts: Vec<Publication> = data
        .explore_publications
        .items
        .into_iter()
        .map(Publication::from)
        .collect();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, PublicationId::new("0x21-0x05"));
    let author = posts[0].profile.as_ref().expect("author");
    assert_eq!(author.id, ProfileId::new("0x21"));
    assert_eq!(
        posts[0]
            .metadata
            .as_ref()
            .and_then(|metadata| metadata.content.as_deref()),
        Some("gm")
    );
    assert!(posts[1].profile.is_none());
    Ok(())
}
