// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! The social-graph indexer as consumed by the session.

use async_trait::async_trait;
use verse_base::data_types::{Profile, Publication};
use verse_indexer_graphql_client::{
    explore_publications, recommended_profiles, request, reqwest_client, ExplorePublications,
    RecommendedProfiles, RequestError,
};

/// How many profile suggestions the session displays.
pub const RECOMMENDED_PROFILES_SHOWN: usize = 5;

/// Read access to the social-graph indexer.
#[async_trait]
pub trait SocialIndexer {
    /// The profile suggestions to display, in server order.
    async fn recommended_profiles(&self) -> Result<Vec<Profile>, RequestError>;

    /// The publications to display, in server order.
    async fn explore_publications(&self) -> Result<Vec<Publication>, RequestError>;
}

/// A GraphQL indexer endpoint.
#[derive(Clone, Debug)]
pub struct IndexerService {
    url: String,
    client: reqwest::Client,
}

impl IndexerService {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest_client(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SocialIndexer for IndexerService {
    async fn recommended_profiles(&self) -> Result<Vec<Profile>, RequestError> {
        let data = request::<RecommendedProfiles, _>(
            &self.client,
            &self.url,
            recommended_profiles::Variables,
        )
        .await?;
        let profiles = data
            .recommended_profiles
            .into_iter()
            .map(Profile::from)
            .collect();
        Ok(truncate_suggestions(profiles))
    }

    async fn explore_publications(&self) -> Result<Vec<Publication>, RequestError> {
        let data = request::<ExplorePublications, _>(
            &self.client,
            &self.url,
            explore_publications::Variables,
        )
        .await?;
        let posts = data
            .explore_publications
            .items
            .into_iter()
            .map(Publication::from)
            .collect();
        Ok(displayable_publications(posts))
    }
}

/// Keeps the first [`RECOMMENDED_PROFILES_SHOWN`] suggestions, in server
/// order.
pub fn truncate_suggestions(mut profiles: Vec<Profile>) -> Vec<Profile> {
    profiles.truncate(RECOMMENDED_PROFILES_SHOWN);
    profiles
}

/// Keeps the publications that have an author to display, preserving their
/// relative order.
pub fn displayable_publications(posts: Vec<Publication>) -> Vec<Publication> {
    posts
        .into_iter()
        .filter(|post| post.profile.is_some())
        .collect()
}

#[cfg(test)]
mod tests {
    use verse_base::identifiers::{ProfileId, PublicationId};

    use super::*;

    fn profile(id: u32) -> Profile {
        Profile {
            id: ProfileId::new(format!("{id:#x}")),
            name: None,
            handle: format!("user{id}.lens"),
            picture: None,
        }
    }

    fn post(id: &str, author: Option<Profile>) -> Publication {
        Publication {
            id: PublicationId::new(id),
            profile: author,
            metadata: None,
        }
    }

    #[test]
    fn suggestions_are_truncated_to_five_in_server_order() {
        let profiles: Vec<_> = (1..=7).map(profile).collect();
        let shown = truncate_suggestions(profiles.clone());
        assert_eq!(shown.len(), 5);
        assert_eq!(shown, profiles[..5].to_vec());
    }

    #[test]
    fn short_suggestion_lists_are_kept_as_is() {
        let profiles: Vec<_> = (1..=3).map(profile).collect();
        assert_eq!(truncate_suggestions(profiles.clone()), profiles);
    }

    #[test]
    fn authorless_publications_are_dropped_in_order() {
        let posts = vec![
            post("0x21-0x01", Some(profile(0x21))),
            post("0x22-0x01", None),
            post("0x23-0x01", Some(profile(0x23))),
        ];
        let shown = displayable_publications(posts);
        assert_eq!(shown.len(), 2);
        assert_eq!(shown[0].id, PublicationId::new("0x21-0x01"));
        assert_eq!(shown[1].id, PublicationId::new("0x23-0x01"));
    }
}
