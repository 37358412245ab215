// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use graphql_client::GraphQLQuery;
use verse_base::{
    data_types::{Media, MediaSet, Profile, Publication, PublicationMetadata},
    identifiers::{ProfileId, PublicationId},
};

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "gql/indexer_schema.graphql",
    query_path = "gql/indexer_requests.graphql",
    response_derives = "Debug, Serialize, Clone, PartialEq"
)]
pub struct RecommendedProfiles;

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "gql/indexer_schema.graphql",
    query_path = "gql/indexer_requests.graphql",
    response_derives = "Debug, Serialize, Clone, PartialEq"
)]
pub struct ExplorePublications;

mod from {
    use super::*;

    impl From<recommended_profiles::RecommendedProfilesRecommendedProfiles> for Profile {
        fn from(profile: recommended_profiles::RecommendedProfilesRecommendedProfiles) -> Self {
            let recommended_profiles::RecommendedProfilesRecommendedProfiles {
                id,
                name,
                handle,
                picture,
            } = profile;
            Profile {
                id,
                name,
                handle,
                picture: picture.map(Into::into),
            }
        }
    }

    impl From<recommended_profiles::RecommendedProfilesRecommendedProfilesPicture> for MediaSet {
        fn from(picture: recommended_profiles::RecommendedProfilesRecommendedProfilesPicture) -> Self {
            MediaSet {
                original: Media {
                    url: picture.original.url,
                },
            }
        }
    }

    impl From<explore_publications::ExplorePublicationsExplorePublicationsItems> for Publication {
        fn from(item: explore_publications::ExplorePublicationsExplorePublicationsItems) -> Self {
            let explore_publications::ExplorePublicationsExplorePublicationsItems {
                id,
                profile,
                metadata,
            } = item;
            Publication {
                id,
                profile: profile.map(Into::into),
                metadata: metadata.map(Into::into),
            }
        }
    }

    impl From<explore_publications::ExplorePublicationsExplorePublicationsItemsProfile> for Profile {
        fn from(
            profile: explore_publications::ExplorePublicationsExplorePublicationsItemsProfile,
        ) -> Self {
            let explore_publications::ExplorePublicationsExplorePublicationsItemsProfile {
                id,
                name,
                handle,
                picture,
            } = profile;
            Profile {
                id,
                name,
                handle,
                picture: picture.map(Into::into),
            }
        }
    }

    impl From<explore_publications::ExplorePublicationsExplorePublicationsItemsProfilePicture>
        for MediaSet
    {
        fn from(
            picture: explore_publications::ExplorePublicationsExplorePublicationsItemsProfilePicture,
        ) -> Self {
            MediaSet {
                original: Media {
                    url: picture.original.url,
                },
            }
        }
    }

    impl From<explore_publications::ExplorePublicationsExplorePublicationsItemsMetadata>
        for PublicationMetadata
    {
        fn from(
            metadata: explore_publications::ExplorePublicationsExplorePublicationsItemsMetadata,
        ) -> Self {
            PublicationMetadata {
                content: metadata.content,
            }
        }
    }
}
