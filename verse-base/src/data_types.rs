// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Domain records returned by the social-graph indexer. All of them are
//! read-only snapshots: they are refetched per session and never mutated
//! locally.

use serde::{Deserialize, Serialize};

use crate::identifiers::{ProfileId, PublicationId};

/// A profile indexed from the social graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub name: Option<String>,
    pub handle: String,
    pub picture: Option<MediaSet>,
}

impl Profile {
    /// The raw URL of the profile picture, if any.
    pub fn avatar_url(&self) -> Option<&str> {
        self.picture.as_ref().map(|picture| picture.original.url.as_str())
    }
}

/// The media variants the indexer exposes for a picture.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaSet {
    pub original: Media,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    pub url: String,
}

/// A publication indexed from the social graph. The authoring profile is
/// nullable on the wire; publications without one are not displayable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub id: PublicationId,
    pub profile: Option<Profile>,
    pub metadata: Option<PublicationMetadata>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationMetadata {
    pub content: Option<String>,
}
