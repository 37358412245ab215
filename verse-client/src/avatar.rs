// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Avatar URL resolution.

use verse_base::data_types::Profile;

/// The public gateway content-addressed picture URIs are rewritten through.
pub const IPFS_GATEWAY: &str = "https://gateway.pinata.cloud/ipfs/";

/// The bundled placeholder shown when a profile has no usable picture.
pub const DEFAULT_AVATAR: &str = "/default-avatar.png";

/// The bundled follow-action icon.
pub const FOLLOW_ICON: &str = "/follow-icon.png";

/// Resolves the picture of `profile` into a URL that can be rendered
/// directly. `ipfs:` URIs are rewritten through the public gateway, other
/// URLs pass through unchanged, and a missing profile or picture resolves
/// to the bundled placeholder.
pub fn resolve_avatar(profile: Option<&Profile>) -> String {
    let Some(url) = profile.and_then(Profile::avatar_url) else {
        return DEFAULT_AVATAR.to_string();
    };
    match url
        .strip_prefix("ipfs://")
        .or_else(|| url.strip_prefix("ipfs:"))
    {
        Some(hash) => format!("{IPFS_GATEWAY}{hash}"),
        None => url.to_string(),
    }
}

/// An avatar image source with its render-time fallback guard: the first
/// load error swaps the source to the placeholder, and the swap never
/// re-triggers, not even if the placeholder itself fails to load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvatarImage {
    source: String,
    fallback_applied: bool,
}

impl AvatarImage {
    pub fn new(profile: Option<&Profile>) -> Self {
        Self {
            source: resolve_avatar(profile),
            fallback_applied: false,
        }
    }

    /// The URL to render.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Reports that the current source failed to load. Returns whether the
    /// source changed; at most one swap ever happens.
    pub fn on_load_error(&mut self) -> bool {
        if self.fallback_applied {
            return false;
        }
        self.fallback_applied = true;
        self.source = DEFAULT_AVATAR.to_string();
        true
    }
}
