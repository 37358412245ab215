// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! The session: the state the view renders and the actions a user can
//! dispatch against it.

use std::collections::BTreeMap;

use tracing::info;
use verse_base::{
    data_types::{Profile, Publication},
    identifiers::{ProfileId, PublicationId},
};
use verse_ethereum::{client::WalletProvider, common::TransactionConfirmation, hub::SocialHub};

use crate::{error::ClientError, indexer::SocialIndexer};

/// A side-effecting session action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Action {
    Connect,
    LoadSuggestions,
    LoadFeed,
    Follow,
}

/// The observable outcome of a dispatched action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    Succeeded,
    Failed(String),
}

/// What the view renders. The record is replaced wholesale on every action
/// completion; it is never mutated in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    /// The connected wallet account. Set once per successful connect and
    /// never cleared: there is no disconnect.
    pub account: Option<String>,
    /// The displayed profile suggestions.
    pub profiles: Vec<Profile>,
    /// The displayed publication feed.
    pub posts: Vec<Publication>,
    /// The latest observed status of each dispatched action.
    pub actions: BTreeMap<Action, TaskStatus>,
    /// The confirmation of the most recent follow transaction. The feed is
    /// not refetched after a follow, so the new relationship is not
    /// reflected in `posts`.
    pub last_follow: Option<TransactionConfirmation>,
}

/// The view controller: owns the session state, the indexer gateway and
/// the social-hub binding.
pub struct Session<I, P> {
    indexer: I,
    hub: SocialHub<P>,
    state: SessionState,
}

impl<I, P> Session<I, P>
where
    I: SocialIndexer,
    P: WalletProvider,
{
    pub fn new(indexer: I, hub: SocialHub<P>) -> Self {
        Self {
            indexer,
            hub,
            state: SessionState::default(),
        }
    }

    /// The current state record.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Connects the wallet and returns the authorized account. Idempotent:
    /// once an account is set the wallet is not consulted again.
    pub async fn connect_wallet(&mut self) -> Result<String, ClientError> {
        if let Some(account) = &self.state.account {
            return Ok(account.clone());
        }
        self.record(Action::Connect, TaskStatus::Pending);
        match self.hub.provider().request_account().await {
            Ok(account) => {
                self.state = SessionState {
                    account: Some(account.clone()),
                    ..self.state.clone()
                };
                self.record(Action::Connect, TaskStatus::Succeeded);
                info!(%account, "wallet connected");
                Ok(account)
            }
            Err(error) => {
                self.record(Action::Connect, TaskStatus::Failed(error.to_string()));
                Err(error.into())
            }
        }
    }

    /// Fires both indexer fetches concurrently and stores whatever each of
    /// them returns. The two loads are independent: neither waits on nor
    /// fails the other, and each updates only its own slot.
    pub async fn load_feed(&mut self) -> Result<(), ClientError> {
        self.record(Action::LoadSuggestions, TaskStatus::Pending);
        self.record(Action::LoadFeed, TaskStatus::Pending);
        let (profiles, posts) = futures::join!(
            self.indexer.recommended_profiles(),
            self.indexer.explore_publications(),
        );

        let mut first_error = None;
        match profiles {
            Ok(profiles) => {
                self.state = SessionState {
                    profiles,
                    ..self.state.clone()
                };
                self.record(Action::LoadSuggestions, TaskStatus::Succeeded);
            }
            Err(error) => {
                self.record(Action::LoadSuggestions, TaskStatus::Failed(error.to_string()));
                first_error = Some(error);
            }
        }
        match posts {
            Ok(posts) => {
                self.state = SessionState {
                    posts,
                    ..self.state.clone()
                };
                self.record(Action::LoadFeed, TaskStatus::Succeeded);
            }
            Err(error) => {
                self.record(Action::LoadFeed, TaskStatus::Failed(error.to_string()));
                first_error = first_error.or(Some(error));
            }
        }
        match first_error {
            None => Ok(()),
            Some(error) => Err(error.into()),
        }
    }

    /// Follows the authoring profile of a publication from the loaded feed.
    pub async fn follow_publication(
        &mut self,
        id: &PublicationId,
    ) -> Result<TransactionConfirmation, ClientError> {
        let author = self.publication_author(id)?;
        self.follow_profile(&author).await
    }

    /// Submits a follow transaction for `profile` and waits for it to be
    /// mined. The loaded feed is left as is afterwards.
    pub async fn follow_profile(
        &mut self,
        profile: &ProfileId,
    ) -> Result<TransactionConfirmation, ClientError> {
        let Some(account) = self.state.account.clone() else {
            self.record(
                Action::Follow,
                TaskStatus::Failed(ClientError::NotConnected.to_string()),
            );
            return Err(ClientError::NotConnected);
        };
        self.record(Action::Follow, TaskStatus::Pending);
        match self
            .hub
            .follow(&account, std::slice::from_ref(profile))
            .await
        {
            Ok(confirmation) => {
                self.state = SessionState {
                    last_follow: Some(confirmation.clone()),
                    ..self.state.clone()
                };
                self.record(Action::Follow, TaskStatus::Succeeded);
                info!(
                    %profile,
                    transaction = %confirmation.transaction_hash,
                    "follow transaction confirmed"
                );
                Ok(confirmation)
            }
            Err(error) => {
                self.record(Action::Follow, TaskStatus::Failed(error.to_string()));
                Err(error.into())
            }
        }
    }

    fn publication_author(&self, id: &PublicationId) -> Result<ProfileId, ClientError> {
        let post = self
            .state
            .posts
            .iter()
            .find(|post| &post.id == id)
            .ok_or_else(|| ClientError::UnknownPublication(id.clone()))?;
        let profile = post
            .profile
            .as_ref()
            .ok_or_else(|| ClientError::MissingAuthor(id.clone()))?;
        Ok(profile.id.clone())
    }

    fn record(&mut self, action: Action, status: TaskStatus) {
        let mut actions = self.state.actions.clone();
        actions.insert(action, status);
        self.state = SessionState {
            actions,
            ..self.state.clone()
        };
    }
}
