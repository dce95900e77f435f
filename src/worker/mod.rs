//! Background API worker for the console.
//!
//! The UI thread sends [`UiCommand`]s over a bounded tokio channel. Each
//! command runs in its own task, so independent reads overlap and settle in
//! any order. Results travel back as [`AppEvent::Worker`].

mod mutation;
mod resource;

use std::sync::mpsc as std_mpsc;

use tokio::sync::mpsc;

use crate::api::{ApiClient, ApiError, ApiResult};
use crate::query::QueryClient;
use crate::ui::events::AppEvent;

pub use mutation::Mutation;
pub use resource::{OrderStream, Resource, ResourceData, UserTab, HISTORY_DAYS};

/// Capacity of the command channel.
pub const COMMAND_BUFFER: usize = 64;

#[derive(Debug)]
pub enum UiCommand {
    /// Read through the cache; `force` skips a fresh cached value.
    Fetch { resource: Resource, force: bool },
    Mutate(Mutation),
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// A settled command.
#[derive(Debug)]
pub enum WorkerEvent {
    Fetched {
        resource: Resource,
        result: ApiResult<ResourceData>,
    },
    Mutated {
        mutation: Mutation,
        result: Result<String, ApiError>,
    },
}

#[derive(Clone)]
pub struct Worker {
    api: ApiClient,
    query: QueryClient,
    events: std_mpsc::Sender<AppEvent>,
}

impl Worker {
    pub fn new(api: ApiClient, query: QueryClient, events: std_mpsc::Sender<AppEvent>) -> Self {
        Self { api, query, events }
    }

    /// Drains commands until every sender is dropped.
    pub async fn run(self, mut commands: mpsc::Receiver<UiCommand>) {
        while let Some(command) = commands.recv().await {
            let worker = self.clone();
            tokio::spawn(async move {
                let event = worker.handle(command).await;
                if worker.events.send(AppEvent::Worker(event)).is_err() {
                    tracing::debug!("event receiver dropped");
                }
            });
        }
        tracing::debug!("command channel closed");
    }

    pub async fn handle(&self, command: UiCommand) -> WorkerEvent {
        match command {
            UiCommand::Fetch { resource, force } => {
                let key = resource.key();
                let api = &self.api;
                let result = if force {
                    self.query.refetch(key, || resource.load(api)).await
                } else {
                    self.query.fetch(key, || resource.load(api)).await
                };
                WorkerEvent::Fetched { resource, result }
            }
            UiCommand::Mutate(mutation) => {
                let invalidates = mutation.invalidates();
                let api = &self.api;
                let result = self
                    .query
                    .mutate(&invalidates, || mutation.apply(api))
                    .await;
                match &result {
                    Ok(_) => tracing::info!(?mutation, "mutation succeeded"),
                    Err(err) => tracing::warn!(?mutation, error = %err, "mutation failed"),
                }
                WorkerEvent::Mutated { mutation, result }
            }
        }
    }
}
