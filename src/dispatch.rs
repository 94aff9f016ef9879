use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread;
use tracing::debug;

use crate::api::CareerApi;
use crate::app::{Effect, Message};

/// Runs effects on worker threads and posts their completions back to the UI loop.
pub struct Dispatcher {
    api: Arc<dyn CareerApi>,
    tx: Sender<Message>,
}

impl Dispatcher {
    pub fn new(api: Arc<dyn CareerApi>, tx: Sender<Message>) -> Self {
        Self { api, tx }
    }

    pub fn dispatch(&self, effect: Effect) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let message = execute(api.as_ref(), effect);
            if tx.send(message).is_err() {
                debug!("UI loop has exited; dropping completion");
            }
        });
    }

    pub fn dispatch_all(&self, effects: Vec<Effect>) {
        for effect in effects {
            self.dispatch(effect);
        }
    }
}

/// Performs one effect synchronously.
pub fn execute(api: &dyn CareerApi, effect: Effect) -> Message {
    match effect {
        Effect::Register(registration) => Message::Registered(api.register(&registration)),
        Effect::FetchListings { mount } => Message::ListingsLoaded {
            mount,
            result: api.list_jobs(),
        },
        Effect::FetchRecommendations { ticket, identity_id } => Message::RecommendationsLoaded {
            ticket,
            result: api.recommendations(ticket.domain, &identity_id),
        },
    }
}
