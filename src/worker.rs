use std::sync::mpsc::Sender;
use std::thread;

use sa_store::api::StoreClient;
use sa_store::types::{Category, CategoryPayload};

/// Which mutation a completion event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    Create,
    Update,
    Delete,
}

impl StoreOp {
    pub fn label(&self) -> &'static str {
        match self {
            StoreOp::Create => "create",
            StoreOp::Update => "update",
            StoreOp::Delete => "delete",
        }
    }
}

/// Results reported by background request threads.
#[derive(Debug)]
pub enum StoreEvent {
    Rows(Result<Vec<Category>, String>),
    Mutation { op: StoreOp, outcome: Result<(), String> },
}

/// Each request runs on its own thread; the receiver may be gone during
/// shutdown, so send failures are ignored.
pub fn fetch_list(client: StoreClient, tx: Sender<StoreEvent>) {
    thread::spawn(move || {
        let _ = tx.send(StoreEvent::Rows(client.list()));
    });
}

pub fn submit_create(client: StoreClient, payload: CategoryPayload, tx: Sender<StoreEvent>) {
    thread::spawn(move || {
        let outcome = client.create(&payload);
        let _ = tx.send(StoreEvent::Mutation { op: StoreOp::Create, outcome });
    });
}

pub fn submit_update(client: StoreClient, id: String, payload: CategoryPayload, tx: Sender<StoreEvent>) {
    thread::spawn(move || {
        let outcome = client.update(&id, &payload);
        let _ = tx.send(StoreEvent::Mutation { op: StoreOp::Update, outcome });
    });
}

pub fn submit_delete(client: StoreClient, id: String, tx: Sender<StoreEvent>) {
    thread::spawn(move || {
        let outcome = client.delete(&id);
        let _ = tx.send(StoreEvent::Mutation { op: StoreOp::Delete, outcome });
    });
}
