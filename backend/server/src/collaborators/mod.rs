//! # Collaborators
//!
//! Functions the backend calls but does not own: skill recommendations and chat replies.
//!
//! Handlers only see the traits. Results are passed through to the client untouched, and a
//! failed call becomes a 500 at the handler boundary.
use thiserror::Error;

pub mod chatbot;
pub mod recommender;

pub use chatbot::{Chatbot, KeywordChatbot};
pub use recommender::{CatalogRecommender, Recommender};

#[derive(Error, Debug)]
pub enum CollaboratorError {
    #[error("Collaborator unavailable: {0}")]
    Unavailable(String),

    #[error("Collaborator produced an invalid result: {0}")]
    InvalidResult(#[from] serde_json::Error),
}
