use std::sync::Arc;

use super::{
    collaborators::{CatalogRecommender, Chatbot, KeywordChatbot, Recommender},
    config::Config,
    database::{FeedbackStore, StoreError},
};

pub struct State {
    pub config: Config,
    pub store: FeedbackStore,
    pub recommender: Arc<dyn Recommender>,
    pub chatbot: Arc<dyn Chatbot>,
}

impl State {
    pub fn new(config: Config) -> Result<Arc<Self>, StoreError> {
        Self::with_collaborators(
            config,
            Arc::new(CatalogRecommender),
            Arc::new(KeywordChatbot),
        )
    }

    pub fn with_collaborators(
        config: Config,
        recommender: Arc<dyn Recommender>,
        chatbot: Arc<dyn Chatbot>,
    ) -> Result<Arc<Self>, StoreError> {
        let store = FeedbackStore::open(&config.database_path)?;

        Ok(Arc::new(Self {
            config,
            store,
            recommender,
            chatbot,
        }))
    }
}
