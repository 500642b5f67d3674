use std::sync::Arc;

use crate::llm::PromptModel;
use crate::store::InfluencerStore;

#[derive(Clone)]
pub struct AppState {
    pub model: Arc<PromptModel>,
    pub influencers: Arc<InfluencerStore>,
}

impl AppState {
    pub fn new(model: PromptModel, influencers: InfluencerStore) -> Self {
        AppState {
            model: Arc::new(model),
            influencers: Arc::new(influencers),
        }
    }
}
