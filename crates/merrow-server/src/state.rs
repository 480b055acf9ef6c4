use selkie::DiagramOracle;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub oracle: Arc<dyn DiagramOracle>,
}
