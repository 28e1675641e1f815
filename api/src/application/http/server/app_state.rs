use std::sync::Arc;

use smartfood_core::application::SmartfoodService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: SmartfoodService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: SmartfoodService) -> Self {
        Self { args, service }
    }
}
