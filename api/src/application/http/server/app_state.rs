use std::sync::Arc;

use mealscan_core::application::MealScanService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: MealScanService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: MealScanService) -> Self {
        Self { args, service }
    }
}
