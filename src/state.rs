use std::sync::Arc;
use tokio::sync::RwLock;

use crate::drawer::DrawerBoard;
use crate::resolver::AnswerResolver;

pub struct AppState {
    pub resolver: Arc<AnswerResolver>,
    /// Drawer state keyed by Discord user id.
    pub drawers: Arc<RwLock<DrawerBoard>>,
}

impl AppState {
    pub fn new(resolver: AnswerResolver) -> Self {
        Self {
            resolver: Arc::new(resolver),
            drawers: Arc::new(RwLock::new(DrawerBoard::default())),
        }
    }
}

pub type Context<'a> = poise::Context<'a, AppState, anyhow::Error>;
