use crate::error::MomentumError;

pub trait ContextRenderer: Send + Sync {
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String, MomentumError>;
}
