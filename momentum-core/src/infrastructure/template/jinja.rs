// momentum-core/src/infrastructure/template/jinja.rs

// Turns the narrative-context template plus a JSON context into markdown.

use chrono::DateTime;
use minijinja::{Environment, UndefinedBehavior};

use crate::application::ports::ContextRenderer;
use crate::domain::scoring::stats::format_number;
use crate::error::MomentumError;
use crate::infrastructure::error::InfrastructureError;

pub struct JinjaRenderer {
    env: Environment<'static>,
}

impl JinjaRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);

        // {{ 3.14159 | fixed }} -> "3.14", {{ x | fixed(1) }}
        env.add_filter("fixed", |value: f64, digits: Option<u32>| -> String {
            format!("{:.*}", digits.unwrap_or(2) as usize, value)
        });

        // Integral floats print without a fractional part.
        env.add_filter("num", |value: f64| -> String { plain_number(value) });

        // 1_250_000 -> "1.2M"
        env.add_filter("compact", |value: f64| -> String { format_number(value) });

        // Epoch milliseconds -> "2024-03-01 12:00 UTC"
        env.add_filter("datetime", |millis: i64| -> String {
            DateTime::from_timestamp_millis(millis)
                .map(|dt| dt.format("%Y-%m-%d %H:%M UTC").to_string())
                .unwrap_or_else(|| millis.to_string())
        });

        Self { env }
    }
}

impl Default for JinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn plain_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

impl ContextRenderer for JinjaRenderer {
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String, MomentumError> {
        self.env
            .render_str(template, context)
            .map_err(|e| MomentumError::Infrastructure(InfrastructureError::TemplateError(e)))
    }
}
