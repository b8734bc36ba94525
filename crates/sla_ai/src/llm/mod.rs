use sla_core::error::AppError;

use crate::schema::ResponseSchema;

/// Text-generation seam. Passing a schema asks the provider for structured
/// JSON output; without one the reply is free-form text.
pub trait Llm {
    fn generate(&self, prompt: &str, schema: Option<&ResponseSchema>) -> Result<String, AppError>;
}

pub mod gemini_llm;
