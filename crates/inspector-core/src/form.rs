//! Compare form model - the four inputs behind the submit button

use crate::{NewComparison, Result};

/// Which half of the comparison a field belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn label(&self) -> &'static str {
        match self {
            Side::A => "Model A",
            Side::B => "Model B",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonForm {
    pub model_a: String,
    pub prompt_a: String,
    pub model_b: String,
    pub prompt_b: String,
}

impl ComparisonForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// All four fields hold something other than whitespace
    pub fn is_complete(&self) -> bool {
        self.draft().missing_fields().is_empty()
    }

    /// Build the creation payload. Model ids are trimmed, prompts are sent
    /// exactly as typed.
    pub fn to_request(&self) -> Result<NewComparison> {
        let request = self.draft();
        request.validate()?;
        Ok(request)
    }

    pub fn model(&self, side: Side) -> &str {
        match side {
            Side::A => &self.model_a,
            Side::B => &self.model_b,
        }
    }

    pub fn prompt(&self, side: Side) -> &str {
        match side {
            Side::A => &self.prompt_a,
            Side::B => &self.prompt_b,
        }
    }

    pub fn set_model(&mut self, side: Side, value: String) {
        match side {
            Side::A => self.model_a = value,
            Side::B => self.model_b = value,
        }
    }

    pub fn set_prompt(&mut self, side: Side, value: String) {
        match side {
            Side::A => self.prompt_a = value,
            Side::B => self.prompt_b = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn draft(&self) -> NewComparison {
        NewComparison::new(
            self.model_a.trim(),
            self.prompt_a.clone(),
            self.model_b.trim(),
            self.prompt_b.clone(),
        )
    }
}
