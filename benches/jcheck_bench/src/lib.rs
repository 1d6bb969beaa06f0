//! Shared fixtures for the jcheck benchmarks.

use jcheck_core::{JsRegex, Model, ModelName, ValidationRule, Validations};

/// A model with a configurable number of validated attributes
pub struct BenchModel {
    validations: Validations,
}

impl BenchModel {
    /// Build a model with `attributes` fields, each carrying a few rules
    pub fn with_attributes(attributes: usize) -> Self {
        let mut validations = Validations::new();
        for i in 0..attributes {
            let name = format!("field_{}", i);
            validations.add(name.clone(), ValidationRule::presence());
            validations.add(
                name.clone(),
                ValidationRule::length()
                    .option("maximum", 255)
                    .option("tokenizer", "words"),
            );
            validations.add(
                name.clone(),
                ValidationRule::format(JsRegex::with_flags("^[a-z0-9_/]+$", "i")),
            );
            validations.add(name, ValidationRule::new("uniqueness"));
        }
        Self { validations }
    }
}

impl Model for BenchModel {
    fn validations(&self) -> &Validations {
        &self.validations
    }

    fn model_name(&self) -> ModelName {
        ModelName::new("BenchModel")
    }
}
