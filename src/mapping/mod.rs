//! Attribute ↔ statement mapping
//!
//! - [`rule`]: attribute rules and the forward rule index
//! - [`convert`]: value converters used by rules
//! - [`defaults`]: the standard BioSignalML rule set
//! - [`engine`]: statement generation, interpretation and graph lookups
//! - [`profile`]: per-format rule profiles loaded from YAML or JSON
//!
//! # Example
//!
//! ```rust
//! use biosignalml::mapping::Mapping;
//! use biosignalml::model::{Category, Recording};
//!
//! let mapping = Mapping::bsml();
//! let mut recording = Recording::new("urn:rec:1");
//! recording.format = Some("EDF".to_string());
//!
//! let statements: Vec<_> = mapping.statements(&recording).unwrap().collect();
//! assert_eq!(statements.len(), 1);
//!
//! let result = mapping.interpret(&statements[0], Some(&Category::RECORDING));
//! assert_eq!(result.attribute.as_deref(), Some("format"));
//! ```

pub mod convert;
pub mod defaults;
pub mod engine;
pub mod profile;
pub mod rule;

pub use engine::{
    ConversionFallback, Interpretation, Mapping, MappingError, MappingResult, NodeOutcome,
    StatementStream,
};
pub use profile::{ConverterKind, ProfileConfig, ProfileError, ProfileResult, RuleConfig};
pub use rule::{AttributeRule, ConversionError, FromSerial, RuleIndex, RuleKey, ToSerial};
