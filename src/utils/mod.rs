//! Shared helpers: id generation, URL validation, device classification.

pub mod device_classifier;
pub mod id_generator;
pub mod url_validator;
