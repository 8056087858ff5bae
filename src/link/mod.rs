//! Help-link assembly.
//!
//! Turns a classified [`HelpTopic`] into the full address of its
//! pre-authored explanation page. Page paths and parameter keys are a
//! compatibility contract with the authored destination content and
//! are reproduced verbatim; parameter order is fixed per page. Every
//! free-text value is encoded as a complete
//! `application/x-www-form-urlencoded` query value before it joins the
//! link, so assembly never fails.

use smol_str::SmolStr;
use thiserror::Error;
use tracing::debug;
use url::form_urlencoded;

use crate::classify::HelpTopic;

pub use crate::text::{element_type, trim_type};

/// Substituted where a page asks the reader to fill in the correct
/// method name themselves.
const CORRECT_METHOD_NAME: &str = "correctName";

/// Substituted where a page asks the reader to fill in the correct
/// class name themselves.
const CORRECT_CLASS_NAME: &str = "CorrectName";

/// Errors raised when validating link configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Every link starts from the base address; an empty one would
    /// leave only relative fragments.
    #[error("base address is empty")]
    EmptyBaseAddress,

    /// Embedded pages scale their text from the configured size.
    #[error("font size must be nonzero")]
    ZeroFontSize,
}

/// Validated configuration for a [`LinkAssembler`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkConfig {
    base_address: String,
    embedded: bool,
    font_size: u32,
}

impl LinkConfig {
    /// Validate and build a configuration.
    ///
    /// `embedded` marks pages rendered inside the editor; only then do
    /// links carry the global `embed`/`fontsize` parameters.
    pub fn new(
        base_address: impl Into<String>,
        embedded: bool,
        font_size: u32,
    ) -> Result<Self, ConfigError> {
        let base_address = base_address.into();
        if base_address.is_empty() {
            return Err(ConfigError::EmptyBaseAddress);
        }
        if font_size == 0 {
            return Err(ConfigError::ZeroFontSize);
        }
        Ok(Self {
            base_address,
            embedded,
            font_size,
        })
    }

    pub fn base_address(&self) -> &str {
        &self.base_address
    }

    pub fn embedded(&self) -> bool {
        self.embedded
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }
}

/// Assembles page links from classified topics.
///
/// Pure and stateless apart from its configuration; safe to share
/// behind a reference from any thread.
#[derive(Debug, Clone)]
pub struct LinkAssembler {
    config: LinkConfig,
}

impl LinkAssembler {
    pub fn new(config: LinkConfig) -> Self {
        Self { config }
    }

    /// Adjust the embedded-page font size after construction.
    pub fn set_font_size(&mut self, font_size: u32) -> Result<(), ConfigError> {
        if font_size == 0 {
            return Err(ConfigError::ZeroFontSize);
        }
        self.config.font_size = font_size;
        Ok(())
    }

    pub fn base_address(&self) -> &str {
        self.config.base_address()
    }

    /// Link shown when no problem classifies: the plain base address,
    /// plus the global parameters when embedded.
    pub fn default_link(&self) -> String {
        let mut link = self.config.base_address.clone();
        self.push_globals(&mut link, false);
        link
    }

    /// Assemble the full link for one topic.
    pub fn assemble(&self, topic: &HelpTopic) -> String {
        let params = topic_params(topic);
        let mut link = self.config.base_address.clone();
        link.push_str(topic.page());
        for (index, (key, value)) in params.iter().enumerate() {
            link.push(if index == 0 { '?' } else { '&' });
            link.push_str(key);
            link.push('=');
            link.push_str(&encode(value));
        }
        self.push_globals(&mut link, !params.is_empty());
        debug!("[ASSEMBLE] page '{}' -> {}", topic.page(), link);
        link
    }

    fn push_globals(&self, link: &mut String, has_params: bool) {
        if !self.config.embedded {
            return;
        }
        link.push(if has_params { '&' } else { '?' });
        link.push_str("embed=true&fontsize=");
        link.push_str(&self.config.font_size.to_string());
    }
}

/// Encode one query value as `application/x-www-form-urlencoded`
/// (space becomes `+`, reserved bytes are percent-encoded).
fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Comma-join a list parameter; the joined list is a single query
/// value, so the commas are encoded with it.
fn join_list(values: &[SmolStr]) -> String {
    values.join(",")
}

/// Ordered `key=value` pairs for a topic, raw and unencoded.
fn topic_params(topic: &HelpTopic) -> Vec<(&'static str, String)> {
    match topic {
        HelpTopic::MissingDimension {
            type_name,
            var_name,
        }
        | HelpTopic::MissingFirstDimension {
            type_name,
            var_name,
        }
        | HelpTopic::ExtraInitializer {
            type_name,
            var_name,
        } => vec![
            ("typename", type_name.to_string()),
            ("arrname", var_name.to_string()),
        ],
        HelpTopic::IncorrectDeclaration {
            type_name,
            var_name,
        } => vec![
            ("typename", type_name.to_string()),
            ("foundname", var_name.to_string()),
        ],
        HelpTopic::MissingMethod {
            method_name,
            return_type,
            provided_args,
            provided_types,
        } => vec![
            ("methodname", method_name.to_string()),
            ("correctmethodname", CORRECT_METHOD_NAME.to_string()),
            ("typename", return_type.to_string()),
            ("providedparams", join_list(provided_args)),
            ("providedtypes", join_list(provided_types)),
        ],
        HelpTopic::ParameterMismatch {
            class_name,
            method_name,
            return_type,
            provided_types,
            required_types,
        } => vec![
            ("classname", class_name.to_string()),
            ("methodname", method_name.to_string()),
            ("methodtypename", return_type.to_string()),
            ("providedtypes", join_list(provided_types)),
            ("requiredtypes", join_list(required_types)),
        ],
        HelpTopic::MissingReturn {
            method_name,
            return_type,
            required_types,
        } => vec![
            ("methodname", method_name.to_string()),
            ("typename", return_type.to_string()),
            ("requiredtypes", join_list(required_types)),
        ],
        HelpTopic::TypeMismatch {
            provided_type,
            required_type,
            var_name,
        } => vec![
            ("typeonename", provided_type.to_string()),
            ("typetwoname", required_type.to_string()),
            ("varname", var_name.to_string()),
        ],
        HelpTopic::MissingType {
            type_name,
            var_name,
        } => vec![
            ("classname", type_name.to_string()),
            ("correctclassname", CORRECT_CLASS_NAME.to_string()),
            ("varname", var_name.to_string()),
        ],
        HelpTopic::MissingVariable {
            type_name,
            var_name,
        } => vec![
            ("classname", type_name.to_string()),
            ("varname", var_name.to_string()),
        ],
        HelpTopic::UninitializedVariable {
            var_name,
            type_name,
        } => vec![
            ("varname", var_name.to_string()),
            ("typename", type_name.to_string()),
        ],
        HelpTopic::UnexpectedToken { type_name } => {
            vec![("typename", type_name.to_string())]
        }
        HelpTopic::NonStaticFromStatic {
            method_name,
            enclosing_method,
            invoked_return_type,
            file_name,
        } => {
            let mut params = vec![("methodname", method_name.to_string())];
            if let Some(enclosing) = enclosing_method {
                params.push(("staticmethodname", enclosing.name.to_string()));
                params.push(("staticmethodreturntype", enclosing.return_type.to_string()));
            }
            if let Some(return_type) = invoked_return_type {
                params.push(("methodreturntype", return_type.to_string()));
            }
            params.push(("filename", file_name.to_string()));
            params
        }
        HelpTopic::VariableDeclarators {
            expr_text,
            type_name,
        } => vec![
            ("methodonename", expr_text.to_string()),
            ("typename", type_name.to_string()),
        ],
        HelpTopic::MethodCallOnWrongType {
            method_name,
            return_type,
            type_name,
            var_text,
        } => vec![
            ("methodname", method_name.to_string()),
            ("returntype", return_type.to_string()),
            ("typename", type_name.to_string()),
            ("varname", var_text.to_string()),
        ],
        HelpTopic::ExtraClosingBrace { original, fixed } => vec![
            ("original", original.to_string()),
            ("fixed", fixed.to_string()),
        ],
        HelpTopic::IncorrectMethodDeclaration { method_name } => {
            vec![("methodname", method_name.to_string())]
        }
    }
}
