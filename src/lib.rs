//! doxydoc — doxygen comment templates from C/C++ declarations.
//!
//! Given the lines after a bare `/**` opener, [`classify()`] decides what kind
//! of declaration follows (file header, macro, class, template, function,
//! ...), [`signature`] tokenizes its parameter and template lists, and
//! [`assemble_template()`] produces an ordered template of numbered
//! placeholder fields. [`generate()`] runs the whole pipeline over a
//! [`TextSource`].

pub mod classify;
pub mod config;
pub mod model;
pub mod render;
pub mod signature;
pub mod source;
pub mod template;

pub use classify::classify;
pub use config::Config;
pub use model::{CommentStyle, DeclarationKind, DocLine, DocTemplate, Field, Parameter, RawMatch};
pub use signature::{normalize_template_args, tokenize_parameter_list};
pub use source::{generate, Buffer, TextSource};
pub use template::assemble_template;
