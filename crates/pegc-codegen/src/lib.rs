//! pegc code emission utilities.
//!
//! Turns grammar-level values into fragments that can be embedded safely in
//! generated parser source:
//!
//! - [`escape`]: string-literal and character-class escaping
//! - [`encode`]: base64 for byte buffers
//! - [`trace`]: rule trace instrumentation and the default tracer
//! - [`visible`]: whitespace made visible for diagnostics
//!
//! Everything here is a pure function of its input. The caller decides what
//! code to emit; this crate only guarantees that literal content emits
//! safely.

pub mod encode;
pub mod error;
pub mod escape;
pub mod options;
pub mod trace;
pub mod visible;

pub use encode::encode_bytes;
pub use error::{CodegenError, CodegenResult};
pub use escape::{escape_class_literal, escape_string_literal, escape_string_literal_with};
pub use options::EmitOptions;
pub use trace::{
    default_tracer_implementation, rule_enter_trace, rule_trace, TraceEmitter, TraceEventKind,
};
pub use visible::{escape_block, escape_visible, VisibleMode};
