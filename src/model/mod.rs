//! Document model types for run-level content.
//!
//! These are the values the decoders in [`crate::parser`] produce. They are
//! plain data: built once per decode and never mutated by the library
//! afterwards.

mod justification;
mod node;
mod properties;
mod run;

pub use justification::{Alignment, Justification};
pub use node::{Drawing, Extent, XmlAttribute, XmlElement, XmlNode};
pub use properties::{Color, FontSize, ParagraphStyleRef, RunProperties, RunStyleRef};
pub use run::{ContentChild, Run};

pub(crate) use node::local_part;
