//! LaTeX source scanning.
//!
//! - [`lines`] - comment stripping and continuation joining
//! - [`directive`] - file-referencing directives and extension probing
//!
//! | directive | extensions | optional | prefix |
//! |---|---|---|---|
//! | `\documentclass` | cls | yes | |
//! | `\usepackage` | sty | yes | |
//! | `\input`, `\include` | tex | no | |
//! | `\bibliography` | bib | no | |
//! | `\includegraphics` | image priority list | no | |
//! | `\includeimage`, `\includeimagebase`, `\includeimagefigure` | image priority list | no | image root |
//! | `\pgfdeclareimage` | image priority list | no | |
//! | `\inputminted` | none | no | |
//! | `\lstinputlisting` | listing languages | no | |

pub mod directive;
pub mod lines;

pub use directive::{
    DirectiveRule, DirectiveTable, MatchOutcome, ResolvedPath, match_directive, probe_extensions,
};
pub use lines::LogicalLines;
