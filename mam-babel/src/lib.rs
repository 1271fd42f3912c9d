//! Verse reduction and rendering for MAM-XML biblical text
//!
//!     This crate turns MAM-XML documents (one per book group) into per-book output files. Every
//!     verse's element tree is reduced to a flat-ish sequence of fragments (text runs and small
//!     elements), and each book's verses are then rendered in one or more output formats:
//!     a spreadsheet-style CSV and a "Unicode names" listing that spells out every Hebrew
//!     character by a short mnemonic, for proofreading.
//!
//!     This is a pure lib, that is, it powers mam-cli but is shell agnostic: no code should
//!     suppose a shell environment, be it std print, env vars etc. Logging goes through
//!     `tracing`; installing a subscriber is the caller's job.
//!
//! Architecture
//!
//!     The pipeline has three stages, each in its own module:
//!
//!     1. Ingest: formats/mam_xml parses the XML into the source IR (./ir/source.rs).
//!     2. Reduce: common/reduce.rs walks each verse bottom-up, dispatching on (tag, class) to a
//!        handler from the HandlerRegistry (./registry.rs) and merging sibling output with
//!        common/shrink.rs. The result is the fragment IR (./ir/fragment.rs).
//!     3. Render: formats implementing the Format trait (./format.rs) serialize one book at a
//!        time; publish.rs writes them to `<root>/<folder><qual>/<Book>.<ext>`.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait and FormatRegistry
//!     ├── registry.rs             # HandlerRegistry: (tag, class) -> handler
//!     ├── books.rs                # OSIS ids and English book names
//!     ├── book_group.rs           # parse + reduce a whole document
//!     ├── publish.rs              # render + atomic file output
//!     ├── names                   # Hebrew short-name tables and shortener
//!     ├── formats
//!     │   ├── mam_xml             # input
//!     │   ├── csv                 # output
//!     │   └── unicode_names       # output
//!     ├── ir                      # source nodes, fragments, verse records
//!     └── common                  # reduce, shrink, text splitting
//!
//! Testing
//!     tests
//!     └── <area>
//!         └── <testname>.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Handlers
//!
//!     The reducer knows nothing about MAM's schema. Which elements exist, and what each becomes,
//!     is entirely the registry's business: a missing entry is a SchemaGap error rather than a
//!     silent drop, so schema changes upstream surface immediately. Handlers are either
//!     declarative actions (pass, drop, wrap, marker, literal), which can come from
//!     configuration, or plain functions for anything more involved.
//!
pub mod book_group;
pub mod books;
pub mod error;
pub mod format;
pub mod formats;
pub mod names;
pub mod publish;
pub mod registry;

pub mod common;
pub mod ir;

pub use book_group::read_book_group;
pub use common::reduce::{reduce, Reducer};
pub use error::BabelError;
pub use format::{Format, FormatRegistry, RenderOptions};
pub use ir::fragment::{Element, Fragment};
pub use ir::source::SourceNode;
pub use ir::verse::{BookGroup, BookVerses, Variant, VerseKey, VerseRecord};
pub use publish::{publish, PublishArtifact, PublishSpec};
pub use registry::{Handler, HandlerAction, HandlerKey, HandlerRegistry};
