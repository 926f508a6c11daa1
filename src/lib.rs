#![deny(unsafe_code)]

//! Go binding generation for ketty RPC services.
//!
//! This crate is the code-producing half of the `protoc-gen-ketty` plugin:
//! the host compiler parses `.proto` sources into a descriptor tree, and this
//! crate turns that tree into Go source text. For every service it emits a
//! dispatch handle, a client struct, a constructor, and one method per RPC;
//! for every message carrying ketty's custom options it emits the matching
//! marker and accessor methods.
//!
//! # The Pipeline
//!
//! ```text
//! .proto file   →   descriptor tree   →   ketty-codegen   →   Go bindings
//!  (external)      (schema module)      (this crate)       (external fmt)
//! ```
//!
//! Everything upstream (parsing, type resolution across files) and
//! downstream (formatting, the plugin wire protocol) lives in external
//! collaborators. The crate itself is a pure transformation: generation is
//! a single deterministic traversal with no I/O, and running it twice over
//! the same tree yields byte-identical output.
//!
//! # Usage
//!
//! ```
//! use ketty_codegen::context::GenContext;
//! use ketty_codegen::schema::{FileDescriptor, MethodDescriptor, ServiceDescriptor};
//! use ketty_codegen::targets;
//!
//! let file = FileDescriptor {
//!     package: "demo".into(),
//!     services: vec![ServiceDescriptor {
//!         name: "Echo".into(),
//!         methods: vec![MethodDescriptor {
//!             name: "Say".into(),
//!             input_type: ".demo.EchoRequest".into(),
//!             output_type: ".demo.EchoResponse".into(),
//!             client_streaming: false,
//!             server_streaming: false,
//!         }],
//!     }],
//!     messages: vec![],
//! };
//!
//! let mut ctx = GenContext::new();
//! let code = targets::go::generate_file(&file, &mut ctx);
//! assert!(code.contains("type KettyEchoClient struct"));
//! ```

pub mod code_writer;
pub mod context;
pub mod naming;
pub mod schema;
pub mod targets;

/// Plugin name as registered with the host compiler.
pub const PLUGIN_NAME: &str = "ketty";

/// Version of the generated code contract.
///
/// Incremented whenever an incompatibility between the generated bindings
/// and the ketty runtime package is introduced.
pub const GENERATED_CODE_VERSION: u32 = 4;
