//! Go target: ketty client bindings and option methods.
//!
//! The host driver calls [`generate_file`] once per file and splices the
//! result into the output it is already building for that file, alongside
//! the compiled service descriptors the bindings reference. Formatting is
//! the downstream formatter's concern; we only promise deterministic text.

use tracing::debug;

use crate::context::GenContext;
use crate::schema::FileDescriptor;

pub mod client;
pub mod options;

/// Import path of the ketty runtime package, before any import prefix.
pub const KETTY_PKG_PATH: &str = "github.com/yyzybb537/ketty";

/// Generate all ketty bindings for one file.
///
/// Files that declare no service produce no output at all, option-carrying
/// messages included: the host only links our output into files it emits
/// service code for.
pub fn generate_file(file: &FileDescriptor, ctx: &mut GenContext) -> String {
    if file.services.is_empty() {
        return String::new();
    }
    debug!(
        package = %file.package,
        services = file.services.len(),
        "generating ketty bindings"
    );

    let mut out = String::new();

    out.push_str("// Reference imports to suppress errors if they are not otherwise used.\n");
    out.push_str(&format!("var _ {}.Dummy\n\n", ctx.ketty_pkg()));
    out.push_str("// This is a compile-time assertion to ensure that this generated file\n");
    out.push_str("// is compatible with the ketty package it is being compiled against.\n\n");

    for service in &file.services {
        out.push_str(&client::generate_service(file, service, ctx));
    }

    for message in &file.messages {
        // Messages without an option set are skipped outright.
        if message.options.is_none() {
            continue;
        }
        let opts = options::resolve(message);
        out.push_str(&options::generate_option_methods(message, &opts));
    }

    out
}

/// Generate the import block for one file.
///
/// Mirrors [`generate_file`]: nothing is imported for service-less files.
pub fn generate_imports(file: &FileDescriptor, ctx: &GenContext) -> String {
    if file.services.is_empty() {
        return String::new();
    }
    let path = if ctx.import_prefix().is_empty() {
        KETTY_PKG_PATH.to_string()
    } else {
        format!("{}/{}", ctx.import_prefix(), KETTY_PKG_PATH)
    };
    format!("import (\n\t{} \"{}\"\n)\n\n", ctx.ketty_pkg(), path)
}
