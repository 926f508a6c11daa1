//! Ketty's custom message options and the methods they synthesize.
//!
//! Three independently-optional extensions may be set on a message:
//! a bool marking it for the HTTP extend surface, and two strings naming a
//! transport and a marshal scheme. Each resolved field emits one method on
//! the message type; unset fields emit nothing.

use crate::naming;
use crate::schema::{MessageDescriptor, OptionSet};

/// Extension field marking a message for the HTTP extend surface.
pub const USE_KETTY_HTTP_EXTEND: &str = "use_ketty_http_extend";

/// Extension field naming the transport for a message.
pub const TRANSPORT: &str = "transport";

/// Extension field naming the marshal scheme for a message.
pub const MARSHAL: &str = "marshal";

/// Resolved ketty options for one message.
///
/// Fields default independently: an unset extension, or one stored under an
/// unexpected type, leaves only its own field at the zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KettyOptions {
    pub use_http_extend: bool,
    pub transport: String,
    pub marshal: String,
}

/// Resolve a message's ketty options. Total: never fails, whatever the
/// option set holds.
pub fn resolve(message: &MessageDescriptor) -> KettyOptions {
    match &message.options {
        Some(options) => resolve_set(options),
        None => KettyOptions::default(),
    }
}

fn resolve_set(options: &OptionSet) -> KettyOptions {
    KettyOptions {
        use_http_extend: options.get::<bool>(USE_KETTY_HTTP_EXTEND).unwrap_or_default(),
        transport: options.get::<String>(TRANSPORT).unwrap_or_default(),
        marshal: options.get::<String>(MARSHAL).unwrap_or_default(),
    }
}

/// Emit the marker and accessor methods for one message.
///
/// Emission order is a fixed contract: http-extend marker, then marshal
/// accessor, then transport accessor.
pub fn generate_option_methods(message: &MessageDescriptor, opts: &KettyOptions) -> String {
    let mut out = String::new();
    let msg_name = naming::exported(&message.name);

    if opts.use_http_extend {
        out.push_str(&format!("func (*{msg_name}) KettyHttpExtendMessage() {{}}\n\n"));
    }

    if !opts.marshal.is_empty() {
        out.push_str(&format!("func (*{msg_name}) KettyMarshal() string {{\n"));
        out.push_str(&format!("\treturn \"{}\"\n", opts.marshal));
        out.push_str("}\n\n");
    }

    if !opts.transport.is_empty() {
        out.push_str(&format!("func (*{msg_name}) KettyTransport() string {{\n"));
        out.push_str(&format!("\treturn \"{}\"\n", opts.transport));
        out.push_str("}\n\n");
    }

    out
}
