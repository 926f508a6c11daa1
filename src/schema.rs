//! Descriptor types for one generation pass.
//!
//! These are read-only snapshots of what the host compiler parsed out of a
//! `.proto` file. The crate assumes the tree is well-formed; validation is
//! the parser's job, not ours.

/// Everything the Go target needs from one parsed `.proto` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    /// Proto package name. Empty if the file declares none.
    pub package: String,

    /// Services in declaration order.
    pub services: Vec<ServiceDescriptor>,

    /// Top-level messages in declaration order.
    pub messages: Vec<MessageDescriptor>,
}

impl FileDescriptor {
    /// Package-qualified service name (e.g. `demo.Echo`).
    pub fn qualified_service_name(&self, service: &ServiceDescriptor) -> String {
        if self.package.is_empty() {
            service.name.clone()
        } else {
            format!("{}.{}", self.package, service.name)
        }
    }
}

/// A single service declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDescriptor {
    /// Service name as written in the proto source (e.g. `Echo`).
    pub name: String,

    /// Methods in declaration order.
    pub methods: Vec<MethodDescriptor>,
}

/// A single RPC method declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    /// Method name as written in the proto source (e.g. `Say`).
    pub name: String,

    /// Fully-qualified request type reference (e.g. `.demo.EchoRequest`).
    pub input_type: String,

    /// Fully-qualified response type reference.
    pub output_type: String,

    /// True for client-streaming and bidirectional methods.
    pub client_streaming: bool,

    /// True for server-streaming and bidirectional methods.
    pub server_streaming: bool,
}

/// A message declaration, carrying its custom option set if any was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDescriptor {
    /// Message name (e.g. `EchoRequest`).
    pub name: String,

    /// Custom extension options, `None` when the message declares none.
    pub options: Option<OptionSet>,
}

/// A value stored under a custom extension.
///
/// Open-ended on purpose: the parser may hand us an extension stored under a
/// type we do not expect, and resolution must shrug that off rather than
/// fail (see [`OptionSet::get`]).
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OptionValue {
    Bool(bool),
    Str(String),
    Int(i64),
}

/// Conversion from a stored extension value into a typed field.
///
/// Returns `None` on a type mismatch; there is no error path.
pub trait FromOptionValue: Sized {
    fn from_value(value: &OptionValue) -> Option<Self>;
}

impl FromOptionValue for bool {
    fn from_value(value: &OptionValue) -> Option<Self> {
        match value {
            OptionValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl FromOptionValue for String {
    fn from_value(value: &OptionValue) -> Option<Self> {
        match value {
            OptionValue::Str(s) => Some(s.clone()),
            _ => None,
        }
    }
}

/// Custom extension storage attached to a message.
///
/// Entries keep insertion order. Lookup is by extension field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSet {
    entries: Vec<(String, OptionValue)>,
}

impl OptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy for fixtures.
    pub fn with(mut self, extension: &str, value: OptionValue) -> Self {
        self.entries.push((extension.to_string(), value));
        self
    }

    /// Typed fetch of an extension value.
    ///
    /// `None` both when the extension was never set and when the stored
    /// value is of a different type than `T`. The two cases are deliberately
    /// indistinguishable: callers default either way.
    pub fn get<T: FromOptionValue>(&self, extension: &str) -> Option<T> {
        self.entries
            .iter()
            .find(|(name, _)| name == extension)
            .and_then(|(_, value)| T::from_value(value))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
