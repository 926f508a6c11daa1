//! Per-pass generation state.
//!
//! One [`GenContext`] is built per generation pass and threaded explicitly
//! through every component. There is no package-level state anywhere, so
//! generating several files in the same process (tests included) cannot
//! bleed aliases from one pass into the next.

use std::collections::HashSet;

/// Resolution of proto type references to Go type names.
///
/// Cross-file resolution (imports, nested types, remapped Go packages) is an
/// external collaborator's job; this seam is how its answers reach us.
pub trait TypeResolver {
    /// Go type name for a fully-qualified proto reference
    /// (e.g. `.demo.EchoRequest`).
    fn type_name(&self, fq: &str) -> String;
}

/// Resolver that keeps the last path segment of the reference.
///
/// Sufficient for single-file generation, where every referenced type lives
/// in the generated package itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseNameResolver;

impl TypeResolver for BaseNameResolver {
    fn type_name(&self, fq: &str) -> String {
        fq.rsplit('.').next().unwrap_or(fq).to_string()
    }
}

/// State for one generation pass: import aliases and the type-name seam.
pub struct GenContext {
    resolver: Box<dyn TypeResolver>,
    import_prefix: String,
    taken_aliases: HashSet<String>,
    context_pkg: String,
    ketty_pkg: String,
}

impl GenContext {
    pub fn new() -> Self {
        Self::with_resolver(Box::new(BaseNameResolver))
    }

    pub fn with_resolver(resolver: Box<dyn TypeResolver>) -> Self {
        let mut ctx = Self {
            resolver,
            import_prefix: String::new(),
            taken_aliases: HashSet::new(),
            context_pkg: "context".to_string(),
            ketty_pkg: String::new(),
        };
        // The context import keeps its canonical name; nothing may shadow it.
        ctx.taken_aliases.insert(ctx.context_pkg.clone());
        ctx.ketty_pkg = ctx.unique_package_name("ketty");
        ctx
    }

    /// Prefix prepended to the ketty runtime import path.
    pub fn set_import_prefix(&mut self, prefix: &str) {
        self.import_prefix = prefix.trim_end_matches('/').to_string();
    }

    pub fn import_prefix(&self) -> &str {
        &self.import_prefix
    }

    /// Claim a package alias, appending a counter on collision.
    ///
    /// Each returned alias is recorded and never handed out again within
    /// this pass.
    pub fn unique_package_name(&mut self, base: &str) -> String {
        let mut candidate = base.to_string();
        let mut n = 1usize;
        while self.taken_aliases.contains(&candidate) {
            candidate = format!("{base}{n}");
            n += 1;
        }
        self.taken_aliases.insert(candidate.clone());
        candidate
    }

    /// Alias the generated code uses for the `context` package.
    pub fn context_pkg(&self) -> &str {
        &self.context_pkg
    }

    /// Alias the generated code uses for the ketty runtime package.
    pub fn ketty_pkg(&self) -> &str {
        &self.ketty_pkg
    }

    /// Resolve a proto type reference through the configured resolver.
    pub fn type_name(&self, fq: &str) -> String {
        self.resolver.type_name(fq)
    }
}

impl Default for GenContext {
    fn default() -> Self {
        Self::new()
    }
}
