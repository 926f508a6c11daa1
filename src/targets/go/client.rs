//! Service bindings: handle type, client struct, and per-method stubs.
//!
//! For a service `S` this emits:
//!
//! - `SHandleT`, a wrapper over the compiled `grpc.ServiceDesc` the
//!   surrounding generator emits under the `_S_serviceDesc` convention;
//! - a package-level `SHandle` instance;
//! - `KettySClient` plus its constructor, holding a transport-agnostic
//!   `ketty.Client` capability;
//! - one method per RPC, with unary and streaming methods indexed into
//!   their own halves of the dispatch table.

use tracing::trace;

use crate::code_writer::CodeWriter;
use crate::context::GenContext;
use crate::naming;
use crate::schema::{FileDescriptor, MethodDescriptor, ServiceDescriptor};

/// Which half of the dispatch table a method lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    Unary,
    Streaming,
}

/// A method is unary only when neither streaming flag is set.
pub fn classify(method: &MethodDescriptor) -> MethodKind {
    if !method.client_streaming && !method.server_streaming {
        MethodKind::Unary
    } else {
        MethodKind::Streaming
    }
}

/// Dispatch-slot expression for every method, in declaration order.
///
/// Unary and streaming methods are counted independently: each partition is
/// indexed 0..k-1 by declaration order, so a method's index is its position
/// within its own partition, not within the service.
pub fn dispatch_slots(service: &ServiceDescriptor, desc_var: &str) -> Vec<String> {
    let mut method_index = 0usize;
    let mut stream_index = 0usize;
    service
        .methods
        .iter()
        .map(|method| match classify(method) {
            MethodKind::Unary => {
                let expr = format!("&{desc_var}.Methods[{method_index}]");
                method_index += 1;
                expr
            }
            MethodKind::Streaming => {
                let expr = format!("&{desc_var}.Streams[{stream_index}]");
                stream_index += 1;
                expr
            }
        })
        .collect()
}

/// Client-side signature for a method.
///
/// Every method takes a context first. Client-streaming methods drop the
/// request parameter (the stream carries requests); any streaming flag turns
/// the response into the synthesized `{Service}_{Method}Client` stream
/// handle produced by the streaming support layer.
pub fn client_signature(serv_name: &str, method: &MethodDescriptor, ctx: &GenContext) -> String {
    let meth_name = naming::client_method_name(&method.name);
    let req_arg = if method.client_streaming {
        String::new()
    } else {
        format!(", in *{}", ctx.type_name(&method.input_type))
    };
    let resp = if method.server_streaming || method.client_streaming {
        format!("{serv_name}_{}Client", naming::exported(&method.name))
    } else {
        format!("*{}", ctx.type_name(&method.output_type))
    };
    format!(
        "{meth_name}(ctx {}.Context{req_arg}) ({resp}, error)",
        ctx.context_pkg()
    )
}

// Field holding the ketty.Client capability on the generated client struct.
fn client_field() -> String {
    naming::unexport("Client")
}

/// Generate the full binding block for one service.
pub fn generate_service(
    file: &FileDescriptor,
    service: &ServiceDescriptor,
    ctx: &GenContext,
) -> String {
    let serv_name = naming::exported(&service.name);
    let full_serv_name = file.qualified_service_name(service);
    let handle_t = format!("{serv_name}HandleT");
    let desc_var = format!("_{serv_name}_serviceDesc");
    let field = client_field();

    trace!(service = %full_serv_name, methods = service.methods.len(), "generating service bindings");

    let mut out = String::new();
    let mut w = CodeWriter::with_tabs(&mut out);

    w.block(&format!("type {handle_t} struct"), |w| {
        w.writeln("desc *grpc.ServiceDesc")
    })
    .unwrap();
    w.blank_line().unwrap();

    w.block(
        &format!("func (h *{handle_t}) Implement() interface{{}}"),
        |w| w.writeln("return h.desc"),
    )
    .unwrap();
    w.blank_line().unwrap();

    w.block(&format!("func (h *{handle_t}) ServiceName() string"), |w| {
        w.writeln("return h.desc.ServiceName")
    })
    .unwrap();
    w.blank_line().unwrap();

    w.writeln(&format!(
        "var {serv_name}Handle = &{handle_t}{{desc: &{desc_var}}}"
    ))
    .unwrap();
    w.blank_line().unwrap();

    w.block(&format!("type Ketty{serv_name}Client struct"), |w| {
        w.writeln(&format!("{field} {}.Client", ctx.ketty_pkg()))
    })
    .unwrap();
    w.blank_line().unwrap();

    w.block(
        &format!(
            "func NewKetty{serv_name}Client({field} {}.Client) *Ketty{serv_name}Client",
            ctx.ketty_pkg()
        ),
        |w| w.writeln(&format!("return &Ketty{serv_name}Client{{{field}}}")),
    )
    .unwrap();
    w.blank_line().unwrap();

    let slots = dispatch_slots(service, &desc_var);
    for (method, slot) in service.methods.iter().zip(&slots) {
        generate_client_method(&mut w, &serv_name, &full_serv_name, method, slot, ctx);
    }

    out
}

/// Generate one client method stub.
///
/// Unary methods invoke through the package-level handle by exported method
/// name; any client implementation can route the call from the handle's
/// descriptor and the name alone. Streaming methods get a declaration with
/// a placeholder body; the streaming support layer supplies the real one
/// from the slot recorded inside it.
fn generate_client_method(
    w: &mut CodeWriter<&mut String>,
    serv_name: &str,
    full_serv_name: &str,
    method: &MethodDescriptor,
    desc_expr: &str,
    ctx: &GenContext,
) {
    let method_key = naming::exported(&method.name);
    let sig = client_signature(serv_name, method, ctx);
    let field = client_field();

    match classify(method) {
        MethodKind::Unary => {
            let out_type = ctx.type_name(&method.output_type);
            w.block(&format!("func (this *Ketty{serv_name}Client) {sig}"), |w| {
                w.writeln(&format!("out := new({out_type})"))?;
                w.writeln(&format!(
                    "err := this.{field}.Invoke(ctx, {serv_name}Handle, \"{method_key}\", in, out)"
                ))?;
                w.block("if err != nil", |w| w.writeln("return nil, err"))?;
                w.writeln("return out, nil")
            })
            .unwrap();
        }
        MethodKind::Streaming => {
            w.block(&format!("func (this *Ketty{serv_name}Client) {sig}"), |w| {
                w.writeln(&format!(
                    "// {full_serv_name}.{method_key} is provided by the ketty streaming layer through {desc_expr}."
                ))?;
                w.writeln("return nil, nil")
            })
            .unwrap();
        }
    }
    w.blank_line().unwrap();
}
