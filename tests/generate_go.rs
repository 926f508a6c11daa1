//! End-to-end generation over fixture descriptor trees.

use ketty_codegen::context::GenContext;
use ketty_codegen::schema::{
    FileDescriptor, MessageDescriptor, MethodDescriptor, OptionSet, OptionValue,
    ServiceDescriptor,
};
use ketty_codegen::targets::go;

fn unary(name: &str, input: &str, output: &str) -> MethodDescriptor {
    MethodDescriptor {
        name: name.into(),
        input_type: input.into(),
        output_type: output.into(),
        client_streaming: false,
        server_streaming: false,
    }
}

fn echo_file() -> FileDescriptor {
    FileDescriptor {
        package: "demo".into(),
        services: vec![ServiceDescriptor {
            name: "Echo".into(),
            methods: vec![unary("Say", ".demo.EchoRequest", ".demo.EchoResponse")],
        }],
        messages: vec![
            MessageDescriptor {
                name: "EchoRequest".into(),
                options: None,
            },
            MessageDescriptor {
                name: "EchoResponse".into(),
                options: Some(
                    OptionSet::new().with(go::options::TRANSPORT, OptionValue::Str("http".into())),
                ),
            },
        ],
    }
}

#[test]
fn echo_service_end_to_end() {
    let file = echo_file();
    let mut ctx = GenContext::new();
    let out = go::generate_file(&file, &mut ctx);

    // Print for inspection
    println!("{}", out);

    // Handle type and instance
    assert!(out.contains("type EchoHandleT struct {"));
    assert!(out.contains("func (h *EchoHandleT) Implement() interface{} {"));
    assert!(out.contains("func (h *EchoHandleT) ServiceName() string {"));
    assert!(out.contains("var EchoHandle = &EchoHandleT{desc: &_Echo_serviceDesc}"));

    // Client type and constructor
    assert!(out.contains("type KettyEchoClient struct {"));
    assert!(out.contains("client ketty.Client"));
    assert!(out.contains("func NewKettyEchoClient(client ketty.Client) *KettyEchoClient {"));

    // Unary method: signature, handle-routed invoke, error propagation
    assert!(out.contains(
        "func (this *KettyEchoClient) Say(ctx context.Context, in *EchoRequest) (*EchoResponse, error) {"
    ));
    assert!(out.contains("out := new(EchoResponse)"));
    assert!(out.contains("err := this.client.Invoke(ctx, EchoHandle, \"Say\", in, out)"));
    assert!(out.contains("return nil, err"));
    assert!(out.contains("return out, nil"));

    // Option methods for the annotated message only
    assert!(out.contains("func (*EchoResponse) KettyTransport() string {"));
    assert!(!out.contains("EchoRequest) Ketty"));
}

#[test]
fn generation_is_idempotent() {
    let file = echo_file();
    let first = go::generate_file(&file, &mut GenContext::new());
    let second = go::generate_file(&file, &mut GenContext::new());
    assert_eq!(first, second);
}

#[test]
fn mixed_service_partitions_dispatch_slots() {
    let file = FileDescriptor {
        package: "demo".into(),
        services: vec![ServiceDescriptor {
            name: "Feed".into(),
            methods: vec![
                unary("Get", ".demo.Req", ".demo.Resp"),
                MethodDescriptor {
                    name: "Watch".into(),
                    input_type: ".demo.Req".into(),
                    output_type: ".demo.Resp".into(),
                    client_streaming: false,
                    server_streaming: true,
                },
                unary("Put", ".demo.Req", ".demo.Resp"),
                MethodDescriptor {
                    name: "Push".into(),
                    input_type: ".demo.Req".into(),
                    output_type: ".demo.Resp".into(),
                    client_streaming: true,
                    server_streaming: false,
                },
            ],
        }],
        messages: vec![],
    };
    let out = go::generate_file(&file, &mut GenContext::new());

    // Streaming methods record their slot; both land in the Streams
    // partition with independent indices.
    assert!(out.contains("&_Feed_serviceDesc.Streams[0]"));
    assert!(out.contains("&_Feed_serviceDesc.Streams[1]"));

    // Streaming methods are still real method declarations. Server-streaming
    // keeps the request parameter, client-streaming drops it, and both
    // return the synthesized stream handle type.
    assert!(out.contains(
        "func (this *KettyFeedClient) Watch(ctx context.Context, in *Req) (Feed_WatchClient, error) {"
    ));
    assert!(out.contains(
        "func (this *KettyFeedClient) Push(ctx context.Context) (Feed_PushClient, error) {"
    ));

    // Unary methods still get plain bodies.
    assert!(out.contains("func (this *KettyFeedClient) Get(ctx context.Context, in *Req) (*Resp, error) {"));
    assert!(out.contains("func (this *KettyFeedClient) Put(ctx context.Context, in *Req) (*Resp, error) {"));
}

#[test]
fn annotated_messages_emit_in_fixed_order() {
    let file = FileDescriptor {
        package: "demo".into(),
        services: vec![ServiceDescriptor {
            name: "Echo".into(),
            methods: vec![unary("Say", ".demo.Req", ".demo.Resp")],
        }],
        messages: vec![MessageDescriptor {
            name: "Frame".into(),
            options: Some(
                OptionSet::new()
                    .with(go::options::MARSHAL, OptionValue::Str("pb".into()))
                    .with(go::options::USE_KETTY_HTTP_EXTEND, OptionValue::Bool(true))
                    .with(go::options::TRANSPORT, OptionValue::Str("http".into())),
            ),
        }],
    };
    let out = go::generate_file(&file, &mut GenContext::new());

    let marker = out.find("func (*Frame) KettyHttpExtendMessage() {}").unwrap();
    let marshal = out.find("func (*Frame) KettyMarshal() string {").unwrap();
    let transport = out.find("func (*Frame) KettyTransport() string {").unwrap();
    assert!(marker < marshal && marshal < transport);
    assert!(out.contains("\treturn \"pb\""));
    assert!(out.contains("\treturn \"http\""));
}

#[test]
fn empty_package_uses_bare_service_name() {
    let file = FileDescriptor {
        package: String::new(),
        services: vec![ServiceDescriptor {
            name: "Echo".into(),
            methods: vec![MethodDescriptor {
                name: "Watch".into(),
                input_type: ".Req".into(),
                output_type: ".Resp".into(),
                client_streaming: false,
                server_streaming: true,
            }],
        }],
        messages: vec![],
    };
    let out = go::generate_file(&file, &mut GenContext::new());
    // The streaming slot comment carries the full service name, which is
    // just the bare name without a package.
    assert!(out.contains("// Echo.Watch is provided by the ketty streaming layer"));
}
