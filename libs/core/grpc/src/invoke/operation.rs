/// A gRPC service, identified by its fully qualified protobuf name
///
/// Implemented by zero-sized marker types. A handle is bound to exactly one
/// service, and only that service's operations can be dispatched on it.
pub trait Service: 'static {
    /// Fully qualified service name, e.g. `milvus.grpc.MilvusService`
    const NAME: &'static str;
}

/// One unary remote operation with a fixed request and response shape
///
/// This is the typed replacement for looking an operation up by name: the
/// marker type carries the wire path alongside the message types, so a call
/// site that compiles always sends the right payload to the right method.
///
/// Use [`operations!`](crate::operations) to declare a whole table at once.
pub trait Operation: 'static {
    /// Service this operation belongs to
    type Service: Service;

    /// Payload sent to the remote side
    type Request: prost::Message + Send + 'static;

    /// Value the remote side replies with
    type Response: prost::Message + Default + Send + 'static;

    /// Method name as declared in the service definition, e.g. `CreateCollection`
    const NAME: &'static str;

    /// HTTP/2 path, `/<service>/<method>`
    const PATH: &'static str;
}

/// Declare a service marker and its operation table
///
/// Every entry becomes a unit struct implementing [`Operation`]. The
/// generated `OPERATIONS` constant lists the method names in declaration
/// order.
///
/// # Example
/// ```ignore
/// grpc_client::operations! {
///     /// Milvus vector database
///     service MilvusService = "milvus.grpc.MilvusService";
///
///     /// Create a collection
///     CreateCollection(CollectionSchema) -> Status;
///     HasCollection(CollectionName) -> BoolReply;
/// }
///
/// assert_eq!(CreateCollection::PATH, "/milvus.grpc.MilvusService/CreateCollection");
/// ```
#[macro_export]
macro_rules! operations {
    (
        $(#[$service_meta:meta])*
        service $service:ident = $service_name:literal;
        $(
            $(#[$meta:meta])*
            $op:ident($request:ty) -> $response:ty;
        )+
    ) => {
        $(#[$service_meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $service;

        impl $crate::invoke::Service for $service {
            const NAME: &'static str = $service_name;
        }

        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            pub struct $op;

            impl $crate::invoke::Operation for $op {
                type Service = $service;
                type Request = $request;
                type Response = $response;
                const NAME: &'static str = stringify!($op);
                const PATH: &'static str = concat!("/", $service_name, "/", stringify!($op));
            }
        )+

        /// Method names of every declared operation, in declaration order
        #[allow(dead_code)]
        pub const OPERATIONS: &[&str] = &[$(stringify!($op)),+];
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct Ping {
        #[prost(string, tag = "1")]
        pub payload: String,
    }

    mod table {
        use super::Ping;

        crate::operations! {
            service Echo = "test.v1.Echo";
            Say(Ping) -> Ping;
            Shout(Ping) -> Ping;
        }
    }

    #[test]
    fn test_paths_follow_service_and_method() {
        assert_eq!(table::Say::PATH, "/test.v1.Echo/Say");
        assert_eq!(table::Shout::PATH, "/test.v1.Echo/Shout");
        assert_eq!(table::Say::NAME, "Say");
        assert_eq!(<table::Echo as Service>::NAME, "test.v1.Echo");
    }

    #[test]
    fn test_operation_list_keeps_declaration_order() {
        assert_eq!(table::OPERATIONS, &["Say", "Shout"]);
    }
}
