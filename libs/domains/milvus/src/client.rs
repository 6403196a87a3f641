use grpc_client::{
    GrpcHandle, Invocation, Operation, create_channel_lazy_with_config, create_channel_with_config,
    invoke, with_limits,
};
use protos::milvus::ops::{self, MilvusService};
use protos::milvus::{
    BoolReply, CollectionInfo, CollectionName, CollectionNameList, CollectionRowCount,
    CollectionSchema, Command, DeleteByIDParam, FlushParam, GetVectorIDsParam, IndexParam,
    InsertParam, PartitionList, PartitionParam, PreloadCollectionParam, ReLoadSegmentsParam,
    SearchByIDParam, SearchInFilesParam, SearchParam, Status, StringReply, TopKQueryResult,
    VectorIds, VectorsData, VectorsIdentity,
};
use tonic::transport::Channel;

use crate::config::{MilvusConfig, MilvusInterceptor};
use crate::error::MilvusResult;

/// Pending reply of one Milvus call
///
/// Resolves with the reply exactly as Milvus sent it, including a failure
/// [`Status`] if Milvus reported one. Rejects with the [`tonic::Status`] of
/// a call that never produced a reply.
pub type Call<T> = Invocation<T, tonic::Status>;

/// Handle type behind [`MilvusClient`]
pub type MilvusHandle = GrpcHandle<MilvusService, MilvusInterceptor>;

/// Client for the Milvus 0.10 gRPC API
///
/// Every method sends its request right away and returns a [`Call`];
/// nothing waits until the call is awaited. Calls made back to back run
/// concurrently and are not ordered: await one before making the next when
/// order matters (create a collection before inserting into it).
///
/// Construction and every method must happen within a Tokio runtime.
///
/// # Example
/// ```ignore
/// use domain_milvus::MilvusClient;
/// use protos::milvus::WithStatus;
///
/// let client = MilvusClient::new("127.0.0.1:19530")?;
/// let reply = client.has_collection("docs").await?;
/// if reply.is_success() && reply.bool_reply {
///     println!("found");
/// }
/// ```
#[derive(Clone, Debug)]
pub struct MilvusClient {
    handle: MilvusHandle,
}

impl MilvusClient {
    /// Client for `address` with default settings; connects on first call
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn new(address: impl Into<String>) -> MilvusResult<Self> {
        Self::from_config(&MilvusConfig::new(address))
    }

    /// Client that connects on first call
    ///
    /// Fails with [`MilvusError::Config`](crate::MilvusError::Config) for
    /// settings [`MilvusConfig::validate`] rejects.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn from_config(config: &MilvusConfig) -> MilvusResult<Self> {
        config.validate()?;
        let channel = create_channel_lazy_with_config(&config.address, config.channel_config())?;
        Ok(Self::from_channel(channel, config))
    }

    /// Connect now, failing if Milvus cannot be reached
    pub async fn connect(config: &MilvusConfig) -> MilvusResult<Self> {
        config.validate()?;
        let channel = create_channel_with_config(&config.address, config.channel_config()).await?;
        tracing::info!(address = %config.address, "Connected to Milvus");
        Ok(Self::from_channel(channel, config))
    }

    /// Client over an existing channel
    ///
    /// Only the interceptor and message limits of `config` are used.
    pub fn from_channel(channel: Channel, config: &MilvusConfig) -> Self {
        let handle = GrpcHandle::with_interceptor(channel, config.interceptor());
        Self {
            handle: with_limits(handle, config.max_message_size, config.max_message_size),
        }
    }

    pub fn handle(&self) -> &MilvusHandle {
        &self.handle
    }

    /// Invoke any operation from the table by its marker type
    ///
    /// ```ignore
    /// use protos::milvus::ops::HasCollection;
    ///
    /// let reply = client.call::<HasCollection>("docs".into()).await?;
    /// ```
    pub fn call<Op>(&self, request: Op::Request) -> Call<Op::Response>
    where
        Op: Operation<Service = MilvusService>,
    {
        invoke::<Op, _>(&self.handle, request)
    }

    // Collections

    pub fn create_collection(&self, schema: CollectionSchema) -> Call<Status> {
        self.call::<ops::CreateCollection>(schema)
    }

    pub fn has_collection(&self, name: impl Into<CollectionName>) -> Call<BoolReply> {
        self.call::<ops::HasCollection>(name.into())
    }

    pub fn describe_collection(&self, name: impl Into<CollectionName>) -> Call<CollectionSchema> {
        self.call::<ops::DescribeCollection>(name.into())
    }

    pub fn count_collection(&self, name: impl Into<CollectionName>) -> Call<CollectionRowCount> {
        self.call::<ops::CountCollection>(name.into())
    }

    pub fn show_collections(&self) -> Call<CollectionNameList> {
        self.call::<ops::ShowCollections>(Command::default())
    }

    /// Segment and row statistics, as JSON in `CollectionInfo::json_info`
    pub fn show_collection_info(&self, name: impl Into<CollectionName>) -> Call<CollectionInfo> {
        self.call::<ops::ShowCollectionInfo>(name.into())
    }

    pub fn drop_collection(&self, name: impl Into<CollectionName>) -> Call<Status> {
        self.call::<ops::DropCollection>(name.into())
    }

    /// Load a collection into memory, optionally only some partitions
    pub fn preload_collection(&self, param: impl Into<PreloadCollectionParam>) -> Call<Status> {
        self.call::<ops::PreloadCollection>(param.into())
    }

    // Indexes

    pub fn create_index(&self, param: IndexParam) -> Call<Status> {
        self.call::<ops::CreateIndex>(param)
    }

    pub fn describe_index(&self, name: impl Into<CollectionName>) -> Call<IndexParam> {
        self.call::<ops::DescribeIndex>(name.into())
    }

    pub fn drop_index(&self, name: impl Into<CollectionName>) -> Call<Status> {
        self.call::<ops::DropIndex>(name.into())
    }

    // Partitions

    pub fn create_partition(&self, param: PartitionParam) -> Call<Status> {
        self.call::<ops::CreatePartition>(param)
    }

    pub fn has_partition(&self, param: PartitionParam) -> Call<BoolReply> {
        self.call::<ops::HasPartition>(param)
    }

    pub fn show_partitions(&self, name: impl Into<CollectionName>) -> Call<PartitionList> {
        self.call::<ops::ShowPartitions>(name.into())
    }

    pub fn drop_partition(&self, param: PartitionParam) -> Call<Status> {
        self.call::<ops::DropPartition>(param)
    }

    // Vectors

    /// Insert vectors; the reply lists the ids they were stored under
    pub fn insert(&self, param: InsertParam) -> Call<VectorIds> {
        self.call::<ops::Insert>(param)
    }

    pub fn get_vectors_by_id(&self, identity: VectorsIdentity) -> Call<VectorsData> {
        self.call::<ops::GetVectorsByID>(identity)
    }

    /// Ids stored in one segment
    pub fn get_vector_ids(&self, param: GetVectorIDsParam) -> Call<VectorIds> {
        self.call::<ops::GetVectorIDs>(param)
    }

    pub fn delete_by_ids(&self, param: DeleteByIDParam) -> Call<Status> {
        self.call::<ops::DeleteByID>(param)
    }

    // Search

    pub fn search(&self, param: SearchParam) -> Call<TopKQueryResult> {
        self.call::<ops::Search>(param)
    }

    pub fn search_by_id(&self, param: SearchByIDParam) -> Call<TopKQueryResult> {
        self.call::<ops::SearchByID>(param)
    }

    pub fn search_in_files(&self, param: SearchInFilesParam) -> Call<TopKQueryResult> {
        self.call::<ops::SearchInFiles>(param)
    }

    // Maintenance

    pub fn reload_segments(&self, param: ReLoadSegmentsParam) -> Call<Status> {
        self.call::<ops::ReloadSegments>(param)
    }

    pub fn flush(&self, param: FlushParam) -> Call<Status> {
        self.call::<ops::Flush>(param)
    }

    pub fn compact(&self, name: impl Into<CollectionName>) -> Call<Status> {
        self.call::<ops::Compact>(name.into())
    }

    // Server commands

    /// Run a server command such as `version`, `status` or `mode`
    pub fn cmd(&self, command: impl Into<Command>) -> Call<StringReply> {
        self.call::<ops::Cmd>(command.into())
    }

    /// Server version string; also the cheapest liveness check
    pub fn server_version(&self) -> Call<StringReply> {
        self.cmd("version")
    }

    pub fn server_status(&self) -> Call<StringReply> {
        self.cmd("status")
    }
}
