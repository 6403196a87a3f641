//! In-memory Milvus
//!
//! `FakeMilvus` implements the generated `MilvusService` server trait over
//! plain maps. It follows the Milvus 0.10 reply conventions closely enough
//! for client tests: failures come back as a reply carrying an error status,
//! never as a gRPC error, unless one was injected with
//! [`FakeMilvus::fail_next`].
//!
//! Every request is recorded (payload and correlation headers) so tests can
//! check what reached the server and how often.

use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use grpc_client::MetadataExtractor;
use prost::Message;
use protos::milvus::milvus_service_server::MilvusService;
use protos::milvus::{
    BoolReply, CollectionInfo, CollectionName, CollectionNameList, CollectionRowCount,
    CollectionSchema, Command, DeleteByIDParam, ErrorCode, FlushParam, GetVectorIDsParam,
    IndexParam, IndexType, InsertParam, MetricType, PartitionList, PartitionParam,
    PreloadCollectionParam, ReLoadSegmentsParam, RowRecord, SearchByIDParam, SearchInFilesParam,
    SearchParam, Status, StringReply, TopKQueryResult, VectorIds, VectorsData, VectorsIdentity,
};
use tonic::{Request, Response};

/// Version string `Cmd("version")` answers with
pub const FAKE_VERSION: &str = "0.10.6";

/// Partition every collection starts with
pub const DEFAULT_PARTITION: &str = "_default";

const MAX_DIMENSION: i64 = 32768;
const MAX_TOPK: i64 = 16384;

type GrpcResult<T> = Result<Response<T>, tonic::Status>;

/// One request as the server saw it
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub operation: &'static str,
    pub payload: Vec<u8>,
    pub request_id: Option<String>,
    pub trace_id: Option<String>,
    pub authorization: Option<String>,
    pub client_name: Option<String>,
}

#[derive(Debug, Clone)]
struct StoredVector {
    record: RowRecord,
    partition: String,
}

#[derive(Debug, Clone)]
struct Collection {
    schema: CollectionSchema,
    partitions: BTreeSet<String>,
    vectors: BTreeMap<i64, StoredVector>,
    index: Option<IndexParam>,
    next_id: i64,
}

impl Collection {
    fn new(schema: CollectionSchema) -> Self {
        Self {
            schema,
            partitions: BTreeSet::from([DEFAULT_PARTITION.to_string()]),
            vectors: BTreeMap::new(),
            index: None,
            next_id: 1,
        }
    }

    fn dimension(&self) -> usize {
        usize::try_from(self.schema.dimension).unwrap_or(0)
    }

    fn rows_in(&self, partition: &str) -> usize {
        self.vectors.values().filter(|v| v.partition == partition).count()
    }
}

#[derive(Debug, Default)]
struct State {
    collections: BTreeMap<String, Collection>,
    calls: Vec<RecordedCall>,
    injected: HashMap<&'static str, VecDeque<tonic::Status>>,
}

/// In-memory stand-in for a Milvus server
///
/// Clones share state, so keep one clone in the test and hand another to
/// [`TestServer`](crate::TestServer).
#[derive(Debug, Clone, Default)]
pub struct FakeMilvus {
    state: Arc<Mutex<State>>,
}

fn ok() -> Option<Status> {
    Some(Status::success())
}

fn missing(name: &str) -> Status {
    Status::error(
        ErrorCode::CollectionNotExists,
        format!("Collection {name} does not exist"),
    )
}

impl FakeMilvus {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record the request and hand back its payload, or an injected failure
    fn begin<M: Message>(&self, operation: &'static str, request: Request<M>) -> Result<M, tonic::Status> {
        let headers = MetadataExtractor::new(request.metadata());
        let call = RecordedCall {
            operation,
            payload: request.get_ref().encode_to_vec(),
            request_id: headers.request_id().map(str::to_string),
            trace_id: headers.trace_id().map(str::to_string),
            authorization: headers.authorization().map(str::to_string),
            client_name: headers.client_name().map(str::to_string),
        };
        tracing::debug!(operation, request_id = ?call.request_id, "fake milvus received call");

        let mut state = self.lock();
        state.calls.push(call);
        if let Some(status) = state.injected.get_mut(operation).and_then(VecDeque::pop_front) {
            return Err(status);
        }
        Ok(request.into_inner())
    }

    /// Make the next call to `operation` fail with `status` at the gRPC level
    ///
    /// Queued failures are used up in order, one per call.
    pub fn fail_next(&self, operation: &'static str, status: tonic::Status) {
        self.lock()
            .injected
            .entry(operation)
            .or_default()
            .push_back(status);
    }

    /// Number of calls made to `operation`
    pub fn calls(&self, operation: &str) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|c| c.operation == operation)
            .count()
    }

    /// Total number of calls across all operations
    pub fn total_calls(&self) -> usize {
        self.lock().calls.len()
    }

    /// Calls made to `operation`, oldest first
    pub fn recorded(&self, operation: &str) -> Vec<RecordedCall> {
        self.lock()
            .calls
            .iter()
            .filter(|c| c.operation == operation)
            .cloned()
            .collect()
    }

    /// Decoded payloads of the calls made to `operation`, oldest first
    ///
    /// # Panics
    ///
    /// Panics if a payload does not decode as `M`.
    pub fn requests<M: Message + Default>(&self, operation: &str) -> Vec<M> {
        self.recorded(operation)
            .iter()
            .map(|c| M::decode(c.payload.as_slice()).expect("recorded payload decodes"))
            .collect()
    }

    /// Collection names currently stored
    pub fn collection_names(&self) -> Vec<String> {
        self.lock().collections.keys().cloned().collect()
    }

    fn with_collection<T>(
        &self,
        name: &str,
        f: impl FnOnce(&mut Collection) -> T,
    ) -> Result<T, Status> {
        let mut state = self.lock();
        state
            .collections
            .get_mut(name)
            .map(f)
            .ok_or_else(|| missing(name))
    }

    fn status_of(result: Result<Status, Status>) -> GrpcResult<Status> {
        Ok(Response::new(result.unwrap_or_else(|status| status)))
    }
}

fn validate_schema(schema: &CollectionSchema) -> Result<(), Status> {
    let name = &schema.collection_name;
    let valid_name = name
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        && name.len() <= 255;
    if !valid_name {
        return Err(Status::error(
            ErrorCode::IllegalCollectionName,
            format!("Invalid collection name: {name:?}"),
        ));
    }
    if schema.dimension <= 0 || schema.dimension > MAX_DIMENSION {
        return Err(Status::error(
            ErrorCode::IllegalDimension,
            format!("Invalid dimension: {}", schema.dimension),
        ));
    }
    if MetricType::try_from(schema.metric_type).is_err() {
        return Err(Status::error(
            ErrorCode::IllegalMetricType,
            format!("Invalid metric type: {}", schema.metric_type),
        ));
    }
    Ok(())
}

fn validate_record(record: &RowRecord, dimension: usize) -> Result<(), Status> {
    if record.float_data.len() != dimension {
        return Err(Status::error(
            ErrorCode::IllegalRowrecord,
            format!(
                "Vector dimension {} does not match collection dimension {dimension}",
                record.float_data.len()
            ),
        ));
    }
    Ok(())
}

fn distance(metric: MetricType, a: &[f32], b: &[f32]) -> f32 {
    match metric {
        MetricType::Ip => a.iter().zip(b).map(|(x, y)| x * y).sum(),
        _ => a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum(),
    }
}

/// Brute-force top-k over `collection`, padded like Milvus with id -1
fn brute_force(
    collection: &Collection,
    partitions: &[String],
    queries: &[RowRecord],
    topk: i64,
) -> Result<TopKQueryResult, Status> {
    if topk <= 0 || topk > MAX_TOPK {
        return Err(Status::error(ErrorCode::IllegalTopk, format!("Invalid topk: {topk}")));
    }
    let metric = match collection.schema.metric() {
        Some(metric @ (MetricType::L2 | MetricType::Ip)) => metric,
        _ => {
            return Err(Status::error(
                ErrorCode::IllegalMetricType,
                format!("Metric type {} is not searchable here", collection.schema.metric_type),
            ));
        }
    };
    for partition in partitions {
        if !collection.partitions.contains(partition) {
            return Err(Status::error(
                ErrorCode::IllegalArgument,
                format!("Partition {partition} does not exist"),
            ));
        }
    }

    let dimension = collection.dimension();
    let k = usize::try_from(topk).unwrap_or(0);
    let padding = if metric == MetricType::Ip { f32::MIN } else { f32::MAX };
    let mut ids = Vec::with_capacity(queries.len() * k);
    let mut distances = Vec::with_capacity(queries.len() * k);

    for query in queries {
        validate_record(query, dimension)?;
        let mut scored: Vec<(i64, f32)> = collection
            .vectors
            .iter()
            .filter(|(_, v)| partitions.is_empty() || partitions.contains(&v.partition))
            .map(|(id, v)| (*id, distance(metric, &query.float_data, &v.record.float_data)))
            .collect();
        if metric == MetricType::Ip {
            scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        } else {
            scored.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
        }
        scored.resize(k, (-1, padding));
        for (id, d) in scored {
            ids.push(id);
            distances.push(d);
        }
    }

    Ok(TopKQueryResult {
        status: ok(),
        row_num: queries.len() as i64,
        ids,
        distances,
    })
}

fn search_reply(result: Result<Result<TopKQueryResult, Status>, Status>) -> GrpcResult<TopKQueryResult> {
    let reply = match result.and_then(|inner| inner) {
        Ok(reply) => reply,
        Err(status) => TopKQueryResult {
            status: Some(status),
            ..Default::default()
        },
    };
    Ok(Response::new(reply))
}

#[tonic::async_trait]
impl MilvusService for FakeMilvus {
    async fn create_collection(&self, request: Request<CollectionSchema>) -> GrpcResult<Status> {
        let schema = self.begin("CreateCollection", request)?;
        if let Err(status) = validate_schema(&schema) {
            return Ok(Response::new(status));
        }
        let mut state = self.lock();
        if state.collections.contains_key(&schema.collection_name) {
            return Ok(Response::new(Status::error(
                ErrorCode::IllegalCollectionName,
                format!("Collection {} already exists", schema.collection_name),
            )));
        }
        let name = schema.collection_name.clone();
        let stored = CollectionSchema {
            status: None,
            index_file_size: if schema.index_file_size > 0 { schema.index_file_size } else { 1024 },
            ..schema
        };
        state.collections.insert(name, Collection::new(stored));
        Ok(Response::new(Status::success()))
    }

    async fn has_collection(&self, request: Request<CollectionName>) -> GrpcResult<BoolReply> {
        let name = self.begin("HasCollection", request)?;
        let exists = self.lock().collections.contains_key(&name.collection_name);
        Ok(Response::new(BoolReply {
            status: ok(),
            bool_reply: exists,
        }))
    }

    async fn describe_collection(&self, request: Request<CollectionName>) -> GrpcResult<CollectionSchema> {
        let name = self.begin("DescribeCollection", request)?;
        let reply = match self.with_collection(&name.collection_name, |c| c.schema.clone()) {
            Ok(schema) => CollectionSchema { status: ok(), ..schema },
            Err(status) => CollectionSchema {
                status: Some(status),
                ..Default::default()
            },
        };
        Ok(Response::new(reply))
    }

    async fn count_collection(&self, request: Request<CollectionName>) -> GrpcResult<CollectionRowCount> {
        let name = self.begin("CountCollection", request)?;
        let reply = match self.with_collection(&name.collection_name, |c| c.vectors.len()) {
            Ok(rows) => CollectionRowCount {
                status: ok(),
                collection_row_count: rows as i64,
            },
            Err(status) => CollectionRowCount {
                status: Some(status),
                collection_row_count: 0,
            },
        };
        Ok(Response::new(reply))
    }

    async fn show_collections(&self, request: Request<Command>) -> GrpcResult<CollectionNameList> {
        self.begin("ShowCollections", request)?;
        Ok(Response::new(CollectionNameList {
            status: ok(),
            collection_names: self.collection_names(),
        }))
    }

    async fn show_collection_info(&self, request: Request<CollectionName>) -> GrpcResult<CollectionInfo> {
        let name = self.begin("ShowCollectionInfo", request)?;
        let info = self.with_collection(&name.collection_name, |c| {
            let partitions: Vec<serde_json::Value> = c
                .partitions
                .iter()
                .map(|tag| serde_json::json!({ "tag": tag, "row_count": c.rows_in(tag), "segments": [] }))
                .collect();
            serde_json::json!({ "row_count": c.vectors.len(), "partitions": partitions })
        });
        let reply = match info {
            Ok(json) => CollectionInfo {
                status: ok(),
                json_info: json.to_string(),
            },
            Err(status) => CollectionInfo {
                status: Some(status),
                json_info: String::new(),
            },
        };
        Ok(Response::new(reply))
    }

    async fn drop_collection(&self, request: Request<CollectionName>) -> GrpcResult<Status> {
        let name = self.begin("DropCollection", request)?;
        let removed = self.lock().collections.remove(&name.collection_name);
        Self::status_of(match removed {
            Some(_) => Ok(Status::success()),
            None => Err(missing(&name.collection_name)),
        })
    }

    async fn create_index(&self, request: Request<IndexParam>) -> GrpcResult<Status> {
        let param = self.begin("CreateIndex", request)?;
        match IndexType::try_from(param.index_type) {
            Ok(IndexType::Invalid) | Err(_) => {
                return Ok(Response::new(Status::error(
                    ErrorCode::IllegalIndexType,
                    format!("Invalid index type: {}", param.index_type),
                )));
            }
            Ok(_) => {}
        }
        let name = param.collection_name.clone();
        Self::status_of(self.with_collection(&name, |c| {
            c.index = Some(IndexParam { status: None, ..param });
            Status::success()
        }))
    }

    async fn describe_index(&self, request: Request<CollectionName>) -> GrpcResult<IndexParam> {
        let name = self.begin("DescribeIndex", request)?;
        let reply = match self.with_collection(&name.collection_name, |c| c.index.clone()) {
            Ok(Some(index)) => IndexParam { status: ok(), ..index },
            Ok(None) => IndexParam {
                status: ok(),
                collection_name: name.collection_name,
                index_type: IndexType::Flat.into(),
                extra_params: Vec::new(),
            },
            Err(status) => IndexParam {
                status: Some(status),
                ..Default::default()
            },
        };
        Ok(Response::new(reply))
    }

    async fn drop_index(&self, request: Request<CollectionName>) -> GrpcResult<Status> {
        let name = self.begin("DropIndex", request)?;
        Self::status_of(self.with_collection(&name.collection_name, |c| {
            c.index = None;
            Status::success()
        }))
    }

    async fn create_partition(&self, request: Request<PartitionParam>) -> GrpcResult<Status> {
        let param = self.begin("CreatePartition", request)?;
        if param.tag.trim().is_empty() || param.tag == DEFAULT_PARTITION {
            return Ok(Response::new(Status::error(
                ErrorCode::IllegalArgument,
                format!("Invalid partition tag: {:?}", param.tag),
            )));
        }
        Self::status_of(self.with_collection(&param.collection_name, |c| {
            if c.partitions.insert(param.tag.clone()) {
                Status::success()
            } else {
                Status::error(
                    ErrorCode::IllegalArgument,
                    format!("Duplicate partition: {}", param.tag),
                )
            }
        }))
    }

    async fn has_partition(&self, request: Request<PartitionParam>) -> GrpcResult<BoolReply> {
        let param = self.begin("HasPartition", request)?;
        let reply = match self.with_collection(&param.collection_name, |c| c.partitions.contains(&param.tag)) {
            Ok(exists) => BoolReply {
                status: ok(),
                bool_reply: exists,
            },
            Err(status) => BoolReply {
                status: Some(status),
                bool_reply: false,
            },
        };
        Ok(Response::new(reply))
    }

    async fn show_partitions(&self, request: Request<CollectionName>) -> GrpcResult<PartitionList> {
        let name = self.begin("ShowPartitions", request)?;
        let reply = match self.with_collection(&name.collection_name, |c| {
            c.partitions.iter().cloned().collect::<Vec<_>>()
        }) {
            Ok(tags) => PartitionList {
                status: ok(),
                partition_tag_array: tags,
            },
            Err(status) => PartitionList {
                status: Some(status),
                partition_tag_array: Vec::new(),
            },
        };
        Ok(Response::new(reply))
    }

    async fn drop_partition(&self, request: Request<PartitionParam>) -> GrpcResult<Status> {
        let param = self.begin("DropPartition", request)?;
        if param.tag == DEFAULT_PARTITION {
            return Ok(Response::new(Status::error(
                ErrorCode::IllegalArgument,
                "Default partition cannot be dropped",
            )));
        }
        Self::status_of(self.with_collection(&param.collection_name, |c| {
            if c.partitions.remove(&param.tag) {
                c.vectors.retain(|_, v| v.partition != param.tag);
                Status::success()
            } else {
                Status::error(
                    ErrorCode::IllegalArgument,
                    format!("Partition {} does not exist", param.tag),
                )
            }
        }))
    }

    async fn insert(&self, request: Request<InsertParam>) -> GrpcResult<VectorIds> {
        let param = self.begin("Insert", request)?;
        let result = self.with_collection(&param.collection_name, |c| {
            let partition = if param.partition_tag.is_empty() {
                DEFAULT_PARTITION.to_string()
            } else {
                param.partition_tag.clone()
            };
            if !c.partitions.contains(&partition) {
                return Err(Status::error(
                    ErrorCode::IllegalArgument,
                    format!("Partition {partition} does not exist"),
                ));
            }
            if !param.row_id_array.is_empty() && param.row_id_array.len() != param.row_record_array.len() {
                return Err(Status::error(
                    ErrorCode::IllegalRowrecord,
                    "Size of vector ids is not equal to row record array size",
                ));
            }
            let dimension = c.dimension();
            for record in &param.row_record_array {
                validate_record(record, dimension)?;
            }

            let ids: Vec<i64> = if param.row_id_array.is_empty() {
                let first = c.next_id;
                c.next_id += param.row_record_array.len() as i64;
                (first..c.next_id).collect()
            } else {
                param.row_id_array.clone()
            };
            for (id, record) in ids.iter().zip(param.row_record_array) {
                c.next_id = c.next_id.max(id + 1);
                c.vectors.insert(
                    *id,
                    StoredVector {
                        record,
                        partition: partition.clone(),
                    },
                );
            }
            Ok(ids)
        });

        let reply = match result.and_then(|inner| inner) {
            Ok(ids) => VectorIds {
                status: ok(),
                vector_id_array: ids,
            },
            Err(status) => VectorIds {
                status: Some(status),
                vector_id_array: Vec::new(),
            },
        };
        Ok(Response::new(reply))
    }

    async fn get_vectors_by_id(&self, request: Request<VectorsIdentity>) -> GrpcResult<VectorsData> {
        let identity = self.begin("GetVectorsByID", request)?;
        let result = self.with_collection(&identity.collection_name, |c| {
            identity
                .id_array
                .iter()
                .map(|id| {
                    c.vectors
                        .get(id)
                        .filter(|v| identity.partition_tag.is_empty() || v.partition == identity.partition_tag)
                        .map(|v| v.record.clone())
                        .unwrap_or_default()
                })
                .collect::<Vec<_>>()
        });
        let reply = match result {
            Ok(vectors_data) => VectorsData {
                status: ok(),
                vectors_data,
            },
            Err(status) => VectorsData {
                status: Some(status),
                vectors_data: Vec::new(),
            },
        };
        Ok(Response::new(reply))
    }

    /// Each partition is one segment, named after its tag
    async fn get_vector_i_ds(&self, request: Request<GetVectorIDsParam>) -> GrpcResult<VectorIds> {
        let param = self.begin("GetVectorIDs", request)?;
        let result = self.with_collection(&param.collection_name, |c| {
            if !c.partitions.contains(&param.segment_name) {
                return Err(Status::error(
                    ErrorCode::IllegalArgument,
                    format!("Segment {} does not exist", param.segment_name),
                ));
            }
            Ok(c.vectors
                .iter()
                .filter(|(_, v)| v.partition == param.segment_name)
                .map(|(id, _)| *id)
                .collect::<Vec<_>>())
        });
        let reply = match result.and_then(|inner| inner) {
            Ok(ids) => VectorIds {
                status: ok(),
                vector_id_array: ids,
            },
            Err(status) => VectorIds {
                status: Some(status),
                vector_id_array: Vec::new(),
            },
        };
        Ok(Response::new(reply))
    }

    async fn search(&self, request: Request<SearchParam>) -> GrpcResult<TopKQueryResult> {
        let param = self.begin("Search", request)?;
        search_reply(self.with_collection(&param.collection_name, |c| {
            brute_force(c, &param.partition_tag_array, &param.query_record_array, param.topk)
        }))
    }

    async fn search_by_id(&self, request: Request<SearchByIDParam>) -> GrpcResult<TopKQueryResult> {
        let param = self.begin("SearchByID", request)?;
        search_reply(self.with_collection(&param.collection_name, |c| {
            let queries = param
                .id_array
                .iter()
                .map(|id| {
                    c.vectors.get(id).map(|v| v.record.clone()).ok_or_else(|| {
                        Status::error(ErrorCode::IllegalVectorId, format!("Vector id {id} does not exist"))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            brute_force(c, &param.partition_tag_array, &queries, param.topk)
        }))
    }

    /// File ids are ignored; the whole collection is one file
    async fn search_in_files(&self, request: Request<SearchInFilesParam>) -> GrpcResult<TopKQueryResult> {
        let param = self.begin("SearchInFiles", request)?;
        let Some(search) = param.search_param else {
            return search_reply(Err(Status::error(
                ErrorCode::IllegalArgument,
                "Search parameter is missing",
            )));
        };
        search_reply(self.with_collection(&search.collection_name, |c| {
            brute_force(c, &search.partition_tag_array, &search.query_record_array, search.topk)
        }))
    }

    /// Understands `version`, `status`, `mode`, `echo <text>` and
    /// `sleep <millis>` (replies after the delay)
    async fn cmd(&self, request: Request<Command>) -> GrpcResult<StringReply> {
        let command = self.begin("Cmd", request)?;
        let cmd = command.cmd.trim();
        let (verb, arg) = cmd.split_once(' ').unwrap_or((cmd, ""));

        let reply = match verb {
            "version" => Ok(FAKE_VERSION.to_string()),
            "status" => Ok("OK".to_string()),
            "mode" => Ok("CPU".to_string()),
            "echo" => Ok(arg.to_string()),
            "sleep" => match arg.trim().parse::<u64>() {
                Ok(millis) => {
                    tokio::time::sleep(Duration::from_millis(millis)).await;
                    Ok(format!("slept {millis}"))
                }
                Err(_) => Err(Status::error(ErrorCode::IllegalArgument, format!("Bad sleep: {arg:?}"))),
            },
            _ => Err(Status::error(ErrorCode::IllegalArgument, format!("Unknown command: {cmd:?}"))),
        };

        Ok(Response::new(match reply {
            Ok(string_reply) => StringReply {
                status: ok(),
                string_reply,
            },
            Err(status) => StringReply {
                status: Some(status),
                string_reply: String::new(),
            },
        }))
    }

    async fn delete_by_id(&self, request: Request<DeleteByIDParam>) -> GrpcResult<Status> {
        let param = self.begin("DeleteByID", request)?;
        Self::status_of(self.with_collection(&param.collection_name, |c| {
            for id in &param.id_array {
                c.vectors.remove(id);
            }
            Status::success()
        }))
    }

    async fn preload_collection(&self, request: Request<PreloadCollectionParam>) -> GrpcResult<Status> {
        let param = self.begin("PreloadCollection", request)?;
        Self::status_of(self.with_collection(&param.collection_name, |c| {
            match param.partition_tag_array.iter().find(|t| !c.partitions.contains(*t)) {
                Some(tag) => Status::error(
                    ErrorCode::IllegalArgument,
                    format!("Partition {tag} does not exist"),
                ),
                None => Status::success(),
            }
        }))
    }

    async fn reload_segments(&self, request: Request<ReLoadSegmentsParam>) -> GrpcResult<Status> {
        let param = self.begin("ReloadSegments", request)?;
        Self::status_of(self.with_collection(&param.collection_name, |_| Status::success()))
    }

    async fn flush(&self, request: Request<FlushParam>) -> GrpcResult<Status> {
        let param = self.begin("Flush", request)?;
        let state = self.lock();
        let unknown = param
            .collection_name_array
            .iter()
            .find(|name| !state.collections.contains_key(*name));
        Ok(Response::new(match unknown {
            Some(name) => missing(name),
            None => Status::success(),
        }))
    }

    async fn compact(&self, request: Request<CollectionName>) -> GrpcResult<Status> {
        let name = self.begin("Compact", request)?;
        Self::status_of(self.with_collection(&name.collection_name, |_| Status::success()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema(name: &str, dimension: i64, metric: MetricType) -> CollectionSchema {
        CollectionSchema::new(name, dimension, metric)
    }

    #[tokio::test]
    async fn test_create_and_describe_collection() {
        let fake = FakeMilvus::new();
        let status = fake
            .create_collection(Request::new(schema("docs", 4, MetricType::L2)))
            .await
            .unwrap()
            .into_inner();
        assert!(status.is_success());

        let described = fake
            .describe_collection(Request::new("docs".into()))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(described.dimension, 4);
        assert!(described.status.unwrap().is_success());
        assert_eq!(fake.calls("CreateCollection"), 1);
        assert_eq!(fake.calls("DescribeCollection"), 1);
    }

    #[tokio::test]
    async fn test_invalid_schema_reports_in_status() {
        let fake = FakeMilvus::new();
        let status = fake
            .create_collection(Request::new(schema("1bad", 4, MetricType::L2)))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(status.code(), Some(ErrorCode::IllegalCollectionName));

        let status = fake
            .create_collection(Request::new(schema("good", 0, MetricType::L2)))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(status.code(), Some(ErrorCode::IllegalDimension));
        assert!(fake.collection_names().is_empty());
    }

    #[tokio::test]
    async fn test_search_orders_by_distance_and_pads() {
        let fake = FakeMilvus::new();
        fake.create_collection(Request::new(schema("pts", 2, MetricType::L2)))
            .await
            .unwrap();
        fake.insert(Request::new(InsertParam {
            collection_name: "pts".to_string(),
            row_record_array: vec![vec![0.0, 0.0].into(), vec![3.0, 4.0].into()],
            row_id_array: vec![10, 20],
            ..Default::default()
        }))
        .await
        .unwrap();

        let result = fake
            .search(Request::new(SearchParam::new("pts", vec![vec![3.0, 3.0].into()], 3)))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(result.row_num, 1);
        assert_eq!(result.ids, vec![20, 10, -1]);
        assert_eq!(result.distances[0], 1.0);
        assert_eq!(result.distances[1], 18.0);
        assert_eq!(result.distances[2], f32::MAX);
    }

    #[tokio::test]
    async fn test_injected_failure_is_used_once() {
        let fake = FakeMilvus::new();
        fake.fail_next("Cmd", tonic::Status::unavailable("maintenance"));

        let err = fake.cmd(Request::new("version".into())).await.unwrap_err();
        assert_eq!(err.code(), tonic::Code::Unavailable);

        let reply = fake.cmd(Request::new("version".into())).await.unwrap().into_inner();
        assert_eq!(reply.string_reply, FAKE_VERSION);
        assert_eq!(fake.calls("Cmd"), 2);
    }

    #[tokio::test]
    async fn test_unknown_command_is_a_status_failure() {
        let fake = FakeMilvus::new();
        let reply = fake.cmd(Request::new("reboot".into())).await.unwrap().into_inner();
        assert_eq!(reply.status.unwrap().code(), Some(ErrorCode::IllegalArgument));
    }
}
