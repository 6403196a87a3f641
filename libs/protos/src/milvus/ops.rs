//! Operation table for `milvus.grpc.MilvusService`
//!
//! One marker type per RPC. Pass them to [`grpc_client::invoke`] or use the
//! typed wrappers on the Milvus client.

use super::{
    BoolReply, CollectionInfo, CollectionName, CollectionNameList, CollectionRowCount,
    CollectionSchema, Command, DeleteByIDParam, FlushParam, GetVectorIDsParam, IndexParam,
    InsertParam, PartitionList, PartitionParam, PreloadCollectionParam, ReLoadSegmentsParam,
    SearchByIDParam, SearchInFilesParam, SearchParam, Status, StringReply, TopKQueryResult,
    VectorIds, VectorsData, VectorsIdentity,
};

grpc_client::operations! {
    /// The Milvus vector database service
    service MilvusService = "milvus.grpc.MilvusService";

    CreateCollection(CollectionSchema) -> Status;
    HasCollection(CollectionName) -> BoolReply;
    DescribeCollection(CollectionName) -> CollectionSchema;
    CountCollection(CollectionName) -> CollectionRowCount;
    /// Takes an empty `Command`
    ShowCollections(Command) -> CollectionNameList;
    /// Reply carries segment statistics as JSON
    ShowCollectionInfo(CollectionName) -> CollectionInfo;
    DropCollection(CollectionName) -> Status;

    CreateIndex(IndexParam) -> Status;
    DescribeIndex(CollectionName) -> IndexParam;
    DropIndex(CollectionName) -> Status;

    CreatePartition(PartitionParam) -> Status;
    HasPartition(PartitionParam) -> BoolReply;
    ShowPartitions(CollectionName) -> PartitionList;
    DropPartition(PartitionParam) -> Status;

    Insert(InsertParam) -> VectorIds;
    GetVectorsByID(VectorsIdentity) -> VectorsData;
    /// Ids stored in one segment
    GetVectorIDs(GetVectorIDsParam) -> VectorIds;
    Search(SearchParam) -> TopKQueryResult;
    SearchByID(SearchByIDParam) -> TopKQueryResult;
    SearchInFiles(SearchInFilesParam) -> TopKQueryResult;

    /// Free-form server command: `version`, `status`, `mode`, ...
    Cmd(Command) -> StringReply;
    DeleteByID(DeleteByIDParam) -> Status;
    /// Load a collection (optionally only some partitions) into memory
    PreloadCollection(PreloadCollectionParam) -> Status;
    ReloadSegments(ReLoadSegmentsParam) -> Status;
    Flush(FlushParam) -> Status;
    Compact(CollectionName) -> Status;
}

#[cfg(test)]
mod tests {
    use super::*;
    use grpc_client::{Operation, Service};

    #[test]
    fn test_service_name_matches_server_stub() {
        assert_eq!(
            <MilvusService as Service>::NAME,
            super::super::milvus_service_server::SERVICE_NAME
        );
    }

    #[test]
    fn test_every_rpc_is_listed() {
        assert_eq!(OPERATIONS.len(), 26);
        assert_eq!(OPERATIONS.first(), Some(&"CreateCollection"));
        assert_eq!(OPERATIONS.last(), Some(&"Compact"));
    }

    #[test]
    fn test_paths_keep_proto_casing() {
        assert_eq!(GetVectorIDs::PATH, "/milvus.grpc.MilvusService/GetVectorIDs");
        assert_eq!(GetVectorsByID::PATH, "/milvus.grpc.MilvusService/GetVectorsByID");
        assert_eq!(SearchByID::PATH, "/milvus.grpc.MilvusService/SearchByID");
        assert_eq!(DeleteByID::NAME, "DeleteByID");
    }
}
