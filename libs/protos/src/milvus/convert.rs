use super::{
    CollectionName, CollectionSchema, Command, FlushParam, KeyValuePair, PartitionParam,
    PreloadCollectionParam, RowRecord, SearchParam,
};
use super::params::MetricType;

impl From<&str> for CollectionName {
    fn from(name: &str) -> Self {
        Self {
            collection_name: name.to_string(),
        }
    }
}

impl From<String> for CollectionName {
    fn from(collection_name: String) -> Self {
        Self { collection_name }
    }
}

impl From<&str> for Command {
    fn from(cmd: &str) -> Self {
        Self {
            cmd: cmd.to_string(),
        }
    }
}

impl From<String> for Command {
    fn from(cmd: String) -> Self {
        Self { cmd }
    }
}

impl From<CollectionName> for PreloadCollectionParam {
    fn from(name: CollectionName) -> Self {
        Self {
            collection_name: name.collection_name,
            partition_tag_array: Vec::new(),
        }
    }
}

impl From<&str> for PreloadCollectionParam {
    fn from(name: &str) -> Self {
        CollectionName::from(name).into()
    }
}

impl<S: Into<String>> FromIterator<S> for FlushParam {
    fn from_iter<I: IntoIterator<Item = S>>(names: I) -> Self {
        Self {
            collection_name_array: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl PartitionParam {
    pub fn new(collection_name: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            collection_name: collection_name.into(),
            tag: tag.into(),
        }
    }
}

impl From<Vec<f32>> for RowRecord {
    fn from(float_data: Vec<f32>) -> Self {
        Self {
            float_data,
            binary_data: Vec::new(),
        }
    }
}

impl RowRecord {
    pub fn binary(binary_data: Vec<u8>) -> Self {
        Self {
            float_data: Vec::new(),
            binary_data,
        }
    }
}

impl KeyValuePair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// The `params` entry Milvus reads index and search parameters from,
    /// e.g. `{"nlist": 1024}` or `{"nprobe": 16}`
    pub fn params(value: serde_json::Value) -> Self {
        Self::new("params", value.to_string())
    }
}

impl CollectionSchema {
    pub fn new(collection_name: impl Into<String>, dimension: i64, metric: MetricType) -> Self {
        Self {
            status: None,
            collection_name: collection_name.into(),
            dimension,
            index_file_size: 1024,
            metric_type: metric.into(),
            extra_params: Vec::new(),
        }
    }

    pub fn metric(&self) -> Option<MetricType> {
        MetricType::try_from(self.metric_type).ok()
    }
}

impl SearchParam {
    pub fn new(collection_name: impl Into<String>, queries: Vec<RowRecord>, topk: i64) -> Self {
        Self {
            collection_name: collection_name.into(),
            partition_tag_array: Vec::new(),
            query_record_array: queries,
            topk,
            extra_params: Vec::new(),
        }
    }
}
