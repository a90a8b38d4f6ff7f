use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct EncodeRes {
    pub encoded: String,
}

#[derive(Serialize)]
pub struct DecodeRes {
    pub value: u64,
}

#[derive(Deserialize)]
pub struct EncodeBatchReq {
    pub values: Vec<u64>,
}

#[derive(Serialize)]
pub struct EncodeBatchRes {
    pub encoded: Vec<String>,
}

#[derive(Deserialize)]
pub struct DecodeBatchReq {
    pub encoded: Vec<String>,
}

#[derive(Serialize)]
pub struct DecodeBatchRes {
    pub values: Vec<u64>,
}

#[derive(Serialize)]
pub struct ErrorRes {
    pub error: String,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}
