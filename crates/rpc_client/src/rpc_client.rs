// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_client.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::models::{RpcApplicationLog, RpcRequest, RpcResponse};
use crate::rpc_exception::RpcException;
use async_trait::async_trait;
use neo_config::ClientConfig;
use neo_core::UInt256;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};
use url::Url;

/// The node calls the invocation flow depends on.
///
/// Implemented by [`RpcClient`] over HTTP; tests and alternative
/// transports provide their own.
#[async_trait]
pub trait NeoRpc: Send + Sync {
    /// Relays a serialized transaction, hex encoded. Returns whether the
    /// node accepted it.
    async fn send_raw_transaction(&self, tx_hex: &str) -> Result<bool, RpcException>;

    /// Number of blocks in the node's main chain.
    async fn get_block_count(&self) -> Result<u32, RpcException>;

    /// The application log of `tx_id`, or `None` while the node does not
    /// know the transaction yet.
    async fn get_application_log(
        &self,
        tx_id: &UInt256,
    ) -> Result<Option<RpcApplicationLog>, RpcException>;
}

#[async_trait]
impl<T: NeoRpc + ?Sized> NeoRpc for Arc<T> {
    async fn send_raw_transaction(&self, tx_hex: &str) -> Result<bool, RpcException> {
        self.as_ref().send_raw_transaction(tx_hex).await
    }

    async fn get_block_count(&self) -> Result<u32, RpcException> {
        self.as_ref().get_block_count().await
    }

    async fn get_application_log(
        &self,
        tx_id: &UInt256,
    ) -> Result<Option<RpcApplicationLog>, RpcException> {
        self.as_ref().get_application_log(tx_id).await
    }
}

/// JSON-RPC 2.0 client for a single node.
pub struct RpcClient {
    base_address: Url,
    http_client: Client,
    next_id: AtomicU64,
}

impl RpcClient {
    /// Creates a new RPC client
    pub fn new(url: Url) -> Self {
        Self::with_client(Client::new(), url)
    }

    /// Creates a new RPC client with an existing HTTP client
    pub fn with_client(client: Client, url: Url) -> Self {
        Self {
            base_address: url,
            http_client: client,
            next_id: AtomicU64::new(1),
        }
    }

    /// Creates a client for the endpoint named in `config`.
    pub fn from_config(config: &ClientConfig) -> Result<Self, RpcException> {
        let url = Url::parse(&config.rpc_url).map_err(|e| {
            RpcException::internal(format!("invalid rpc url '{}': {e}", config.rpc_url))
        })?;
        Ok(Self::new(url))
    }

    pub fn url(&self) -> &Url {
        &self.base_address
    }

    fn as_rpc_request(&self, method: &str, params: Vec<Value>) -> RpcRequest {
        RpcRequest::new(self.next_id.fetch_add(1, Ordering::Relaxed), method, params)
    }

    /// Parses a response body, turning a JSON-RPC `error` member into an
    /// [`RpcException`] carrying the node's code.
    pub(crate) fn as_rpc_response(content: &str) -> Result<RpcResponse, RpcException> {
        let mut response: RpcResponse = serde_json::from_str(content)
            .map_err(|e| RpcException::parse(format!("Parse error: {e}")))?;
        response.raw_response = Some(content.to_string());

        if let Some(ref error) = response.error {
            return Err(RpcException::new(error.code, error.message.clone()));
        }
        Ok(response)
    }

    /// Sends an RPC request
    pub async fn send_async(&self, request: RpcRequest) -> Result<RpcResponse, RpcException> {
        trace!(method = %request.method, id = %request.id, "sending rpc request");
        let response = self
            .http_client
            .post(self.base_address.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| RpcException::internal(format!("HTTP error: {e}")))?;

        let content = response
            .text()
            .await
            .map_err(|e| RpcException::internal(format!("Failed to read response: {e}")))?;

        Self::as_rpc_response(&content)
    }

    /// Sends an RPC request and returns the result
    pub async fn rpc_send_async(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> Result<Value, RpcException> {
        let request = self.as_rpc_request(method, params);
        let response = self.send_async(request).await?;
        response
            .result
            .ok_or_else(|| RpcException::internal(format!("{method}: no result returned")))
    }

    async fn rpc_send_typed<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> Result<T, RpcException> {
        let result = self.rpc_send_async(method, params).await?;
        decode_result(method, result)
    }
}

#[async_trait]
impl NeoRpc for RpcClient {
    async fn send_raw_transaction(&self, tx_hex: &str) -> Result<bool, RpcException> {
        let accepted: bool = self
            .rpc_send_typed("sendrawtransaction", vec![Value::from(tx_hex)])
            .await?;
        debug!(accepted, "sendrawtransaction");
        Ok(accepted)
    }

    async fn get_block_count(&self) -> Result<u32, RpcException> {
        self.rpc_send_typed("getblockcount", Vec::new()).await
    }

    async fn get_application_log(
        &self,
        tx_id: &UInt256,
    ) -> Result<Option<RpcApplicationLog>, RpcException> {
        match self
            .rpc_send_async("getapplicationlog", vec![Value::from(tx_id.to_string())])
            .await
        {
            Ok(result) => decode_result("getapplicationlog", result).map(Some),
            Err(err) if err.is_unknown_item() => Ok(None),
            Err(err) => Err(err),
        }
    }
}

fn decode_result<T: DeserializeOwned>(method: &str, result: Value) -> Result<T, RpcException> {
    serde_json::from_value(result)
        .map_err(|e| RpcException::internal(format!("{method}: unexpected result: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc_exception::{PARSE_ERROR, UNKNOWN_ITEM};

    #[test]
    fn response_with_result() {
        let response =
            RpcClient::as_rpc_response(r#"{"jsonrpc":"2.0","id":1,"result":1523}"#).unwrap();
        assert_eq!(response.result, Some(Value::from(1523)));
        assert!(response.raw_response.is_some());
        let count: u32 = decode_result("getblockcount", response.result.unwrap()).unwrap();
        assert_eq!(count, 1523);
    }

    #[test]
    fn response_error_keeps_node_code() {
        let err = RpcClient::as_rpc_response(
            r#"{"jsonrpc":"2.0","id":1,"error":{"code":-100,"message":"Unknown transaction"}}"#,
        )
        .unwrap_err();
        assert_eq!(err.code, UNKNOWN_ITEM);
        assert!(err.is_unknown_item());
    }

    #[test]
    fn malformed_body_is_parse_error() {
        let err = RpcClient::as_rpc_response("<html>bad gateway</html>").unwrap_err();
        assert_eq!(err.code, PARSE_ERROR);
    }

    #[test]
    fn unexpected_result_shape_is_reported() {
        let err = decode_result::<u32>("getblockcount", Value::from("many")).unwrap_err();
        assert!(err.message.starts_with("getblockcount"));
    }

    #[test]
    fn request_ids_increase() {
        let client = RpcClient::new(Url::parse("http://localhost:10332").unwrap());
        let first = client.as_rpc_request("getblockcount", Vec::new());
        let second = client.as_rpc_request("getblockcount", Vec::new());
        assert_eq!(first.id, Value::from(1));
        assert_eq!(second.id, Value::from(2));
    }

    #[test]
    fn from_config_rejects_bad_url() {
        let config = ClientConfig {
            rpc_url: "not a url".to_string(),
            ..ClientConfig::default()
        };
        assert!(RpcClient::from_config(&config).is_err());
        assert!(RpcClient::from_config(&ClientConfig::default()).is_ok());
    }
}
