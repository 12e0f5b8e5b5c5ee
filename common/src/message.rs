// Copyright (c) 2026 RBB S.r.l
// opensource@mintlayer.org
// SPDX-License-Identifier: MIT
// Licensed under the MIT License;
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// https://github.com/mintlayer/mintlayer-core/blob/master/LICENSE
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Messages exchanged with the HMI and with mobile applications.
//!
//! Only the envelope is typed; the payload (`msgParams`) stays an opaque JSON value whose
//! layout is owned by the RPC that carries it.

use serde::{Deserialize, Serialize};

use crate::primitives::{AppId, CorrelationId};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum FunctionId {
    #[serde(rename = "RC.GetInteriorVehicleData")]
    #[strum(serialize = "RC.GetInteriorVehicleData")]
    RcGetInteriorVehicleData,
    #[serde(rename = "RC.OnInteriorVehicleData")]
    #[strum(serialize = "RC.OnInteriorVehicleData")]
    RcOnInteriorVehicleData,
    #[serde(rename = "AppService.GetAppServiceData")]
    #[strum(serialize = "AppService.GetAppServiceData")]
    AppServiceGetAppServiceData,
    /// Mobile-facing interior vehicle data notification.
    #[serde(rename = "OnInteriorVehicleData")]
    #[strum(serialize = "OnInteriorVehicleData")]
    OnInteriorVehicleData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "camelCase")]
pub enum MessageType {
    Request,
    Response,
    ErrorResponse,
    Notification,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultCode {
    Success,
    Warnings,
    UnsupportedRequest,
    UnsupportedResource,
    Disallowed,
    Rejected,
    Aborted,
    InUse,
    DataNotAvailable,
    TimedOut,
    InvalidData,
    GenericError,
}

impl ResultCode {
    pub fn is_success(&self) -> bool {
        match self {
            ResultCode::Success | ResultCode::Warnings => true,
            ResultCode::UnsupportedRequest
            | ResultCode::UnsupportedResource
            | ResultCode::Disallowed
            | ResultCode::Rejected
            | ResultCode::Aborted
            | ResultCode::InUse
            | ResultCode::DataNotAvailable
            | ResultCode::TimedOut
            | ResultCode::InvalidData
            | ResultCode::GenericError => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub function_id: FunctionId,
    pub message_type: MessageType,
    pub correlation_id: CorrelationId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_key: Option<AppId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_code: Option<ResultCode>,
    #[serde(default)]
    pub msg_params: serde_json::Value,
}

impl Message {
    pub fn request(
        function_id: FunctionId,
        correlation_id: CorrelationId,
        msg_params: serde_json::Value,
    ) -> Self {
        Self {
            function_id,
            message_type: MessageType::Request,
            correlation_id,
            connection_key: None,
            result_code: None,
            msg_params,
        }
    }

    pub fn response(
        function_id: FunctionId,
        correlation_id: CorrelationId,
        result_code: ResultCode,
        msg_params: serde_json::Value,
    ) -> Self {
        Self {
            function_id,
            message_type: MessageType::Response,
            correlation_id,
            connection_key: None,
            result_code: Some(result_code),
            msg_params,
        }
    }

    pub fn error_response(
        function_id: FunctionId,
        correlation_id: CorrelationId,
        result_code: ResultCode,
    ) -> Self {
        Self {
            function_id,
            message_type: MessageType::ErrorResponse,
            correlation_id,
            connection_key: None,
            result_code: Some(result_code),
            msg_params: serde_json::Value::Object(Default::default()),
        }
    }

    pub fn notification(function_id: FunctionId, msg_params: serde_json::Value) -> Self {
        Self {
            function_id,
            message_type: MessageType::Notification,
            correlation_id: CorrelationId::NONE,
            connection_key: None,
            result_code: None,
            msg_params,
        }
    }

    pub fn with_correlation_id(mut self, correlation_id: CorrelationId) -> Self {
        self.correlation_id = correlation_id;
        self
    }

    pub fn with_connection_key(mut self, app_id: AppId) -> Self {
        self.connection_key = Some(app_id);
        self
    }

    /// A plain response (not an error response) carrying a successful result code.
    pub fn is_successful_response(&self) -> bool {
        self.message_type == MessageType::Response
            && self.result_code.is_some_and(|code| code.is_success())
    }

    /// Look up a nested `msgParams` field by a path of object keys.
    pub fn param(&self, path: &[&str]) -> Option<&serde_json::Value> {
        path.iter().try_fold(&self.msg_params, |value, key| value.get(key))
    }
}
