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

use application_manager::{ApplicationManager, RpcServiceError};
use common::{CorrelationId, FunctionId, Message};
use serde_json::json;

pub fn create_get_app_service_data_request(
    service_type: &str,
    correlation_id: CorrelationId,
    subscribe: bool,
) -> Message {
    Message::request(
        FunctionId::AppServiceGetAppServiceData,
        correlation_id,
        json!({"serviceType": service_type, "subscribe": subscribe}),
    )
}

/// Send `AppService.GetAppServiceData` for the service type to the HMI. Nobody waits for
/// the response.
pub fn send_get_app_service_data(
    app_manager: &dyn ApplicationManager,
    service_type: &str,
    subscribe: bool,
) -> Result<CorrelationId, RpcServiceError> {
    let correlation_id = app_manager.next_hmi_correlation_id();
    app_manager.rpc_service().manage_hmi_command(create_get_app_service_data_request(
        service_type,
        correlation_id,
        subscribe,
    ))?;
    Ok(correlation_id)
}
