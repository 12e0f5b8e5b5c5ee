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

use std::sync::Arc;

use common::{AppId, CorrelationId, FunctionId, Message};

/// The pair an HMI response is correlated by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestIds {
    pub function_id: FunctionId,
    pub correlation_id: CorrelationId,
}

/// A subscription request issued on behalf of a resuming application.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumptionRequest {
    pub request_ids: RequestIds,
    pub message: Message,
}

impl ResumptionRequest {
    pub fn new(message: Message) -> Self {
        Self {
            request_ids: RequestIds {
                function_id: message.function_id,
                correlation_id: message.correlation_id,
            },
            message,
        }
    }
}

/// Told about every request issued on behalf of an application, whether it is actually sent
/// to the HMI or queued behind an identical one.
pub type Subscriber = Arc<dyn Fn(AppId, ResumptionRequest) + Send + Sync>;
