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

use common::{CorrelationId, FunctionId, Message};

/// An inbound message (usually an HMI response) delivered through the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    message: Message,
}

impl Event {
    pub fn new(message: Message) -> Self {
        Self { message }
    }

    pub fn id(&self) -> FunctionId {
        self.message.function_id
    }

    pub fn correlation_id(&self) -> CorrelationId {
        self.message.correlation_id
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn into_message(self) -> Message {
        self.message
    }
}

impl From<Message> for Event {
    fn from(message: Message) -> Self {
        Self::new(message)
    }
}
