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

use common::Message;
use logging::log;
use thiserror::Error;
use tokio::sync::mpsc;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RpcServiceError {
    #[error("Outbound {0} queue is closed")]
    QueueClosed(&'static str),
    #[error("Message {0} rejected: {1}")]
    Rejected(common::FunctionId, String),
}

/// Outbound side of the command framework. Sending never waits for the peer; the answer,
/// if any, comes back later as an event.
pub trait RpcService: Send + Sync {
    fn manage_hmi_command(&self, message: Message) -> Result<(), RpcServiceError>;

    fn manage_mobile_command(&self, message: Message) -> Result<(), RpcServiceError>;
}

/// Puts outbound messages on unbounded queues drained by the transport layer.
pub struct RpcServiceImpl {
    hmi_tx: mpsc::UnboundedSender<Message>,
    mobile_tx: mpsc::UnboundedSender<Message>,
}

impl RpcServiceImpl {
    pub fn new() -> (
        Self,
        mpsc::UnboundedReceiver<Message>,
        mpsc::UnboundedReceiver<Message>,
    ) {
        let (hmi_tx, hmi_rx) = mpsc::unbounded_channel();
        let (mobile_tx, mobile_rx) = mpsc::unbounded_channel();
        (Self { hmi_tx, mobile_tx }, hmi_rx, mobile_rx)
    }
}

impl RpcService for RpcServiceImpl {
    fn manage_hmi_command(&self, message: Message) -> Result<(), RpcServiceError> {
        log::trace!(
            "Sending {} with correlation id {} to HMI",
            message.function_id,
            message.correlation_id
        );
        self.hmi_tx.send(message).map_err(|_| RpcServiceError::QueueClosed("HMI"))
    }

    fn manage_mobile_command(&self, message: Message) -> Result<(), RpcServiceError> {
        log::trace!(
            "Sending {} to application {:?}",
            message.function_id,
            message.connection_key
        );
        self.mobile_tx.send(message).map_err(|_| RpcServiceError::QueueClosed("mobile"))
    }
}
