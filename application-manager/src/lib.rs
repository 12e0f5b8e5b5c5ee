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

//! Applications registered with the broker and the services the subscription core consumes
//! from the surrounding command framework.

mod application;
mod correlation;
mod registry;
mod rpc_service;

use std::sync::Arc;

use common::CorrelationId;
use event_engine::EventDispatcher;

pub use application::{AppExtension, Application};
pub use correlation::CorrelationIdGenerator;
pub use registry::{any_other_application, ApplicationQuery, ApplicationRegistry};
pub use rpc_service::{RpcService, RpcServiceError, RpcServiceImpl};

/// Everything a plugin needs from the application manager.
pub trait ApplicationManager: ApplicationQuery {
    fn rpc_service(&self) -> &dyn RpcService;

    fn event_dispatcher(&self) -> &dyn EventDispatcher;

    fn next_hmi_correlation_id(&self) -> CorrelationId;
}

pub struct ApplicationManagerImpl {
    registry: ApplicationRegistry,
    rpc_service: Arc<dyn RpcService>,
    event_dispatcher: Arc<dyn EventDispatcher>,
    correlation_ids: CorrelationIdGenerator,
}

impl ApplicationManagerImpl {
    pub fn new(
        rpc_service: Arc<dyn RpcService>,
        event_dispatcher: Arc<dyn EventDispatcher>,
    ) -> Self {
        Self {
            registry: ApplicationRegistry::new(),
            rpc_service,
            event_dispatcher,
            correlation_ids: CorrelationIdGenerator::new(),
        }
    }

    pub fn registry(&self) -> &ApplicationRegistry {
        &self.registry
    }
}

impl ApplicationQuery for ApplicationManagerImpl {
    fn applications(&self) -> Vec<Arc<Application>> {
        self.registry.applications()
    }

    fn application(&self, app_id: common::AppId) -> Option<Arc<Application>> {
        self.registry.application(app_id)
    }
}

impl ApplicationManager for ApplicationManagerImpl {
    fn rpc_service(&self) -> &dyn RpcService {
        self.rpc_service.as_ref()
    }

    fn event_dispatcher(&self) -> &dyn EventDispatcher {
        self.event_dispatcher.as_ref()
    }

    fn next_hmi_correlation_id(&self) -> CorrelationId {
        self.correlation_ids.next_id()
    }
}
