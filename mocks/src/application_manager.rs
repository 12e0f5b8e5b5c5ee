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

use application_manager::{Application, ApplicationQuery, RpcService, RpcServiceError};
use common::{AppId, Message};

mockall::mock! {
    pub RpcService {}

    impl RpcService for RpcService {
        fn manage_hmi_command(&self, message: Message) -> Result<(), RpcServiceError>;
        fn manage_mobile_command(&self, message: Message) -> Result<(), RpcServiceError>;
    }
}

mockall::mock! {
    pub ApplicationQuery {}

    impl ApplicationQuery for ApplicationQuery {
        fn applications(&self) -> Vec<Arc<Application>>;
        fn application(&self, app_id: AppId) -> Option<Arc<Application>>;
    }
}
