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

use serde::{Deserialize, Serialize};
use utils::make_config_setting;

make_config_setting!(
    /// Forget the queued (not yet sent) resumption requests of an application once it
    /// unregisters. Its in-flight request is never cancelled, other waiters depend on it.
    DropFrozenOnUnregister,
    bool,
    true
);

/// Resumption configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumptionConfig {
    #[serde(default)]
    pub drop_frozen_on_unregister: DropFrozenOnUnregister,
}
