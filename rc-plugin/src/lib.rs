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

//! Remote control of vehicle modules: interior vehicle data subscriptions of applications,
//! their resumption and the cache of the last known module data.

mod cache;
mod extension;
mod helpers;
mod module;
mod plugin;
mod subscription_kind;

pub use crate::{
    cache::InteriorDataCache,
    extension::{ModuleSubscriptions, RcAppExtension, MODULE_DATA_FIELD},
    helpers::{
        apps_subscribed_to_module, create_get_interior_vehicle_data_request, module_control_data,
    },
    module::{ModuleType, ModuleUid, ModuleUidParseError},
    plugin::RcPlugin,
    subscription_kind::{RcPendingResumptionHandler, RcSubscriptionKind},
};
