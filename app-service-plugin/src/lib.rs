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

//! App service subscriptions of applications and their resumption.

mod extension;
mod helpers;
mod plugin;

pub use crate::{
    extension::{AppServiceAppExtension, AppServiceSubscriptions, APP_SERVICE_FIELD},
    helpers::{create_get_app_service_data_request, send_get_app_service_data},
    plugin::AppServicePlugin,
};
