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

use application_manager::{any_other_application, Application, ApplicationQuery};
use common::{AppId, CorrelationId, FunctionId, Message};
use serde_json::{json, Value};

use crate::{ModuleUid, RcAppExtension};

pub const MODULE_DATA: &str = "moduleData";
pub const MODULE_TYPE: &str = "moduleType";
pub const MODULE_ID: &str = "moduleId";

/// `RC.GetInteriorVehicleData` (un)subscribing to the module.
pub fn create_get_interior_vehicle_data_request(
    module: &ModuleUid,
    correlation_id: CorrelationId,
    subscribe: bool,
) -> Message {
    Message::request(
        FunctionId::RcGetInteriorVehicleData,
        correlation_id,
        json!({
            MODULE_TYPE: module.module_type.to_string(),
            MODULE_ID: module.module_id,
            "subscribe": subscribe,
        }),
    )
}

/// The control data of the module carried by a response or notification, if any.
pub fn module_control_data<'a>(message: &'a Message, module: &ModuleUid) -> Option<&'a Value> {
    message.param(&[MODULE_DATA, module.module_type.data_key()])
}

pub fn is_subscribed_to_module(app: &Application, module: &ModuleUid) -> bool {
    app.extension::<RcAppExtension>()
        .is_some_and(|extension| extension.is_subscribed_to_interior_vehicle_data(module))
}

pub fn apps_subscribed_to_module(
    query: &(impl ApplicationQuery + ?Sized),
    module: &ModuleUid,
) -> Vec<AppId> {
    query
        .applications()
        .iter()
        .filter(|app| is_subscribed_to_module(app, module))
        .map(|app| app.app_id())
        .collect()
}

pub fn is_another_app_subscribed(
    query: &(impl ApplicationQuery + ?Sized),
    except: AppId,
    module: &ModuleUid,
) -> bool {
    any_other_application(query, except, |app| is_subscribed_to_module(app, module))
}
