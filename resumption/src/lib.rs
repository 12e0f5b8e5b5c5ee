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

//! Restoring the subscriptions of applications which reconnect after an ignition cycle or a
//! transport drop, and coordinating the subscription requests sent to the HMI while doing so.

mod config;
mod error;
mod extension;
mod pending_handler;
mod request;
mod saved_application;
mod status_tracker;

pub use crate::{
    config::{DropFrozenOnUnregister, ResumptionConfig},
    error::ResumptionError,
    extension::ResumableExtension,
    pending_handler::{
        ExtensionPendingResumptionHandler, PendingResumptionHandler, SubscriptionKind,
    },
    request::{RequestIds, ResumptionRequest, Subscriber},
    saved_application::{SavedApplication, APPLICATION_SUBSCRIPTIONS},
    status_tracker::{AppResumptionStatus, ResumptionFinishedCallback, ResumptionStatusTracker},
};
