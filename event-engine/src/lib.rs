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

//! Correlation of asynchronous HMI responses with the requests waiting for them.
//!
//! Whoever sends a request to the HMI registers a handler for the request's function id and
//! correlation id. When the response is raised as an [`Event`], the dispatcher hands it to
//! every handler registered for that pair exactly once and forgets the route.

mod dispatcher;
mod event;

pub use dispatcher::{EventDispatcher, EventDispatcherImpl, EventHandler, ObserverId};
pub use event::Event;
