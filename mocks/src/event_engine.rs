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

use common::{CorrelationId, FunctionId};
use event_engine::{Event, EventDispatcher, EventHandler, ObserverId};

mockall::mock! {
    pub EventDispatcher {}

    impl EventDispatcher for EventDispatcher {
        fn add_observer(
            &self,
            function_id: FunctionId,
            correlation_id: CorrelationId,
            handler: EventHandler,
        ) -> ObserverId;
        fn remove_observer(
            &self,
            function_id: FunctionId,
            correlation_id: CorrelationId,
            observer_id: ObserverId,
        ) -> bool;
        fn has_observers(&self, function_id: FunctionId, correlation_id: CorrelationId) -> bool;
        fn raise_event(&self, event: Event) -> usize;
    }
}
