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

use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use common::{CorrelationId, FunctionId};
use logging::log;
use parking_lot::Mutex;

use crate::Event;

pub type EventHandler = Arc<dyn Fn(&Event) + Send + Sync>;

/// Identifies a single registered handler, so that it can be removed without touching other
/// handlers waiting for the same response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObserverId(u64);

impl ObserverId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

pub trait EventDispatcher: Send + Sync {
    /// Register a one-shot handler for the response with the given function and correlation ids.
    fn add_observer(
        &self,
        function_id: FunctionId,
        correlation_id: CorrelationId,
        handler: EventHandler,
    ) -> ObserverId;

    /// Remove a handler that hasn't been triggered yet. Returns false if it's not registered.
    fn remove_observer(
        &self,
        function_id: FunctionId,
        correlation_id: CorrelationId,
        observer_id: ObserverId,
    ) -> bool;

    fn has_observers(&self, function_id: FunctionId, correlation_id: CorrelationId) -> bool;

    /// Deliver the event to all handlers registered for it and consume their registrations.
    /// Returns the number of handlers called; events nobody waits for are dropped.
    fn raise_event(&self, event: Event) -> usize;
}

type RouteKey = (FunctionId, CorrelationId);

/// Routing table from (function id, correlation id) to the handlers waiting for the response.
///
/// Handlers are invoked on the thread that raises the event, after the table lock has been
/// released, so a handler may freely register new routes or raise further events.
pub struct EventDispatcherImpl {
    routes: Mutex<BTreeMap<RouteKey, Vec<(ObserverId, EventHandler)>>>,
    next_observer_id: AtomicU64,
}

impl EventDispatcherImpl {
    pub fn new() -> Self {
        Self {
            routes: Mutex::new(BTreeMap::new()),
            next_observer_id: AtomicU64::new(0),
        }
    }

    pub fn pending_routes_count(&self) -> usize {
        self.routes.lock().len()
    }
}

impl Default for EventDispatcherImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl EventDispatcher for EventDispatcherImpl {
    fn add_observer(
        &self,
        function_id: FunctionId,
        correlation_id: CorrelationId,
        handler: EventHandler,
    ) -> ObserverId {
        let observer_id = ObserverId(self.next_observer_id.fetch_add(1, Ordering::Relaxed));
        log::trace!(
            "Adding observer {observer_id:?} for {function_id} with correlation id {correlation_id}"
        );

        self.routes
            .lock()
            .entry((function_id, correlation_id))
            .or_default()
            .push((observer_id, handler));

        observer_id
    }

    fn remove_observer(
        &self,
        function_id: FunctionId,
        correlation_id: CorrelationId,
        observer_id: ObserverId,
    ) -> bool {
        let mut routes = self.routes.lock();
        let key = (function_id, correlation_id);

        let Some(handlers) = routes.get_mut(&key) else {
            return false;
        };

        let len_before = handlers.len();
        handlers.retain(|(id, _)| *id != observer_id);
        let removed = handlers.len() != len_before;

        if handlers.is_empty() {
            routes.remove(&key);
        }

        removed
    }

    fn has_observers(&self, function_id: FunctionId, correlation_id: CorrelationId) -> bool {
        self.routes.lock().contains_key(&(function_id, correlation_id))
    }

    fn raise_event(&self, event: Event) -> usize {
        let key = (event.id(), event.correlation_id());
        let handlers = self.routes.lock().remove(&key);

        match handlers {
            Some(handlers) => {
                log::trace!(
                    "Delivering {} with correlation id {} to {} observer(s)",
                    event.id(),
                    event.correlation_id(),
                    handlers.len()
                );
                for (_, handler) in &handlers {
                    handler(&event);
                }
                handlers.len()
            }
            None => {
                log::debug!(
                    "No observers for {} with correlation id {}, event dropped",
                    event.id(),
                    event.correlation_id()
                );
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use common::{Message, ResultCode};

    use super::*;

    #[ctor::ctor]
    fn init() {
        logging::init_logging();
    }

    fn response(cid: u32) -> Event {
        Event::new(Message::response(
            FunctionId::RcGetInteriorVehicleData,
            CorrelationId::new(cid),
            ResultCode::Success,
            serde_json::json!({}),
        ))
    }

    fn counting_handler(counter: &Arc<AtomicUsize>) -> EventHandler {
        let counter = Arc::clone(counter);
        Arc::new(move |_event: &Event| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn delivered_exactly_once() {
        let dispatcher = EventDispatcherImpl::new();
        let counter = Arc::new(AtomicUsize::new(0));

        dispatcher.add_observer(
            FunctionId::RcGetInteriorVehicleData,
            CorrelationId::new(1),
            counting_handler(&counter),
        );

        assert_eq!(dispatcher.raise_event(response(1)), 1);
        assert_eq!(dispatcher.raise_event(response(1)), 0);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert_eq!(dispatcher.pending_routes_count(), 0);
    }

    #[test]
    fn unmatched_events_are_dropped() {
        let dispatcher = EventDispatcherImpl::new();
        let counter = Arc::new(AtomicUsize::new(0));

        dispatcher.add_observer(
            FunctionId::RcGetInteriorVehicleData,
            CorrelationId::new(1),
            counting_handler(&counter),
        );

        // Same correlation id, different function
        let other = Event::new(Message::error_response(
            FunctionId::AppServiceGetAppServiceData,
            CorrelationId::new(1),
            ResultCode::Rejected,
        ));
        assert_eq!(dispatcher.raise_event(other), 0);
        assert_eq!(dispatcher.raise_event(response(2)), 0);

        assert_eq!(counter.load(Ordering::SeqCst), 0);
        assert!(dispatcher.has_observers(
            FunctionId::RcGetInteriorVehicleData,
            CorrelationId::new(1)
        ));
    }

    #[test]
    fn all_handlers_of_a_route_are_called() {
        let dispatcher = EventDispatcherImpl::new();
        let counter = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            dispatcher.add_observer(
                FunctionId::RcGetInteriorVehicleData,
                CorrelationId::new(5),
                counting_handler(&counter),
            );
        }

        assert_eq!(dispatcher.raise_event(response(5)), 3);
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn remove_single_observer() {
        let dispatcher = EventDispatcherImpl::new();
        let kept = Arc::new(AtomicUsize::new(0));
        let removed = Arc::new(AtomicUsize::new(0));
        let fid = FunctionId::RcGetInteriorVehicleData;
        let cid = CorrelationId::new(4);

        dispatcher.add_observer(fid, cid, counting_handler(&kept));
        let removed_id = dispatcher.add_observer(fid, cid, counting_handler(&removed));

        assert!(dispatcher.remove_observer(fid, cid, removed_id));
        assert!(!dispatcher.remove_observer(fid, cid, removed_id));

        assert_eq!(dispatcher.raise_event(response(4)), 1);
        assert_eq!(kept.load(Ordering::SeqCst), 1);
        assert_eq!(removed.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn removing_last_observer_drops_route() {
        let dispatcher = EventDispatcherImpl::new();
        let fid = FunctionId::RcGetInteriorVehicleData;
        let cid = CorrelationId::new(4);

        let id = dispatcher.add_observer(fid, cid, Arc::new(|_: &Event| {}));
        assert!(dispatcher.remove_observer(fid, cid, id));
        assert!(!dispatcher.has_observers(fid, cid));
        assert_eq!(dispatcher.pending_routes_count(), 0);
    }

    #[test]
    fn handler_may_reenter_dispatcher() {
        let dispatcher = Arc::new(EventDispatcherImpl::new());
        let counter = Arc::new(AtomicUsize::new(0));

        let handler: EventHandler = {
            let dispatcher = Arc::clone(&dispatcher);
            let counter = Arc::clone(&counter);
            Arc::new(move |event: &Event| {
                // Chain the next response, like a fan-out to a queued requester does.
                let next = CorrelationId::new(event.correlation_id().as_u32() + 1);
                dispatcher.add_observer(event.id(), next, counting_handler(&counter));
                dispatcher.raise_event(response(next.as_u32()));
            })
        };

        dispatcher.add_observer(
            FunctionId::RcGetInteriorVehicleData,
            CorrelationId::new(1),
            handler,
        );
        assert_eq!(dispatcher.raise_event(response(1)), 1);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
}
