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

//! Coordination of the subscription requests issued while resuming applications.
//!
//! Several applications may resume the same subscription at once. Only one request per
//! resource is ever in flight towards the HMI; the others are frozen behind it. A successful
//! response is fanned out to the frozen requests under their own correlation ids. After a
//! failure the next frozen request is sent instead, so each waiting application gets its own
//! attempt.

use std::{
    collections::{BTreeMap, BTreeSet, VecDeque},
    fmt::{Debug, Display},
    sync::{Arc, Weak},
};

use application_manager::{Application, ApplicationManager};
use common::{AppId, CorrelationId, Message, ResultCode};
use event_engine::{Event, EventHandler, ObserverId};
use logging::log;
use parking_lot::Mutex;
use utils::debug_assert_or_log;

use crate::{RequestIds, ResumptionConfig, ResumptionRequest, Subscriber};

/// A family of subscriptions sharing one HMI request type, e.g. interior vehicle data modules.
pub trait SubscriptionKind: Send + Sync + 'static {
    /// Identifies the shared resource a subscription is for.
    type Key: Ord + Clone + Debug + Display + Send + Sync + 'static;

    /// The resources the application has to be resubscribed to.
    fn subscriptions(&self, app: &Application) -> Vec<Self::Key>;

    /// Build the HMI request subscribing to the resource.
    fn create_subscription_request(&self, key: &Self::Key, correlation_id: CorrelationId)
        -> Message;

    /// Called with a successful HMI response, before it's fanned out to the frozen requests.
    fn on_subscription_confirmed(&self, key: &Self::Key, response: &Message);
}

/// Object-safe face of the coordinator, as seen by the rest of the resumption machinery.
pub trait ExtensionPendingResumptionHandler: Send + Sync {
    /// Issue (or freeze) a subscription request for every resource the application needs.
    fn handle_resumption_subscription_request(&self, app: &Application, subscriber: &Subscriber);

    /// Handle the HMI response to an in-flight request.
    fn on_event(&self, event: &Event);

    /// Forget everything that is in flight or frozen. Observers of the forgotten requests are
    /// answered with `ABORTED`.
    fn on_resumption_revert(&self);

    /// Drop the frozen requests of an application that went away, answering them with
    /// `ABORTED`.
    fn on_application_unregistered(&self, app_id: AppId);
}

#[derive(Debug, Clone)]
struct PendingRequest<K> {
    app_id: AppId,
    key: K,
    request: ResumptionRequest,
}

#[derive(Debug)]
struct InFlightRequest<K> {
    pending: PendingRequest<K>,
    observer_id: ObserverId,
}

#[derive(Debug)]
struct HandlerState<K> {
    /// Requests sent to the HMI, by correlation id.
    pending_requests: BTreeMap<CorrelationId, InFlightRequest<K>>,
    /// Requests queued behind an in-flight one for the same resource.
    frozen_resumptions: BTreeMap<K, VecDeque<PendingRequest<K>>>,
    /// Resources with a request in flight.
    waiting_for_response: BTreeSet<K>,
}

impl<K: Ord + Clone + Debug> HandlerState<K> {
    fn new() -> Self {
        Self {
            pending_requests: BTreeMap::new(),
            frozen_resumptions: BTreeMap::new(),
            waiting_for_response: BTreeSet::new(),
        }
    }

    fn pop_frozen(&mut self, key: &K) -> Option<PendingRequest<K>> {
        let queue = self.frozen_resumptions.get_mut(key)?;
        let next = queue.pop_front();
        if queue.is_empty() {
            self.frozen_resumptions.remove(key);
        }
        next
    }

    fn check_consistency(&self) {
        debug_assert_or_log!(
            self.pending_requests.len() == self.waiting_for_response.len(),
            "{} requests in flight but {} resources waiting",
            self.pending_requests.len(),
            self.waiting_for_response.len(),
        );
        debug_assert_or_log!(
            self.pending_requests
                .values()
                .all(|in_flight| self.waiting_for_response.contains(&in_flight.pending.key)),
            "in-flight request for a resource which isn't waiting"
        );
        debug_assert_or_log!(
            self.frozen_resumptions
                .iter()
                .all(|(key, queue)| !queue.is_empty() && self.waiting_for_response.contains(key)),
            "frozen requests without a request in flight"
        );
    }
}

pub struct PendingResumptionHandler<K: SubscriptionKind> {
    kind: K,
    app_manager: Arc<dyn ApplicationManager>,
    config: ResumptionConfig,
    state: Mutex<HandlerState<K::Key>>,
    self_ref: Weak<Self>,
}

impl<K: SubscriptionKind> PendingResumptionHandler<K> {
    pub fn new(
        kind: K,
        app_manager: Arc<dyn ApplicationManager>,
        config: ResumptionConfig,
    ) -> Arc<Self> {
        Arc::new_cyclic(|self_ref| Self {
            kind,
            app_manager,
            config,
            state: Mutex::new(HandlerState::new()),
            self_ref: self_ref.clone(),
        })
    }

    pub fn kind(&self) -> &K {
        &self.kind
    }

    pub fn is_waiting_for_response(&self, key: &K::Key) -> bool {
        self.state.lock().waiting_for_response.contains(key)
    }

    pub fn frozen_count(&self, key: &K::Key) -> usize {
        self.state.lock().frozen_resumptions.get(key).map_or(0, VecDeque::len)
    }

    pub fn pending_requests_count(&self) -> usize {
        self.state.lock().pending_requests.len()
    }

    fn subscribe_on_event(&self, request: &ResumptionRequest) -> ObserverId {
        let self_ref = self.self_ref.clone();
        let handler: EventHandler = Arc::new(move |event: &Event| {
            if let Some(this) = self_ref.upgrade() {
                this.on_event(event);
            }
        });

        self.app_manager.event_dispatcher().add_observer(
            request.request_ids.function_id,
            request.request_ids.correlation_id,
            handler,
        )
    }

    fn send_request(&self, request: ResumptionRequest) {
        let ids = request.request_ids;
        log::debug!(
            "Sending resumption request {} with correlation id {}",
            ids.function_id,
            ids.correlation_id
        );

        if let Err(err) = self.app_manager.rpc_service().manage_hmi_command(request.message) {
            // No response will ever come, so everybody observing the request is told it failed
            log::warn!(
                "Failed to send resumption request with correlation id {}: {err}",
                ids.correlation_id
            );
            self.raise_failure(ids, ResultCode::GenericError);
        }
    }

    fn raise_failure(&self, ids: RequestIds, result_code: ResultCode) {
        self.app_manager.event_dispatcher().raise_event(Event::new(Message::error_response(
            ids.function_id,
            ids.correlation_id,
            result_code,
        )));
    }

    /// Answer requests the handler gave up on, so that their observers aren't left waiting.
    fn abort(&self, abandoned: Vec<RequestIds>) {
        for ids in abandoned {
            log::debug!("Aborting resumption request with correlation id {}", ids.correlation_id);
            self.raise_failure(ids, ResultCode::Aborted);
        }
    }
}

impl<K: SubscriptionKind> ExtensionPendingResumptionHandler for PendingResumptionHandler<K> {
    fn handle_resumption_subscription_request(&self, app: &Application, subscriber: &Subscriber) {
        let app_id = app.app_id();
        let subscriptions = self.kind.subscriptions(app);
        log::trace!(
            "Resuming {} subscriptions of application {app_id}",
            subscriptions.len()
        );

        let mut to_send = Vec::new();
        {
            let mut state = self.state.lock();

            if state.pending_requests.is_empty() {
                debug_assert_or_log!(
                    state.waiting_for_response.is_empty(),
                    "stale waiting resources: {:?}",
                    state.waiting_for_response
                );
                state.waiting_for_response.clear();
                state.frozen_resumptions.clear();
            }

            for key in subscriptions {
                let correlation_id = self.app_manager.next_hmi_correlation_id();
                let request = ResumptionRequest::new(
                    self.kind.create_subscription_request(&key, correlation_id),
                );
                let pending = PendingRequest {
                    app_id,
                    key: key.clone(),
                    request: request.clone(),
                };

                if state.waiting_for_response.contains(&key) {
                    log::debug!(
                        "Freezing request {correlation_id} of application {app_id} for {key}"
                    );
                    state.frozen_resumptions.entry(key).or_default().push_back(pending);
                    subscriber(app_id, request);
                } else {
                    log::debug!(
                        "Issuing request {correlation_id} of application {app_id} for {key}"
                    );
                    let observer_id = self.subscribe_on_event(&request);
                    state.pending_requests.insert(
                        correlation_id,
                        InFlightRequest {
                            pending,
                            observer_id,
                        },
                    );
                    state.waiting_for_response.insert(key);
                    subscriber(app_id, request.clone());
                    to_send.push(request);
                }
            }

            state.check_consistency();
        }

        for request in to_send {
            self.send_request(request);
        }
    }

    fn on_event(&self, event: &Event) {
        let correlation_id = event.correlation_id();
        let response = event.message();

        let mut fan_out = Vec::new();
        let mut retry = None;
        {
            let mut state = self.state.lock();

            let Some(in_flight) = state.pending_requests.remove(&correlation_id) else {
                log::error!("Not waiting for message with correlation id {correlation_id}");
                return;
            };
            self.app_manager.event_dispatcher().remove_observer(
                in_flight.pending.request.request_ids.function_id,
                correlation_id,
                in_flight.observer_id,
            );
            let key = in_flight.pending.key;

            if response.is_successful_response() {
                log::debug!("Resumption of subscription to {key} is successful");
                self.kind.on_subscription_confirmed(&key, response);
                state.waiting_for_response.remove(&key);

                fan_out = state
                    .frozen_resumptions
                    .remove(&key)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|frozen| {
                        log::debug!(
                            "Answering frozen request {} of application {}",
                            frozen.request.request_ids.correlation_id,
                            frozen.app_id
                        );
                        response
                            .clone()
                            .with_correlation_id(frozen.request.request_ids.correlation_id)
                    })
                    .collect::<Vec<_>>();
            } else {
                log::debug!(
                    "Resumption of subscription to {key} failed for application {}",
                    in_flight.pending.app_id
                );

                match state.pop_frozen(&key) {
                    Some(next) => {
                        log::debug!(
                            "Retrying with frozen request {} of application {}",
                            next.request.request_ids.correlation_id,
                            next.app_id
                        );
                        let observer_id = self.subscribe_on_event(&next.request);
                        retry = Some(next.request.clone());
                        state.pending_requests.insert(
                            next.request.request_ids.correlation_id,
                            InFlightRequest {
                                pending: next,
                                observer_id,
                            },
                        );
                    }
                    None => {
                        log::debug!("No frozen requests left for {key}");
                        state.waiting_for_response.remove(&key);
                    }
                }
            }

            state.check_consistency();
        }

        for message in fan_out {
            self.app_manager.event_dispatcher().raise_event(Event::new(message));
        }
        if let Some(request) = retry {
            self.send_request(request);
        }
    }

    fn on_resumption_revert(&self) {
        let abandoned = {
            let mut state = self.state.lock();
            log::debug!(
                "Reverting resumption: {} requests in flight, {} resources with frozen requests",
                state.pending_requests.len(),
                state.frozen_resumptions.len()
            );

            let mut abandoned = Vec::new();
            for (correlation_id, in_flight) in std::mem::take(&mut state.pending_requests) {
                self.app_manager.event_dispatcher().remove_observer(
                    in_flight.pending.request.request_ids.function_id,
                    correlation_id,
                    in_flight.observer_id,
                );
                abandoned.push(in_flight.pending.request.request_ids);
            }
            abandoned.extend(
                std::mem::take(&mut state.frozen_resumptions)
                    .into_values()
                    .flatten()
                    .map(|frozen| frozen.request.request_ids),
            );
            state.waiting_for_response.clear();
            abandoned
        };

        self.abort(abandoned);
    }

    fn on_application_unregistered(&self, app_id: AppId) {
        if !*self.config.drop_frozen_on_unregister {
            return;
        }

        let dropped = {
            let mut state = self.state.lock();
            let mut dropped = Vec::new();
            state.frozen_resumptions.retain(|_, queue| {
                queue.retain(|frozen| {
                    let keep = frozen.app_id != app_id;
                    if !keep {
                        dropped.push(frozen.request.request_ids);
                    }
                    keep
                });
                !queue.is_empty()
            });
            state.check_consistency();
            dropped
        };

        if !dropped.is_empty() {
            log::debug!(
                "Dropped {} frozen requests of unregistered application {app_id}",
                dropped.len()
            );
        }
        self.abort(dropped);
    }
}
