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

use application_manager::{ApplicationManagerImpl, ApplicationQuery, RpcServiceImpl};
use common::{AppId, CorrelationId, ResultCode};
use event_engine::{Event, EventDispatcher, EventDispatcherImpl};
use resumption::{ResumableExtension, ResumptionStatusTracker, SavedApplication};
use rstest::rstest;
use serde_json::json;
use test_utils::random::{make_seedable_rng, Rng, Seed};
use tokio::sync::mpsc::UnboundedReceiver;

use super::*;
use crate::MODULE_DATA_FIELD;

#[ctor::ctor]
fn init() {
    logging::init_logging();
}

struct TestEnv {
    manager: Arc<ApplicationManagerImpl>,
    dispatcher: Arc<EventDispatcherImpl>,
    hmi_rx: UnboundedReceiver<Message>,
    mobile_rx: UnboundedReceiver<Message>,
    plugin: RcPlugin,
}

impl TestEnv {
    fn new() -> Self {
        let (rpc_service, hmi_rx, mobile_rx) = RpcServiceImpl::new();
        let dispatcher = Arc::new(EventDispatcherImpl::new());
        let manager = Arc::new(ApplicationManagerImpl::new(
            Arc::new(rpc_service),
            Arc::clone(&dispatcher) as Arc<dyn EventDispatcher>,
        ));
        let plugin = RcPlugin::new(
            Arc::clone(&manager) as Arc<dyn ApplicationManager>,
            ResumptionConfig::default(),
        );

        Self {
            manager,
            dispatcher,
            hmi_rx,
            mobile_rx,
            plugin,
        }
    }

    fn register(&self, app_id: u32) -> (Arc<Application>, Arc<RcAppExtension>) {
        let app = Arc::new(Application::new(AppId::new(app_id)));
        assert!(self.manager.registry().register(Arc::clone(&app)));
        let extension = self.plugin.on_application_registered(&app);
        (app, extension)
    }

    fn unregister(&self, app: &Application) {
        self.plugin.on_application_unregistered(app);
        self.manager.registry().unregister(app.app_id());
    }

    fn sent_to_hmi(&mut self) -> Vec<Message> {
        std::iter::from_fn(|| self.hmi_rx.try_recv().ok()).collect()
    }

    fn sent_to_mobile(&mut self) -> Vec<Message> {
        std::iter::from_fn(|| self.mobile_rx.try_recv().ok()).collect()
    }
}

fn climate() -> ModuleUid {
    ModuleUid::new(ModuleType::Climate, "id1")
}

fn saved_with(modules: &[&ModuleUid]) -> SavedApplication {
    let mut saved = SavedApplication::new();
    saved.set_subscription_list(MODULE_DATA_FIELD, modules.iter().map(|m| m.to_string()));
    saved
}

fn interior_data_notification(module: &ModuleUid, data: serde_json::Value) -> Message {
    Message::notification(
        FunctionId::RcOnInteriorVehicleData,
        json!({
            "moduleData": {
                "moduleType": module.module_type.to_string(),
                "moduleId": module.module_id,
                module.module_type.data_key(): data,
            }
        }),
    )
}

#[test]
fn shared_module_resumed_with_one_request() {
    let mut env = TestEnv::new();
    let tracker =
        ResumptionStatusTracker::new(Arc::clone(&env.manager) as Arc<dyn ApplicationManager>);
    let subscriber = tracker.subscriber();
    let saved = saved_with(&[&climate()]);

    let (app_a, ext_a) = env.register(1);
    let (app_b, ext_b) = env.register(2);

    ext_a.process_resumption(&app_a, &saved, &subscriber, env.manager.as_ref()).unwrap();
    let sent = env.sent_to_hmi();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0].msg_params,
        json!({"moduleType": "CLIMATE", "moduleId": "id1", "subscribe": true})
    );

    ext_b.process_resumption(&app_b, &saved, &subscriber, env.manager.as_ref()).unwrap();
    assert!(env.sent_to_hmi().is_empty());
    assert_eq!(env.plugin.resumption_handler().frozen_count(&climate()), 1);

    env.dispatcher.raise_event(Event::new(Message::response(
        FunctionId::RcGetInteriorVehicleData,
        sent[0].correlation_id,
        ResultCode::Success,
        json!({"moduleData": {"moduleType": "CLIMATE", "climateControlData": {"fanSpeed": 4}}}),
    )));

    let status_b = tracker.status(app_b.app_id()).unwrap();
    assert!(status_b.is_successful());
    assert_eq!(status_b.succeeded.len(), 1);
    assert!(tracker.status(app_a.app_id()).unwrap().is_successful());

    assert_eq!(env.plugin.cache().retrieve(&climate()), Some(json!({"fanSpeed": 4})));
    assert!(ext_a.is_subscribed_to_interior_vehicle_data(&climate()));
    assert!(ext_b.is_subscribed_to_interior_vehicle_data(&climate()));
}

#[test]
fn failed_subscription_is_not_cached() {
    let mut env = TestEnv::new();
    let tracker =
        ResumptionStatusTracker::new(Arc::clone(&env.manager) as Arc<dyn ApplicationManager>);
    let (app, ext) = env.register(1);

    let subscriber = tracker.subscriber();
    ext.process_resumption(&app, &saved_with(&[&climate()]), &subscriber, env.manager.as_ref())
        .unwrap();
    let sent = env.sent_to_hmi();
    let [request] = &sent[..] else { panic!("one request expected") };

    env.dispatcher.raise_event(Event::new(Message::error_response(
        FunctionId::RcGetInteriorVehicleData,
        request.correlation_id,
        ResultCode::Rejected,
    )));

    assert!(!env.plugin.cache().contains(&climate()));
    let status = tracker.status(app.app_id()).unwrap();
    assert!(status.is_finished());
    assert!(!status.is_successful());
}

#[test]
fn notification_cached_and_forwarded_to_subscribers() {
    let mut env = TestEnv::new();
    let (_app_a, ext_a) = env.register(1);
    let (_app_b, _ext_b) = env.register(2);
    let (_app_c, ext_c) = env.register(3);
    ext_a.subscribe_to_interior_vehicle_data(climate());
    ext_c.subscribe_to_interior_vehicle_data(climate());

    let notification = interior_data_notification(&climate(), json!({"acEnable": true}));
    env.plugin.on_interior_vehicle_data(&notification);

    assert_eq!(env.plugin.cache().retrieve(&climate()), Some(json!({"acEnable": true})));
    let forwarded = env.sent_to_mobile();
    let receivers: Vec<_> = forwarded.iter().filter_map(|msg| msg.connection_key).collect();
    assert_eq!(receivers, vec![AppId::new(1), AppId::new(3)]);
    for message in &forwarded {
        assert_eq!(message.function_id, FunctionId::OnInteriorVehicleData);
        assert_eq!(message.param(&["moduleData", "moduleId"]), Some(&json!("id1")));
    }
}

#[test]
fn notification_without_subscribers_is_dropped() {
    let mut env = TestEnv::new();
    env.register(1);

    let notification = interior_data_notification(&climate(), json!({"acEnable": true}));
    env.plugin.on_interior_vehicle_data(&notification);
    assert!(env.plugin.cache().is_empty());
    assert!(env.sent_to_mobile().is_empty());

    let malformed =
        Message::notification(FunctionId::RcOnInteriorVehicleData, json!({"moduleData": {}}));
    env.plugin.on_interior_vehicle_data(&malformed);
    assert!(env.sent_to_mobile().is_empty());
}

#[rstest]
#[trace]
#[case(Seed::from_entropy())]
fn last_subscriber_releases_module(#[case] seed: Seed) {
    let mut rng = make_seedable_rng(seed);
    let mut env = TestEnv::new();

    let app_count = rng.gen_range(2..6);
    let apps: Vec<_> = (1..=app_count).map(|id| env.register(id)).collect();
    for (_, extension) in &apps {
        extension.subscribe_to_interior_vehicle_data(climate());
    }
    env.plugin.cache().add(climate(), json!({"fanSpeed": 1}));

    let (last, others) = apps.split_last().unwrap();
    for (app, _) in others {
        env.unregister(app);
        assert!(env.sent_to_hmi().is_empty());
        assert!(env.plugin.cache().contains(&climate()));
    }

    env.unregister(&last.0);
    let sent = env.sent_to_hmi();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].function_id, FunctionId::RcGetInteriorVehicleData);
    assert_eq!(sent[0].param(&["subscribe"]), Some(&json!(false)));
    assert!(!env.plugin.cache().contains(&climate()));
    assert!(env.manager.applications().is_empty());
}

#[test]
fn late_response_for_released_module_is_not_cached() {
    let mut env = TestEnv::new();
    let tracker =
        ResumptionStatusTracker::new(Arc::clone(&env.manager) as Arc<dyn ApplicationManager>);
    let (app, ext) = env.register(1);

    let subscriber = tracker.subscriber();
    ext.process_resumption(&app, &saved_with(&[&climate()]), &subscriber, env.manager.as_ref())
        .unwrap();
    let sent = env.sent_to_hmi();
    let [request] = &sent[..] else { panic!("one request expected") };

    env.unregister(&app);
    let released = env.sent_to_hmi();
    let [unsubscribe] = &released[..] else { panic!("one unsubscribe expected") };
    assert_eq!(unsubscribe.param(&["subscribe"]), Some(&json!(false)));

    env.dispatcher.raise_event(Event::new(Message::response(
        FunctionId::RcGetInteriorVehicleData,
        request.correlation_id,
        ResultCode::Success,
        json!({"moduleData": {"moduleType": "CLIMATE", "climateControlData": {"fanSpeed": 4}}}),
    )));

    assert!(!env.plugin.resumption_handler().is_waiting_for_response(&climate()));
    assert!(!env.plugin.cache().contains(&climate()));
}

#[test]
fn unsubscribe_is_sent_even_if_rejected() {
    let mut rpc_service = mocks::MockRpcService::new();
    rpc_service
        .expect_manage_hmi_command()
        .withf(|msg| msg.param(&["subscribe"]) == Some(&json!(false)))
        .times(1)
        .returning(|msg| {
            Err(application_manager::RpcServiceError::Rejected(
                msg.function_id,
                "HMI is busy".to_owned(),
            ))
        });
    let manager = Arc::new(ApplicationManagerImpl::new(
        Arc::new(rpc_service),
        Arc::new(EventDispatcherImpl::new()),
    ));
    let plugin = RcPlugin::new(
        Arc::clone(&manager) as Arc<dyn ApplicationManager>,
        ResumptionConfig::default(),
    );

    let app = Arc::new(Application::new(AppId::new(1)));
    manager.registry().register(Arc::clone(&app));
    let extension = plugin.on_application_registered(&app);
    extension.subscribe_to_interior_vehicle_data(climate());
    plugin.cache().add(climate(), json!({}));

    plugin.on_application_unregistered(&app);
    assert!(!plugin.cache().contains(&climate()));
    assert!(app.extension::<RcAppExtension>().is_none());
}

#[test]
fn unregistered_app_is_not_answered_from_the_queue() {
    let mut env = TestEnv::new();
    let saved = saved_with(&[&climate()]);
    let issued = Arc::new(parking_lot::Mutex::new(Vec::new()));
    let subscriber: resumption::Subscriber = {
        let issued = Arc::clone(&issued);
        Arc::new(move |app_id: AppId, request: resumption::ResumptionRequest| {
            issued.lock().push((app_id, request.request_ids.correlation_id))
        })
    };

    let (app_a, ext_a) = env.register(1);
    let (app_b, ext_b) = env.register(2);
    ext_a.process_resumption(&app_a, &saved, &subscriber, env.manager.as_ref()).unwrap();
    ext_b.process_resumption(&app_b, &saved, &subscriber, env.manager.as_ref()).unwrap();
    let sent = env.sent_to_hmi();
    let [request] = &sent[..] else { panic!("one request expected") };

    env.unregister(&app_b);
    assert_eq!(env.plugin.resumption_handler().frozen_count(&climate()), 0);
    // App A still holds the subscription, so nothing is released
    assert!(env.sent_to_hmi().is_empty());

    let cid_b: CorrelationId = issued.lock()[1].1;
    assert!(!env.dispatcher.has_observers(FunctionId::RcGetInteriorVehicleData, cid_b));
    let delivered = env.dispatcher.raise_event(Event::new(Message::response(
        FunctionId::RcGetInteriorVehicleData,
        request.correlation_id,
        ResultCode::Success,
        json!({}),
    )));
    assert_eq!(delivered, 1);
    assert!(!env.plugin.resumption_handler().is_waiting_for_response(&climate()));
}

#[test]
fn revert_allows_fresh_requests() {
    let mut env = TestEnv::new();
    let saved = saved_with(&[&climate()]);
    let subscriber: resumption::Subscriber =
        Arc::new(|_: AppId, _: resumption::ResumptionRequest| {});

    let (app_a, ext_a) = env.register(1);
    ext_a.process_resumption(&app_a, &saved, &subscriber, env.manager.as_ref()).unwrap();
    assert_eq!(env.sent_to_hmi().len(), 1);

    env.plugin.on_resumption_revert();
    assert_eq!(env.dispatcher.pending_routes_count(), 0);

    let (app_b, ext_b) = env.register(2);
    ext_b.process_resumption(&app_b, &saved, &subscriber, env.manager.as_ref()).unwrap();
    assert_eq!(env.sent_to_hmi().len(), 1);
}
