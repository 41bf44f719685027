//! End-to-end tests: real HTTP requests in, real WebSocket frames out.

#![allow(clippy::panic, clippy::indexing_slicing)]

use std::net::SocketAddr;
use std::time::Duration;

use futures_util::StreamExt;
use serde_json::{Value, json};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

use scene_relay::api::build_app;
use scene_relay::app_state::AppState;
use scene_relay::config::RelayConfig;

type Listener = WebSocketStream<MaybeTlsStream<TcpStream>>;

const FRAME_TIMEOUT: Duration = Duration::from_secs(2);

async fn spawn_relay() -> SocketAddr {
    let Ok(listener) = tokio::net::TcpListener::bind("127.0.0.1:0").await else {
        panic!("should bind an ephemeral port");
    };
    let Ok(addr) = listener.local_addr() else {
        panic!("listener should have an address");
    };
    let app = build_app(AppState::new(&RelayConfig::default()));
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    addr
}

async fn connect(addr: SocketAddr, path: &str) -> Listener {
    let Ok((stream, _)) = connect_async(format!("ws://{addr}{path}")).await else {
        panic!("websocket should connect");
    };
    stream
}

async fn post(addr: SocketAddr, route: &str, body: Value) -> (u16, Value) {
    let client = reqwest::Client::new();
    let Ok(response) = client
        .post(format!("http://{addr}/{route}"))
        .json(&body)
        .send()
        .await
    else {
        panic!("request to {route} should complete");
    };
    let status = response.status().as_u16();
    let Ok(ack) = response.json::<Value>().await else {
        panic!("ack should be JSON");
    };
    (status, ack)
}

async fn next_text(listener: &mut Listener) -> String {
    loop {
        let Ok(Some(Ok(msg))) = tokio::time::timeout(FRAME_TIMEOUT, listener.next()).await else {
            panic!("expected a frame");
        };
        if let Message::Text(text) = msg {
            return text.as_str().to_string();
        }
    }
}

async fn next_frame(listener: &mut Listener) -> Value {
    loop {
        let Ok(Some(Ok(msg))) = tokio::time::timeout(FRAME_TIMEOUT, listener.next()).await else {
            panic!("expected a frame");
        };
        if let Message::Text(text) = msg {
            let Ok(value) = serde_json::from_str::<Value>(text.as_str()) else {
                panic!("frame should be JSON");
            };
            return value;
        }
    }
}

#[tokio::test]
async fn command_is_broadcast_to_every_listener() {
    let addr = spawn_relay().await;
    let mut first = connect(addr, "/ws").await;
    let mut second = connect(addr, "/").await;

    let (status, ack) = post(
        addr,
        "startCombat",
        json!({ "party": ["Ayla"], "enemies": ["Wyrm"], "universe": "ember" }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(ack, json!({ "status": "ok" }));

    let expected = json!({
        "event": "combatStarted",
        "payload": { "party": ["Ayla"], "enemies": ["Wyrm"], "universe": "ember" },
    });
    assert_eq!(next_frame(&mut first).await, expected);
    assert_eq!(next_frame(&mut second).await, expected);
}

#[tokio::test]
async fn every_route_acknowledges_over_http() {
    let addr = spawn_relay().await;
    for route in [
        "startCombat",
        "endCombat",
        "updateBossPhase",
        "triggerCutscene",
        "playBanterLine",
        "queueBanter",
        "playVoiceLine",
        "updateRelationship",
        "setUniverseUI",
        "setCharacterPortrait",
        "playBattleIntroAnimation",
        "playMusic",
        "setMusicPhase",
        "layerMusic",
        "activateWorldMechanic",
        "storyTriggerCombat",
    ] {
        let (status, ack) = post(addr, route, json!({})).await;
        assert_eq!(status, 200, "{route}");
        assert_eq!(ack, json!({ "status": "ok" }), "{route}");
    }
}

#[tokio::test]
async fn story_trigger_emits_only_on_phrase() {
    let addr = spawn_relay().await;
    let mut listener = connect(addr, "/ws").await;

    post(addr, "storyTriggerCombat", json!({ "storyText": "The heroes arrive." })).await;
    post(
        addr,
        "storyTriggerCombat",
        json!({ "storyText": "The heroes arrive. Begin combat now." }),
    )
    .await;

    let frame = next_frame(&mut listener).await;
    assert_eq!(frame["event"], "combatStartedFromStory");
    assert_eq!(frame["payload"]["storyText"], "The heroes arrive. Begin combat now.");
    assert_eq!(frame["payload"]["triggerPhrase"], "Begin combat");
}

#[tokio::test]
async fn boss_phase_without_text_skips_cutscene() {
    let addr = spawn_relay().await;
    let mut listener = connect(addr, "/ws").await;

    post(addr, "updateBossPhase", json!({ "phaseNumber": 2 })).await;
    post(addr, "endCombat", json!({})).await;

    assert_eq!(
        next_frame(&mut listener).await,
        json!({ "event": "bossPhaseChanged", "payload": { "phase": 2 } })
    );
    assert_eq!(next_frame(&mut listener).await["event"], "combatEnded");
}

#[tokio::test]
async fn battle_intro_defaults_animation_type() {
    let addr = spawn_relay().await;
    let mut listener = connect(addr, "/ws").await;

    post(addr, "playBattleIntroAnimation", json!({})).await;

    assert_eq!(
        next_frame(&mut listener).await,
        json!({ "event": "battleIntroAnimation", "payload": { "animationType": "x-slash" } })
    );
}

#[tokio::test]
async fn closed_listener_does_not_break_broadcast() {
    let addr = spawn_relay().await;
    let mut open = connect(addr, "/ws").await;
    let mut closing = connect(addr, "/ws").await;
    let _ = closing.close(None).await;
    drop(closing);

    let (status, _) = post(addr, "playMusic", json!({ "src": "battle.ogg", "fadeMs": 500 })).await;
    assert_eq!(status, 200);
    assert_eq!(
        next_frame(&mut open).await,
        json!({ "event": "musicPlay", "payload": { "src": "battle.ogg", "fadeMs": 500 } })
    );
}

#[tokio::test]
async fn identical_commands_are_not_deduplicated() {
    let addr = spawn_relay().await;
    let mut listener = connect(addr, "/ws").await;
    let body = json!({ "character": "Brann", "line": "Hold the line!" });

    post(addr, "playBanterLine", body.clone()).await;
    post(addr, "playBanterLine", body).await;

    let first = next_frame(&mut listener).await;
    let second = next_frame(&mut listener).await;
    assert_eq!(first["event"], "banterLine");
    assert_eq!(first, second);
}

#[tokio::test]
async fn frames_keep_field_and_nested_key_order() {
    let addr = spawn_relay().await;
    let mut listener = connect(addr, "/ws").await;

    let Ok(response) = reqwest::Client::new()
        .post(format!("http://{addr}/activateWorldMechanic"))
        .header("content-type", "application/json")
        .body(r#"{"payload":{"zeta":1,"alpha":2},"event":"eclipse","universe":"ember"}"#)
        .send()
        .await
    else {
        panic!("request should complete");
    };
    assert_eq!(response.status().as_u16(), 200);

    assert_eq!(
        next_text(&mut listener).await,
        r#"{"event":"worldMechanic","payload":{"universe":"ember","event":"eclipse","payload":{"zeta":1,"alpha":2}}}"#
    );
}
