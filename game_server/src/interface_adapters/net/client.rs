use crate::domain::state::FrameSnapshot;
use crate::interface_adapters::clients::leaderboard::{LeaderboardClient, LeaderboardClientError};
use crate::interface_adapters::protocol::{
    ClientMessage, FrameDto, LeaderboardDto, LeaderboardEntryDto, ServerMessage,
};
use crate::interface_adapters::state::{AppState, SessionSettings};
use crate::use_cases::{GameEvent, GameSession, SessionState, world_task};

use axum::{
    Error,
    extract::{
        State,
        ws::{CloseFrame, Message, WebSocket, WebSocketUpgrade, close_code},
    },
    response::IntoResponse,
};
use futures::SinkExt;
use std::{
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::{Notify, broadcast, mpsc, watch};
use tokio::time::timeout;
use tracing::{Instrument, debug, error, info, info_span, warn};

#[derive(Debug)]
enum NetError {
    // Categorizes connection lifecycle failures so callers can decide policy.
    #[allow(dead_code)]
    Ws(axum::Error),
    #[allow(dead_code)]
    Serialization(serde_json::Error),
    InputClosed,
    FramesClosed,
    SessionStateClosed,
    JoinRequired,
    JoinTimeout,
    ClosedBeforeJoin,
}

impl From<axum::Error> for NetError {
    fn from(e: axum::Error) -> Self {
        NetError::Ws(e)
    }
}

enum LoopControl {
    Continue,
    Disconnect,
}

const LOG_THROTTLE: Duration = Duration::from_secs(2);
const MAX_INVALID_JSON: u32 = 10;
const MAX_PLAYER_NAME_CHARS: usize = 20;
const JOIN_HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(5);
const LEADERBOARD_RESULTS_CAPACITY: usize = 4;

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let leaderboard = state.leaderboard.clone();
    let settings = state.session_settings;
    ws.on_upgrade(move |socket| handle_socket(socket, leaderboard, settings))
}

async fn handle_socket(
    mut socket: WebSocket,
    leaderboard: Arc<LeaderboardClient>,
    settings: SessionSettings,
) {
    // Session id doubles as the log correlation id for this connection.
    let session_id = uuid::Uuid::new_v4().to_string();
    let span = info_span!("conn", session_id = %session_id);

    async move {
        let mut ctx =
            match bootstrap_connection(&mut socket, session_id, leaderboard, settings).await {
                Ok(ctx) => ctx,
                Err(NetError::ClosedBeforeJoin) => {
                    info!("client disconnected before join handshake");
                    return;
                }
                Err(e) => {
                    error!(error = ?e, "failed to bootstrap connection");
                    let _ = socket
                        .send(Message::Close(Some(CloseFrame {
                            code: close_code::POLICY,
                            reason: "bootstrap failed".into(),
                        })))
                        .await;
                    let _ = socket.close().await;
                    return;
                }
            };

        info!(
            player_name = ctx.player_name.as_deref().unwrap_or(""),
            "client connected"
        );

        // Main Client Loop
        if let Err(e) = run_client_loop(&mut socket, &mut ctx).await {
            warn!(error = ?e, "client loop exited with error");
        }
    }
    .instrument(span)
    .await
}

async fn send_message(socket: &mut WebSocket, msg: &ServerMessage) -> Result<usize, NetError> {
    let txt = serde_json::to_string(msg).map_err(NetError::Serialization)?;
    let bytes = txt.len();
    socket
        .send(Message::Text(txt.into()))
        .await
        .map_err(NetError::Ws)?;
    Ok(bytes)
}

struct ConnCtx {
    // Leaderboard name; anonymous sessions never submit.
    pub player_name: Option<String>,
    pub leaderboard: Arc<LeaderboardClient>,

    pub input_tx: mpsc::Sender<GameEvent>,
    pub frame_rx: broadcast::Receiver<FrameSnapshot>,
    pub state_rx: watch::Receiver<SessionState>,
    // Stops this connection's world task.
    pub session_shutdown: Arc<Notify>,
    // Leaderboard results arrive from background requests.
    pub leaderboard_tx: mpsc::Sender<LeaderboardDto>,
    pub leaderboard_rx: mpsc::Receiver<LeaderboardDto>,
    // Highest wave already pushed to the leaderboard this run.
    pub reported_wave: u32,

    pub msgs_in: u64,
    pub msgs_out: u64,
    pub bytes_in: u64,
    pub bytes_out: u64,
    pub frames_lagged: u64,

    pub invalid_json: u32,

    pub last_input_full_log: Instant,
    pub last_frame_lag_log: Instant,
    pub last_invalid_input_log: Instant,

    pub close_frame: Option<CloseFrame>,
}

#[derive(Debug)]
struct JoinHandshake {
    player_name: Option<String>,
    bytes_in: u64,
    msgs_in: u64,
}

async fn bootstrap_connection(
    socket: &mut WebSocket,
    session_id: String,
    leaderboard: Arc<LeaderboardClient>,
    settings: SessionSettings,
) -> Result<ConnCtx, NetError> {
    // Nothing is simulated until the render host has joined.
    let join = match timeout(JOIN_HANDSHAKE_TIMEOUT, read_join_handshake(socket)).await {
        Ok(result) => result?,
        Err(_) => {
            let _ = send_close_with_reason(socket, close_code::POLICY, "join timeout").await;
            return Err(NetError::JoinTimeout);
        }
    };

    // Subscribe before the world task starts so the first frame is not missed.
    let (input_tx, input_rx) = mpsc::channel::<GameEvent>(settings.input_channel_capacity);
    let (frame_tx, frame_rx) =
        broadcast::channel::<FrameSnapshot>(settings.frame_broadcast_capacity);
    let (state_tx, state_rx) = watch::channel(SessionState::Running);
    let session_shutdown = Arc::new(Notify::new());

    let seed = rand::random::<u64>();
    debug!(seed, "starting session world task");
    tokio::spawn(
        world_task(
            input_rx,
            frame_tx,
            state_tx,
            settings.tick_interval,
            session_shutdown.clone(),
            GameSession::new(seed),
        )
        .in_current_span(),
    );

    // Tell the client "This is your session".
    let identity_msg = ServerMessage::Identity { session_id };
    if let Err(err) = send_message(socket, &identity_msg).await {
        session_shutdown.notify_one();
        return Err(err);
    }

    let initial_state = *state_rx.borrow();
    let state_msg = ServerMessage::SessionState(initial_state.into());
    if let Err(err) = send_message(socket, &state_msg).await {
        session_shutdown.notify_one();
        return Err(err);
    }

    let (leaderboard_tx, leaderboard_rx) = mpsc::channel(LEADERBOARD_RESULTS_CAPACITY);
    spawn_leaderboard_fetch(leaderboard.clone(), leaderboard_tx.clone());

    let now = Instant::now() - LOG_THROTTLE;
    Ok(ConnCtx {
        player_name: join.player_name,
        leaderboard,
        input_tx,
        frame_rx,
        state_rx,
        session_shutdown,
        leaderboard_tx,
        leaderboard_rx,
        reported_wave: 1,

        msgs_in: join.msgs_in,
        msgs_out: 0,
        bytes_in: join.bytes_in,
        bytes_out: 0,
        frames_lagged: 0,

        invalid_json: 0,

        last_input_full_log: now,
        last_frame_lag_log: now,
        last_invalid_input_log: now,

        close_frame: None,
    })
}

async fn send_close_with_reason(
    socket: &mut WebSocket,
    code: u16,
    reason: &'static str,
) -> Result<(), NetError> {
    socket
        .send(Message::Close(Some(CloseFrame {
            code,
            reason: reason.into(),
        })))
        .await
        .map_err(NetError::Ws)?;
    socket.close().await.map_err(NetError::Ws)
}

async fn read_join_handshake(socket: &mut WebSocket) -> Result<JoinHandshake, NetError> {
    loop {
        let Some(incoming) = socket.recv().await else {
            return Err(NetError::ClosedBeforeJoin);
        };

        let message = incoming.map_err(NetError::Ws)?;
        match message {
            Message::Text(text) => {
                let bytes_in = text.len() as u64;
                let payload = match serde_json::from_str::<ClientMessage>(&text) {
                    Ok(ClientMessage::Join(payload)) => payload,
                    Ok(_) => {
                        let _ = send_close_with_reason(socket, close_code::POLICY, "join required")
                            .await;
                        return Err(NetError::JoinRequired);
                    }
                    Err(_) => {
                        let _ = send_close_with_reason(
                            socket,
                            close_code::POLICY,
                            "invalid join payload",
                        )
                        .await;
                        return Err(NetError::JoinRequired);
                    }
                };

                return Ok(JoinHandshake {
                    player_name: payload.player_name.as_deref().and_then(sanitize_player_name),
                    bytes_in,
                    msgs_in: 1,
                });
            }
            Message::Binary(_) => {
                let _ = send_close_with_reason(
                    socket,
                    close_code::UNSUPPORTED,
                    "binary messages not supported",
                )
                .await;
                return Err(NetError::JoinRequired);
            }
            Message::Ping(_) | Message::Pong(_) => {}
            Message::Close(_) => return Err(NetError::ClosedBeforeJoin),
        }
    }
}

/// Trimmed and cut to the leaderboard's name length; blank names mean anonymous.
fn sanitize_player_name(raw: &str) -> Option<String> {
    let name: String = raw.trim().chars().take(MAX_PLAYER_NAME_CHARS).collect();
    let name = name.trim_end().to_string();
    if name.is_empty() { None } else { Some(name) }
}

fn should_log(last: &mut Instant) -> bool {
    if last.elapsed() >= LOG_THROTTLE {
        *last = Instant::now();
        true
    } else {
        false
    }
}

fn process_game_event(
    input_tx: &mpsc::Sender<GameEvent>,
    event: GameEvent,
    last_input_full_log: &mut Instant,
) -> Result<LoopControl, NetError> {
    match input_tx.try_send(event) {
        Ok(()) => Ok(LoopControl::Continue),
        Err(mpsc::error::TrySendError::Full(_evt)) => {
            if should_log(last_input_full_log) {
                warn!("input channel full; dropping input");
            }
            Ok(LoopControl::Continue)
        }
        Err(mpsc::error::TrySendError::Closed(_evt)) => Err(NetError::InputClosed),
    }
}

async fn run_client_loop(socket: &mut WebSocket, ctx: &mut ConnCtx) -> Result<(), NetError> {
    // Split borrows so `tokio::select!` can hold them concurrently.
    let ConnCtx {
        player_name,
        leaderboard,
        input_tx,
        frame_rx,
        state_rx,
        session_shutdown,
        leaderboard_tx,
        leaderboard_rx,
        reported_wave,
        msgs_in,
        msgs_out,
        bytes_in,
        bytes_out,
        frames_lagged,
        invalid_json,
        last_input_full_log,
        last_frame_lag_log,
        last_invalid_input_log,
        close_frame,
        ..
    } = ctx;

    let mut fatal: Option<NetError> = None;

    loop {
        // disconnect becomes true on error
        let disconnect: bool = tokio::select! {
            // Incoming Message from Client
            incoming = socket.recv() => {
                match handle_incoming_ws(
                    incoming,
                    input_tx,
                    msgs_in,
                    bytes_in,
                    invalid_json,
                    last_input_full_log,
                    last_invalid_input_log,
                    close_frame,
                ) {
                    Ok(LoopControl::Continue) => false,
                    Ok(LoopControl::Disconnect) => true,
                    Err(e) => {
                        fatal = Some(e);
                        true
                    }
                }
            }

            // Outgoing Frame
            frame = frame_rx.recv() => {
                match frame {
                    Ok(snapshot) => {
                        if let Some(name) = player_name.as_deref() {
                            report_wave_progress(leaderboard, name, &snapshot, reported_wave);
                        }
                        match forward_frame(snapshot, socket, msgs_out, bytes_out).await {
                            LoopControl::Continue => false,
                            LoopControl::Disconnect => true,
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        // Entity state is in every frame; tiles only arrive as events.
                        *frames_lagged += n;
                        if should_log(last_frame_lag_log) {
                            warn!(missed = n, "frames lagged; requesting tile resync");
                        }
                        match process_game_event(
                            input_tx,
                            GameEvent::Resync,
                            last_input_full_log,
                        ) {
                            Ok(LoopControl::Continue) => false,
                            Ok(LoopControl::Disconnect) => true,
                            Err(e) => {
                                fatal = Some(e);
                                true
                            }
                        }
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        fatal = Some(NetError::FramesClosed);
                        true
                    }
                }
            }

            // Outgoing Session State
            changed_state = state_rx.changed() => {
                match changed_state {
                    Ok(()) => {
                        let state = *state_rx.borrow_and_update();
                        if let Some(report) = game_over_report(state, player_name.as_deref()) {
                            spawn_score_submission(
                                leaderboard.clone(),
                                leaderboard_tx.clone(),
                                report,
                            );
                        }
                        let msg = ServerMessage::SessionState(state.into());
                        match forward_message(&msg, socket, msgs_out, bytes_out).await {
                            LoopControl::Continue => false,
                            LoopControl::Disconnect => true,
                        }
                    }
                    Err(_) => {
                        warn!("session state channel closed; disconnecting");
                        fatal = Some(NetError::SessionStateClosed);
                        true
                    }
                }
            }

            // Leaderboard results from background requests.
            Some(board) = leaderboard_rx.recv() => {
                let msg = ServerMessage::Leaderboard(board);
                match forward_message(&msg, socket, msgs_out, bytes_out).await {
                    LoopControl::Continue => false,
                    LoopControl::Disconnect => true,
                }
            }
        };

        if disconnect {
            if let Some(frame) = close_frame.take() {
                let _ = socket.send(Message::Close(Some(frame))).await;
            }
            if let Err(err) = socket.close().await.map_err(NetError::Ws) {
                debug!(error = ?err, "socket close error");
            }
            break;
        }
    }

    // The world task belongs to this connection only.
    session_shutdown.notify_one();

    debug!(
        msgs_in = *msgs_in,
        msgs_out = *msgs_out,
        bytes_in = *bytes_in,
        bytes_out = *bytes_out,
        invalid_json = *invalid_json,
        frames_lagged = *frames_lagged,
        "connection stats"
    );
    info!("client disconnected");

    if let Some(err) = fatal {
        Err(err)
    } else {
        Ok(())
    }
}

#[allow(clippy::too_many_arguments)]
fn handle_incoming_ws(
    incoming: Option<Result<Message, Error>>,
    input_tx: &mpsc::Sender<GameEvent>,
    msgs_in: &mut u64,
    bytes_in: &mut u64,
    invalid_json: &mut u32,
    last_input_full_log: &mut Instant,
    last_invalid_input_log: &mut Instant,
    close_frame: &mut Option<CloseFrame>,
) -> Result<LoopControl, NetError> {
    match incoming {
        Some(Ok(msg)) => match msg {
            Message::Text(text) => {
                *msgs_in += 1;
                *bytes_in += text.len() as u64;

                match serde_json::from_str::<ClientMessage>(&text) {
                    Ok(ClientMessage::Join(_)) => {
                        // Ignore repeated Join packets after bootstrap to keep the session stable.
                        if should_log(last_invalid_input_log) {
                            warn!("duplicate join ignored");
                        }
                        Ok(LoopControl::Continue)
                    }
                    Ok(msg) => match msg.into_game_event() {
                        Some(event) => process_game_event(input_tx, event, last_input_full_log),
                        None => Ok(LoopControl::Continue),
                    },
                    Err(parse_err) => {
                        *invalid_json += 1;
                        if should_log(last_invalid_input_log) {
                            warn!(
                                bytes = text.len(),
                                error = %parse_err,
                                "failed to parse client message"
                            );
                        }

                        if *invalid_json > MAX_INVALID_JSON {
                            *close_frame = Some(CloseFrame {
                                code: close_code::POLICY,
                                reason: "too many invalid messages".into(),
                            });
                            return Ok(LoopControl::Disconnect);
                        }

                        Ok(LoopControl::Continue)
                    }
                }
            }
            Message::Binary(_) => {
                *close_frame = Some(CloseFrame {
                    code: close_code::UNSUPPORTED,
                    reason: "binary messages not supported".into(),
                });
                Ok(LoopControl::Disconnect)
            }
            Message::Ping(_) | Message::Pong(_) => Ok(LoopControl::Continue),
            Message::Close(_) => Ok(LoopControl::Disconnect),
        },
        Some(Err(e)) => {
            warn!(error = %e, "websocket recv error");
            Ok(LoopControl::Disconnect)
        }
        None => {
            info!("websocket closed");
            Ok(LoopControl::Disconnect)
        }
    }
}

async fn forward_frame(
    snapshot: FrameSnapshot,
    socket: &mut WebSocket,
    msgs_out: &mut u64,
    bytes_out: &mut u64,
) -> LoopControl {
    let msg = ServerMessage::Frame(FrameDto::from(snapshot));
    forward_message(&msg, socket, msgs_out, bytes_out).await
}

async fn forward_message(
    msg: &ServerMessage,
    socket: &mut WebSocket,
    msgs_out: &mut u64,
    bytes_out: &mut u64,
) -> LoopControl {
    match send_message(socket, msg).await {
        Ok(bytes) => {
            *msgs_out += 1;
            *bytes_out += bytes as u64;
            LoopControl::Continue
        }
        Err(err) => {
            // Log unexpected send failures; disconnect will follow immediately.
            warn!(error = ?err, "failed to send message");
            LoopControl::Disconnect
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ScoreReport {
    name: String,
    score: u64,
    wave: u32,
}

// Only named sessions submit a finished game.
fn game_over_report(state: SessionState, player_name: Option<&str>) -> Option<ScoreReport> {
    match (state, player_name) {
        (SessionState::GameOver { score, wave }, Some(name)) => Some(ScoreReport {
            name: name.to_string(),
            score,
            wave,
        }),
        _ => None,
    }
}

// Each wave after the first is reported once; a restart rewinds the mark.
fn wave_to_report(reported_wave: &mut u32, wave: u32) -> Option<u32> {
    if wave < *reported_wave {
        *reported_wave = wave;
        return None;
    }
    if wave == *reported_wave {
        return None;
    }
    *reported_wave = wave;
    (wave > 1).then_some(wave)
}

// Reads the wave off the snapshot so dropped frames cannot skip an update.
fn report_wave_progress(
    leaderboard: &Arc<LeaderboardClient>,
    name: &str,
    frame: &FrameSnapshot,
    reported_wave: &mut u32,
) {
    let Some(wave) = wave_to_report(reported_wave, frame.wave) else {
        return;
    };

    let leaderboard = leaderboard.clone();
    let name = name.to_string();
    let score = frame.score;
    tokio::spawn(
        async move {
            if let Err(e) = leaderboard.update_score(&name, score, wave).await {
                log_leaderboard_failure(&e, "leaderboard update failed");
            }
        }
        .in_current_span(),
    );
}

fn spawn_leaderboard_fetch(
    leaderboard: Arc<LeaderboardClient>,
    results: mpsc::Sender<LeaderboardDto>,
) {
    tokio::spawn(
        async move {
            let entries = match leaderboard.fetch_top().await {
                Ok(entries) => entries,
                Err(e) => {
                    log_leaderboard_failure(&e, "leaderboard fetch failed");
                    Vec::new()
                }
            };
            let board = LeaderboardDto {
                entries: entries.iter().map(LeaderboardEntryDto::from).collect(),
                player_position: None,
            };
            // The connection may already be gone.
            let _ = results.send(board).await;
        }
        .in_current_span(),
    );
}

fn spawn_score_submission(
    leaderboard: Arc<LeaderboardClient>,
    results: mpsc::Sender<LeaderboardDto>,
    report: ScoreReport,
) {
    tokio::spawn(
        async move {
            let ScoreReport { name, score, wave } = report;
            match leaderboard.submit_score(&name, score, wave).await {
                Ok(outcome) => {
                    info!(score, wave, position = ?outcome.player_position, "score submitted");
                    let board = LeaderboardDto {
                        entries: outcome
                            .leaderboard
                            .iter()
                            .map(LeaderboardEntryDto::from)
                            .collect(),
                        player_position: outcome.player_position,
                    };
                    let _ = results.send(board).await;
                }
                Err(e) => log_leaderboard_failure(&e, "score submission failed"),
            }
        }
        .in_current_span(),
    );
}

fn log_leaderboard_failure(error: &LeaderboardClientError, message: &'static str) {
    match error {
        LeaderboardClientError::Rejected(reason) => warn!(%reason, "{message}"),
        LeaderboardClientError::UpstreamUnavailable => warn!("{message}: service unavailable"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_names_are_trimmed_and_capped() {
        assert_eq!(sanitize_player_name("  Ann  "), Some("Ann".to_string()));
        assert_eq!(
            sanitize_player_name("abcdefghijklmnopqrstuvwxyz"),
            Some("abcdefghijklmnopqrst".to_string())
        );
        assert_eq!(sanitize_player_name("   "), None);
    }

    #[test]
    fn throttled_logging_allows_one_per_window() {
        let mut last = Instant::now() - LOG_THROTTLE;
        assert!(should_log(&mut last));
        assert!(!should_log(&mut last));
    }

    #[tokio::test]
    async fn full_input_channel_drops_without_disconnecting() {
        let (tx, _rx) = mpsc::channel(1);
        let mut last = Instant::now() - LOG_THROTTLE;
        let event = GameEvent::Input(crate::domain::InputEvent::InteractButton);

        assert!(matches!(
            process_game_event(&tx, event.clone(), &mut last),
            Ok(LoopControl::Continue)
        ));
        assert!(matches!(
            process_game_event(&tx, event, &mut last),
            Ok(LoopControl::Continue)
        ));
    }

    #[test]
    fn only_named_sessions_report_a_finished_game() {
        let over = SessionState::GameOver { score: 12, wave: 3 };

        assert_eq!(
            game_over_report(over, Some("Ann")),
            Some(ScoreReport {
                name: "Ann".to_string(),
                score: 12,
                wave: 3
            })
        );
        assert_eq!(game_over_report(over, None), None);
        assert_eq!(game_over_report(SessionState::Running, Some("Ann")), None);
        assert_eq!(game_over_report(SessionState::Exploding, Some("Ann")), None);
    }

    #[test]
    fn every_wave_after_the_first_is_reported_once() {
        let mut reported = 1;

        assert_eq!(wave_to_report(&mut reported, 1), None);
        assert_eq!(wave_to_report(&mut reported, 2), Some(2));
        assert_eq!(wave_to_report(&mut reported, 2), None);
        // Frames for wave 3 were dropped; wave 4 still goes out.
        assert_eq!(wave_to_report(&mut reported, 4), Some(4));
    }

    #[test]
    fn restart_rewinds_the_reported_wave() {
        let mut reported = 1;
        assert_eq!(wave_to_report(&mut reported, 3), Some(3));

        assert_eq!(wave_to_report(&mut reported, 1), None);
        assert_eq!(wave_to_report(&mut reported, 2), Some(2));
    }

    fn unreachable_leaderboard() -> Arc<LeaderboardClient> {
        // Nothing listens on the discard port in the test environment.
        Arc::new(
            LeaderboardClient::new("http://127.0.0.1:9", Duration::from_millis(500))
                .expect("client builds"),
        )
    }

    #[tokio::test]
    async fn failed_fetch_still_delivers_an_empty_board() {
        let (tx, mut rx) = mpsc::channel(1);

        spawn_leaderboard_fetch(unreachable_leaderboard(), tx);

        let board = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("fetch finishes")
            .expect("board delivered");
        assert!(board.entries.is_empty());
        assert_eq!(board.player_position, None);
    }

    #[tokio::test]
    async fn failed_submission_is_swallowed_without_a_board() {
        let (tx, mut rx) = mpsc::channel(1);
        let report = ScoreReport {
            name: "Ann".to_string(),
            score: 5,
            wave: 2,
        };

        spawn_score_submission(unreachable_leaderboard(), tx, report);

        let received = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("submission finishes");
        assert!(received.is_none());
    }

    #[tokio::test]
    async fn closed_input_channel_is_fatal() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let mut last = Instant::now();
        let event = GameEvent::Input(crate::domain::InputEvent::JoystickReleased);

        assert!(matches!(
            process_game_event(&tx, event, &mut last),
            Err(NetError::InputClosed)
        ));
    }
}
