use crate::animation::{Animator, LatestFrame, ParticleView, RedrawSink};
use crate::backend::Session;
use crate::config::AppConfig;
use std::sync::Mutex;
use tauri::{AppHandle, Emitter, Manager, State};

pub const FRAME_EVENT: &str = "particles_frame";

pub struct AppState {
    session: Mutex<Session>,
    latest_frame: LatestFrame,
    config: AppConfig,
}

/// Forwards each animation frame to the webview and keeps a copy for
/// `get_particles`.
struct FrameEmitter {
    app_handle: AppHandle,
    latest_frame: LatestFrame,
}

impl RedrawSink for FrameEmitter {
    fn redraw(&mut self, frame: &[ParticleView]) {
        self.latest_frame.redraw(frame);
        if let Err(e) = self.app_handle.emit(FRAME_EVENT, frame) {
            log::trace!("Failed to emit particle frame: {}", e);
        }
    }
}

#[tauri::command]
pub fn update_measurements(
    state: State<'_, AppState>,
    a: String,
    b: String,
    c: String,
) -> Result<String, String> {
    let mut session = state
        .session
        .lock()
        .map_err(|_| "Failed to acquire lock on Session".to_string())?;
    session.command_handler().update_measurements(&a, &b, &c)
}

#[tauri::command]
pub fn update_measurement(
    state: State<'_, AppState>,
    field: String,
    value: String,
) -> Result<String, String> {
    let mut session = state
        .session
        .lock()
        .map_err(|_| "Failed to acquire lock on Session".to_string())?;
    session.command_handler().update_measurement(&field, &value)
}

#[tauri::command]
pub fn clear_fields(state: State<'_, AppState>) -> Result<String, String> {
    let mut session = state
        .session
        .lock()
        .map_err(|_| "Failed to acquire lock on Session".to_string())?;
    session.command_handler().reset()
}

#[tauri::command]
pub fn get_skin(state: State<'_, AppState>) -> Result<String, String> {
    let session = state
        .session
        .lock()
        .map_err(|_| "Failed to acquire lock on Session".to_string())?;
    session.skin_json()
}

#[tauri::command]
pub fn get_particles(state: State<'_, AppState>) -> Vec<ParticleView> {
    state.latest_frame.snapshot()
}

pub fn create_app_state(config: AppConfig) -> AppState {
    AppState {
        session: Mutex::new(Session::new(config.skin())),
        latest_frame: LatestFrame::new(),
        config,
    }
}

/// Sizes the animator to the main window and starts it on Tauri's runtime.
pub fn start_animation(app_handle: &AppHandle) -> Result<(), String> {
    let state = app_handle.state::<AppState>();

    let window_size = app_handle.get_webview_window("main").and_then(|window| {
        let scale = window.scale_factor().ok()?;
        let size = window.inner_size().ok()?.to_logical::<f64>(scale);
        Some((size.width, size.height))
    });
    let viewport = state.config.resolve_viewport(window_size);

    let settings = state.config.particle_settings().unwrap_or_else(|e| {
        log::error!("Error in particle settings, using skin defaults: {}", e);
        state.config.skin().particles
    });
    let animator = match state.config.seed {
        Some(seed) => Animator::seeded(settings, viewport, seed),
        None => Animator::from_entropy(settings, viewport),
    };
    log::info!(
        "Viewport: {}x{}, {} particles",
        viewport.width,
        viewport.height,
        animator.particles().len()
    );

    let sink = FrameEmitter {
        app_handle: app_handle.clone(),
        latest_frame: state.latest_frame.clone(),
    };
    let runtime = tauri::async_runtime::handle();

    let mut session = state
        .session
        .lock()
        .map_err(|_| "Failed to acquire lock on Session".to_string())?;
    session.start_animation(runtime.inner(), animator, sink);
    Ok(())
}

/// Drops the session's animation handle, which ends the loop.
pub fn end_session(app_handle: &AppHandle) {
    let state = app_handle.state::<AppState>();
    let task = match state.session.lock() {
        Ok(mut session) => session.end(),
        Err(_) => {
            log::error!("Failed to acquire lock on Session");
            None
        }
    };
    drop(task);
}
