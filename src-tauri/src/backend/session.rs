use super::backend::CommandHandler;
use crate::animation::{AnimationTask, Animator, RedrawSink};
use crate::config::Skin;
use serde_json::json;
use tokio::runtime::Handle;

/// Everything one open window owns: the form state and the animation handle.
pub struct Session {
    skin: Skin,
    command_handler: CommandHandler,
    animation: Option<AnimationTask>,
}

impl Session {
    pub fn new(skin: Skin) -> Session {
        let command_handler = CommandHandler::new(skin.domain_message);
        Session {
            skin,
            command_handler,
            animation: None,
        }
    }

    pub fn skin(&self) -> &Skin {
        &self.skin
    }

    pub fn command_handler(&mut self) -> &mut CommandHandler {
        &mut self.command_handler
    }

    /// Starts the background animation, replacing (and cancelling) any
    /// previous one.
    pub fn start_animation<S: RedrawSink>(
        &mut self,
        handle: &Handle,
        animator: Animator,
        sink: S,
    ) {
        if self.animation.is_some() {
            log::warn!("Animation already running, restarting it");
        }
        self.animation = Some(AnimationTask::spawn(handle, animator, sink));
    }

    pub fn is_animating(&self) -> bool {
        self.animation
            .as_ref()
            .map_or(false, |task| !task.is_finished())
    }

    /// Detaches the animation handle. Dropping it cancels the loop; awaiting
    /// `stop` on it also returns the final animator.
    pub fn end(&mut self) -> Option<AnimationTask> {
        let task = self.animation.take();
        if task.is_some() {
            log::info!("Session ended.");
        }
        task
    }

    pub fn skin_json(&self) -> Result<String, String> {
        let result = json!({
            "success": true,
            "name": self.skin.kind,
            "title": self.skin.title,
            "direction": self.skin.particles.direction,
            "particleCount": self.skin.particles.count,
        });
        Ok(result.to_string())
    }
}
