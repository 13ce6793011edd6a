//! Window and event-loop glue around the profile webview.

use std::rc::Rc;
use std::time::{Duration, Instant};

use profilekit_common::{Bounds, ProfileKitError, ViewId};
use profilekit_config::ProfileKitConfig;
use profilekit_webview::{ProfileWebView, WebViewConfig, WryEngine};
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{Window, WindowId};

use crate::observer::{HostCommand, HostObserver};

/// How often queued webview events are dispatched while idle.
const DISPATCH_INTERVAL: Duration = Duration::from_millis(16);

const MAIN_VIEW: ViewId = ViewId(1);

pub struct HostApp {
    config: ProfileKitConfig,
    url: String,
    /// Base64 image pushed to the page on request.
    profile_image: Option<String>,
    observer: Rc<HostObserver>,
    // Field order matters: the webview must drop before its parent window.
    view: Option<ProfileWebView<WryEngine>>,
    window: Option<Window>,
}

impl HostApp {
    pub fn new(config: ProfileKitConfig, url: String, profile_image: Option<String>) -> Self {
        Self {
            config,
            url,
            profile_image,
            observer: Rc::new(HostObserver::default()),
            view: None,
            window: None,
        }
    }

    fn open(&mut self, event_loop: &ActiveEventLoop) -> Result<(), ProfileKitError> {
        let attrs = Window::default_attributes()
            .with_title(self.config.window.title.clone())
            .with_inner_size(LogicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));
        let window = event_loop
            .create_window(attrs)
            .map_err(|e| ProfileKitError::Window(e.to_string()))?;

        let bounds = window_bounds(window.inner_size(), window.scale_factor());
        let mut view = ProfileWebView::initialize(
            MAIN_VIEW,
            bounds,
            &webview_config(&self.config),
            |setup| WryEngine::build_as_child(&window, setup),
        )?;

        view.set_navigation_delegate(&self.observer);
        view.set_action_delegate(&self.observer);
        view.set_message_delegate(&self.observer);
        view.load(&self.url);

        tracing::info!(view = %MAIN_VIEW, url = %self.url, "profile window opened");
        self.view = Some(view);
        self.window = Some(window);
        Ok(())
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        let (Some(window), Some(view)) = (&self.window, &mut self.view) else {
            return;
        };
        let bounds = window_bounds(size, window.scale_factor());
        if let Err(e) = view.set_bounds(bounds) {
            tracing::warn!(view = %MAIN_VIEW, error = %e, "failed to resize webview");
        }
    }

    /// Deliver queued page events, then run whatever the delegates asked for.
    fn pump(&mut self) {
        let Some(view) = self.view.as_mut() else {
            return;
        };
        view.dispatch_pending();

        for command in self.observer.take_commands() {
            match command {
                HostCommand::SendProfileImage => match &self.profile_image {
                    Some(image) => {
                        if let Err(e) = view.set_profile_image(image) {
                            tracing::warn!(view = %MAIN_VIEW, error = %e, "could not send profile image");
                        }
                    }
                    None => {
                        tracing::info!("no profile image configured (pass --profile-image)");
                    }
                },
            }
        }
    }

    fn shutdown(&mut self) {
        if let Some(view) = self.view.as_mut() {
            view.clear_delegates();
        }
        self.view = None;
        self.window = None;
        tracing::info!(
            submissions = self.observer.submissions().len(),
            "profile window closed"
        );
    }
}

impl ApplicationHandler for HostApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.open(event_loop) {
            tracing::error!(error = %e, "failed to open profile window");
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.shutdown();
                event_loop.exit();
            }
            WindowEvent::Resized(size) => self.resize(size),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.pump();
        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + DISPATCH_INTERVAL));
    }
}

/// The webview fills the whole client area.
fn window_bounds(size: PhysicalSize<u32>, scale_factor: f64) -> Bounds {
    let logical: LogicalSize<f64> = size.to_logical(scale_factor);
    Bounds::from_size(logical.width, logical.height)
}

fn webview_config(config: &ProfileKitConfig) -> WebViewConfig {
    WebViewConfig {
        inspectable: config.webview.inspectable,
        transparent: config.webview.transparent,
        user_agent: config.webview.user_agent.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_bounds_fill_client_area_in_logical_pixels() {
        let bounds = window_bounds(PhysicalSize::new(780, 1688), 2.0);
        assert_eq!(bounds, Bounds::from_size(390.0, 844.0));
    }

    #[test]
    fn webview_config_copies_settings() {
        let mut config = ProfileKitConfig::default();
        config.webview.inspectable = true;
        config.webview.user_agent = Some("ProfileKit/0.1".into());

        let wv = webview_config(&config);
        assert!(wv.inspectable);
        assert!(!wv.transparent);
        assert_eq!(wv.user_agent.as_deref(), Some("ProfileKit/0.1"));
    }

    #[test]
    fn pump_without_view_is_a_no_op() {
        let mut app = HostApp::new(ProfileKitConfig::default(), "about:blank".into(), None);
        app.pump();
        assert!(app.view.is_none());
    }
}
