use std::sync::Arc;
use std::thread::{self, JoinHandle};

use anyhow::{Context, Result};
use tiny_skia::Pixmap;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use super::lifecycle::{WindowLink, WindowShared};
use crate::device::{BlitPipeline, Gpu, PresentResult};
use crate::geometry::Point;
use crate::input::{ClickEvent, ClickHandler, map_pointer_button};
use crate::render::RasterSurface;
use crate::scene::TaskList;
use crate::text::FontStore;

/// Window parameters fixed at init time. The window is not user-resizable,
/// so width/height stay authoritative for its whole lifetime.
#[derive(Debug, Clone)]
pub(crate) struct RuntimeConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

/// Everything tied to the live window. Exists only between a successful
/// bootstrap and close.
struct WindowEntry {
    window: Arc<Window>,
    gpu: Gpu,
    blit: BlitPipeline,
    pixmap: Pixmap,
    /// Last pointer position in logical coordinates.
    cursor: Point,
}

/// winit application driving the single canvas window.
struct CanvasApp {
    config: RuntimeConfig,
    tasks: Arc<TaskList>,
    shared: Arc<WindowShared>,
    on_click: Option<ClickHandler>,
    font: Option<FontStore>,
    entry: Option<WindowEntry>,
}

impl CanvasApp {
    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let gpu = pollster::block_on(Gpu::new(Arc::clone(&window)))
            .context("GPU bring-up failed")?;
        let blit = BlitPipeline::new(&gpu);

        let size = window.inner_size();
        let pixmap = Pixmap::new(size.width.max(1), size.height.max(1))
            .context("failed to allocate the frame pixmap")?;

        log::info!(
            "window '{}' up at {}x{} logical, scale factor {}",
            self.config.title,
            self.config.width,
            self.config.height,
            window.scale_factor()
        );

        Ok(WindowEntry {
            window,
            gpu,
            blit,
            pixmap,
            cursor: Point::zero(),
        })
    }

    /// Rasterizes the current scene and pushes it to the screen.
    fn paint(&mut self) -> PresentResult {
        let Some(entry) = self.entry.as_mut() else {
            return PresentResult::Skipped;
        };

        let size = entry.window.inner_size();
        if size.width == 0 || size.height == 0 {
            return PresentResult::Skipped;
        }
        if entry.pixmap.width() != size.width || entry.pixmap.height() != size.height {
            match Pixmap::new(size.width, size.height) {
                Some(pixmap) => entry.pixmap = pixmap,
                None => return PresentResult::Skipped,
            }
        }

        entry.pixmap.fill(tiny_skia::Color::TRANSPARENT);

        let scale = entry.window.scale_factor() as f32;
        let tasks = self.tasks.snapshot();
        {
            let mut surface =
                RasterSurface::new(entry.pixmap.as_mut(), scale, self.font.as_ref());
            for task in &tasks {
                task.render(&mut surface);
            }
        }
        log::trace!("painted {} tasks at {}x{}", tasks.len(), size.width, size.height);

        entry.window.pre_present_notify();
        entry
            .blit
            .present(&mut entry.gpu, entry.pixmap.data(), size.width, size.height)
    }

    fn shut_down(&mut self, event_loop: &ActiveEventLoop) {
        self.shared.gate.signal_closed();
        self.shared.mark_shutdown();
        // Drop the surface before the loop unwinds.
        self.entry = None;
        event_loop.exit();
    }
}

impl ApplicationHandler for CanvasApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        match self.create_window_entry(event_loop) {
            Ok(entry) => {
                self.shared.gate.signal_ready(WindowLink {
                    window: Arc::clone(&entry.window),
                });
                entry.window.request_redraw();
                self.entry = Some(entry);
            }
            Err(err) => {
                log::error!("window bootstrap failed: {err:#}");
                self.shared.gate.signal_failed(format!("{err:#}"));
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let ours = self
            .entry
            .as_ref()
            .is_some_and(|e| e.window.id() == window_id);
        if !ours {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("window close requested");
                self.shut_down(event_loop);
            }
            WindowEvent::RedrawRequested => {
                if self.shared.is_shutdown() {
                    self.shut_down(event_loop);
                    return;
                }
                match self.paint() {
                    PresentResult::Presented => self.shared.frames.bump(),
                    PresentResult::Skipped => {}
                    PresentResult::Fatal => {
                        log::error!("presentation failed, closing window");
                        self.shut_down(event_loop);
                    }
                }
            }
            // Delivered once at creation and when the compositor rescales;
            // the window itself is not user-resizable.
            WindowEvent::Resized(new_size) => {
                if let Some(entry) = self.entry.as_mut() {
                    entry.gpu.resize(new_size);
                    entry.window.request_redraw();
                }
            }
            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.entry.as_ref() {
                    entry.window.request_redraw();
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if let Some(entry) = self.entry.as_mut() {
                    let logical = position.to_logical::<f64>(entry.window.scale_factor());
                    entry.cursor = Point::new(logical.x, logical.y);
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => {
                let Some(entry) = self.entry.as_ref() else {
                    return;
                };
                if let Some(handler) = &self.on_click {
                    let event = ClickEvent::new(entry.cursor, map_pointer_button(button));
                    log::debug!(
                        "click at ({:.1}, {:.1}) with {:?}",
                        event.position.x,
                        event.position.y,
                        event.button
                    );
                    handler(event);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.shared.is_shutdown() {
            self.entry = None;
            event_loop.exit();
            return;
        }
        // Repaints only on request; the scene changes through explicit
        // render calls, not on a timer.
        event_loop.set_control_flow(ControlFlow::Wait);
    }
}

/// Runs the event loop on the current thread until the window closes.
fn run_ui(
    config: RuntimeConfig,
    tasks: Arc<TaskList>,
    shared: Arc<WindowShared>,
    on_click: Option<ClickHandler>,
) -> Result<()> {
    let mut builder = EventLoop::builder();

    // The loop runs on a worker thread; backends that support that need to
    // be told explicitly. Qualified calls because both traits name the
    // method `with_any_thread`.
    #[cfg(target_os = "linux")]
    {
        use winit::platform::wayland::EventLoopBuilderExtWayland;
        use winit::platform::x11::EventLoopBuilderExtX11;
        EventLoopBuilderExtWayland::with_any_thread(&mut builder, true);
        EventLoopBuilderExtX11::with_any_thread(&mut builder, true);
    }
    #[cfg(target_os = "windows")]
    {
        use winit::platform::windows::EventLoopBuilderExtWindows;
        EventLoopBuilderExtWindows::with_any_thread(&mut builder, true);
    }

    let event_loop = builder
        .build()
        .context("failed to create the event loop")?;

    let font = FontStore::from_system_fonts();
    if font.is_none() {
        log::warn!("no usable system font found, text will not be drawn");
    }

    let mut app = CanvasApp {
        config,
        tasks,
        shared,
        on_click,
        font,
        entry: None,
    };

    event_loop
        .run_app(&mut app)
        .context("event loop terminated with error")?;
    Ok(())
}

/// Spawns the UI thread. Progress and failures are reported through
/// `shared`; the handle only confirms the thread itself exists.
pub(crate) fn spawn_ui_thread(
    config: RuntimeConfig,
    tasks: Arc<TaskList>,
    shared: Arc<WindowShared>,
    on_click: Option<ClickHandler>,
) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new().name("easel-ui".into()).spawn(move || {
        shared.set_ui_thread(thread::current().id());

        if let Err(err) = run_ui(config, tasks, Arc::clone(&shared), on_click) {
            log::error!("UI thread exited with error: {err:#}");
            shared.gate.signal_failed(format!("{err:#}"));
        }

        // No caller may keep blocking on the gate once this thread is gone.
        shared.gate.signal_closed();
        shared.mark_shutdown();
        log::debug!("UI thread finished");
    })
}
