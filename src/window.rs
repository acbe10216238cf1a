//! Desktop window bridge: winit event loop plus softbuffer presentation.
//!
//! Owns the native window, a [`RasterPainter`] sized to the surface, and a
//! [`DispatchContext`]. Each frame: if the tree is dirty, recompute layout at
//! the surface size, repaint the whole tree, and present the pixel buffer.
//!
//! All coordinates are physical pixels; the toolkit does not scale for
//! high-DPI displays.

use std::cell::RefCell;
use std::num::NonZeroU32;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop, OwnedDisplayHandle};
use winit::window::{Window as NativeWindow, WindowAttributes, WindowId};

use crate::error::{Error, Result};
use crate::event::{DispatchContext, KeyEvent, Modifiers, MouseButton};
use crate::geometry::Point;
use crate::render::RasterPainter;
use crate::style::Color;
use crate::tree::Tree;

/// Interval between cursor blink ticks.
const TICK_INTERVAL: Duration = Duration::from_millis(500);

/// Scroll distance of one wheel line, in pixels.
const LINE_SCROLL: f32 = 16.0;

/// Configuration and entry point for a native window.
///
/// # Examples
///
/// ```ignore
/// Window::new("demo", 800, 600)
///     .with_background(Color::WHITE)
///     .run(tree)?;
/// ```
pub struct Window {
    title: String,
    width: u32,
    height: u32,
    background: Color,
}

impl Window {
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            background: Color::WHITE,
        }
    }

    /// Color the surface is cleared to before each paint.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Open the window and run the event loop until it closes.
    ///
    /// Blocks the calling thread. The tree is laid out against the surface
    /// size and repainted whenever its root is dirty.
    pub fn run(self, tree: Tree) -> Result<()> {
        let event_loop = EventLoop::new().map_err(|e| Error::EventLoop(e.to_string()))?;

        // Failures inside the handler cannot cross `run_app` directly; they
        // land in this cell and the loop exits.
        let failure: Rc<RefCell<Option<Error>>> = Rc::new(RefCell::new(None));
        let app = App {
            title: self.title,
            width: self.width,
            height: self.height,
            background: self.background,
            tree,
            dispatch: DispatchContext::new(),
            painter: RasterPainter::new(self.width.max(1), self.height.max(1)),
            surface: None,
            next_tick: Instant::now() + TICK_INTERVAL,
            failure: failure.clone(),
        };

        event_loop
            .run_app(app)
            .map_err(|e| Error::EventLoop(e.to_string()))?;
        let outcome = failure.borrow_mut().take();
        match outcome {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

/// The native window and its pixel surface, created once the event loop
/// allows surfaces.
struct SurfaceState {
    window: Arc<dyn NativeWindow>,
    surface: softbuffer::Surface<OwnedDisplayHandle, Arc<dyn NativeWindow>>,
    // Some backends borrow connection state from the context.
    _context: softbuffer::Context<OwnedDisplayHandle>,
}

struct App {
    title: String,
    width: u32,
    height: u32,
    background: Color,
    tree: Tree,
    dispatch: DispatchContext,
    painter: RasterPainter,
    surface: Option<SurfaceState>,
    next_tick: Instant,
    failure: Rc<RefCell<Option<Error>>>,
}

impl App {
    fn create_surface(&mut self, event_loop: &dyn ActiveEventLoop) -> Result<()> {
        let attributes = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_surface_size(PhysicalSize::new(self.width, self.height));
        let window: Arc<dyn NativeWindow> = Arc::from(
            event_loop
                .create_window(attributes)
                .map_err(|e| Error::WindowCreation(e.to_string()))?,
        );

        let context = softbuffer::Context::new(event_loop.owned_display_handle())
            .map_err(|e| Error::Surface(e.to_string()))?;
        let surface = softbuffer::Surface::new(&context, window.clone())
            .map_err(|e| Error::Surface(e.to_string()))?;

        let size = window.surface_size();
        self.painter.resize(size.width.max(1), size.height.max(1));
        window.request_redraw();
        self.surface = Some(SurfaceState {
            window,
            surface,
            _context: context,
        });
        Ok(())
    }

    fn redraw(&mut self) {
        let Some(state) = self.surface.as_mut() else {
            return;
        };
        let size = state.window.surface_size();
        if size.width == 0 || size.height == 0 {
            return;
        }
        self.tree
            .compute_layout(Some(size.width as f32), Some(size.height as f32));
        self.painter.clear(self.background);
        self.tree.render_tree(&mut self.painter);
        self.tree.clear_dirty_all();

        let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return;
        };
        if let Err(e) = state.surface.resize(w, h) {
            log::error!("surface resize failed: {e}");
            return;
        }
        match state.surface.buffer_mut() {
            Ok(mut buffer) => {
                buffer.copy_from_slice(self.painter.buffer());
                if let Err(e) = buffer.present() {
                    log::error!("present failed: {e}");
                }
            }
            Err(e) => log::error!("buffer acquisition failed: {e}"),
        }
    }
}

impl ApplicationHandler for App {
    fn can_create_surfaces(&mut self, event_loop: &dyn ActiveEventLoop) {
        if self.surface.is_some() {
            return;
        }
        if let Err(error) = self.create_surface(event_loop) {
            *self.failure.borrow_mut() = Some(error);
            event_loop.exit();
        }
    }

    fn destroy_surfaces(&mut self, _event_loop: &dyn ActiveEventLoop) {
        self.surface = None;
    }

    fn window_event(
        &mut self,
        event_loop: &dyn ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = self.surface.as_ref() else {
            return;
        };
        if window_id != state.window.id() {
            return;
        }
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::SurfaceResized(new_size) => {
                if new_size.width > 0 && new_size.height > 0 {
                    self.painter.resize(new_size.width, new_size.height);
                    if let Some(root) = self.tree.root() {
                        self.tree.mark_dirty(root);
                    }
                    state.window.request_redraw();
                }
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.dispatch
                    .set_modifiers(Modifiers::from(modifiers.state()));
            }
            WindowEvent::PointerMoved { position, .. } => {
                self.dispatch.dispatch_cursor_moved(
                    &mut self.tree,
                    Point::new(position.x as f32, position.y as f32),
                );
            }
            WindowEvent::PointerButton { state, button, .. } => {
                if let Some(button) = button.mouse_button() {
                    if let Ok(button) = MouseButton::try_from(button) {
                        self.dispatch.dispatch_mouse_button(
                            &mut self.tree,
                            button,
                            state == ElementState::Pressed,
                        );
                    }
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let (dx, dy) = match delta {
                    MouseScrollDelta::LineDelta(x, y) => (x * LINE_SCROLL, y * LINE_SCROLL),
                    MouseScrollDelta::PixelDelta(p) => (p.x as f32, p.y as f32),
                };
                self.dispatch.dispatch_scroll(&mut self.tree, dx, dy);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    let key = crate::event::Key::from(&event.logical_key);
                    self.dispatch.dispatch_key(&mut self.tree, KeyEvent::new(key));
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &dyn ActiveEventLoop) {
        let now = Instant::now();
        if now >= self.next_tick {
            self.next_tick = now + TICK_INTERVAL;
            self.tree.tick();
        }
        self.dispatch.prune(&self.tree);
        if let Some(state) = self.surface.as_ref() {
            if self.tree.root().is_some_and(|root| self.tree.is_dirty(root)) {
                state.window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_tick));
    }
}
