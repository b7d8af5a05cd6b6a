//! Core application state and lifecycle.

use crate::config::AppConfig;
use kurbo::{Point, Size};
use peniko::Color;
use polydraw_core::{Editor, MouseButton, PointerEvent, Viewport};
use polydraw_render::{RenderContext, RenderResult, RendererError, SceneRenderer, VelloRenderer};
use std::ops::ControlFlow;
use std::sync::Arc;
use std::sync::mpsc::Receiver;
use vello::util::RenderSurface;
use vello::wgpu::PresentMode;
use vello::{AaConfig, RenderParams, RendererOptions};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::error::EventLoopError;
use winit::event::{ElementState, MouseScrollDelta, StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};

/// Pixel scroll distance that counts as one wheel notch.
const PIXELS_PER_LINE: f64 = 20.0;

/// GPU and window state, created once the event loop resumes.
struct AppState {
    window: Arc<Window>,
    surface: RenderSurface<'static>,
    vello_renderer: vello::Renderer,
    scene_renderer: VelloRenderer,
    /// Texture blitter for RGBA->surface format conversion.
    texture_blitter: vello::wgpu::util::TextureBlitter,
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    editor: Editor,
    viewport: Viewport,
    /// Last cursor position in world coordinates.
    last_cursor: Point,
    commands: Receiver<String>,
    state: Option<AppState>,
    render_cx: Option<vello::util::RenderContext>,
}

fn pointer_button(button: winit::event::MouseButton) -> Option<MouseButton> {
    match button {
        winit::event::MouseButton::Left => Some(MouseButton::Left),
        winit::event::MouseButton::Right => Some(MouseButton::Right),
        winit::event::MouseButton::Middle => Some(MouseButton::Middle),
        _ => None,
    }
}

fn scroll_notches(delta: MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => y as f64,
        MouseScrollDelta::PixelDelta(pos) => pos.y / PIXELS_PER_LINE,
    }
}

impl App {
    /// Create an application that applies commands arriving on `commands`.
    pub fn new(config: AppConfig, commands: Receiver<String>) -> Self {
        let mut editor = Editor::new().with_selection_color(config.selection_color);
        let viewport = Viewport::new(
            Size::new(config.width as f64, config.height as f64),
            1.0,
        );
        editor.set_spawn_point(
            config
                .fixed_spawn_point()
                .unwrap_or_else(|| viewport.center()),
        );

        Self {
            config,
            editor,
            viewport,
            last_cursor: Point::ZERO,
            commands,
            state: None,
            render_cx: None,
        }
    }

    /// Run the application until the window closes or `quit` arrives.
    pub async fn run(config: AppConfig, commands: Receiver<String>) -> Result<(), EventLoopError> {
        let event_loop = EventLoop::new()?;
        let mut app = App::new(config, commands);
        event_loop.run_app(&mut app)
    }

    /// Cursor world position for a physical-pixel position.
    fn world_point(&self, x: f64, y: f64) -> Point {
        self.viewport.screen_to_world(Point::new(x, y))
    }

    fn update_spawn_point(&mut self) {
        if self.config.fixed_spawn_point().is_none() {
            self.editor.set_spawn_point(self.viewport.center());
        }
    }

    /// Create the window, surface and Vello renderer.
    fn init(&mut self, event_loop: &ActiveEventLoop) -> RenderResult<AppState> {
        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .map_err(|e| RendererError::InitFailed(e.to_string()))?,
        );

        let size = window.inner_size();
        let (width, height) = if size.width == 0 || size.height == 0 {
            (self.config.width, self.config.height)
        } else {
            (size.width, size.height)
        };

        let render_cx = self
            .render_cx
            .get_or_insert_with(vello::util::RenderContext::new);
        let surface = pollster::block_on(render_cx.create_surface(
            window.clone(),
            width,
            height,
            PresentMode::AutoVsync,
        ))
        .map_err(|e| RendererError::Surface(e.to_string()))?;

        let device = &render_cx.devices[surface.dev_id].device;
        let vello_renderer = vello::Renderer::new(device, RendererOptions::default())
            .map_err(|e| RendererError::InitFailed(e.to_string()))?;
        let texture_blitter =
            vello::wgpu::util::TextureBlitter::new(device, surface.config.format);

        self.viewport = Viewport::new(
            Size::new(surface.config.width as f64, surface.config.height as f64),
            window.scale_factor(),
        );
        self.update_spawn_point();

        log::info!(
            "PolyDraw initialized - {}x{}",
            surface.config.width,
            surface.config.height
        );

        Ok(AppState {
            window,
            surface,
            vello_renderer,
            scene_renderer: VelloRenderer::new(),
            texture_blitter,
        })
    }

    /// Build the scene for the current editor state and present it.
    fn render_frame(&mut self) -> RenderResult<()> {
        let (Some(state), Some(render_cx)) = (self.state.as_mut(), self.render_cx.as_ref()) else {
            return Ok(());
        };

        let background: Color = self.config.background_color.into();
        let ctx = RenderContext::new(&self.editor, &self.viewport).with_background(background);
        state.scene_renderer.build_scene(&ctx);
        let base_color = state.scene_renderer.background_color(&ctx);
        let scene = state.scene_renderer.take_scene();

        let device_handle = &render_cx.devices[state.surface.dev_id];
        let device = &device_handle.device;
        let queue = &device_handle.queue;

        let surface_texture = state
            .surface
            .surface
            .get_current_texture()
            .map_err(|e| RendererError::Surface(e.to_string()))?;

        let width = state.surface.config.width;
        let height = state.surface.config.height;

        let params = RenderParams {
            base_color,
            width,
            height,
            antialiasing_method: AaConfig::Area,
        };

        // Vello needs a storage-bindable target, so render to Rgba8Unorm and
        // blit to the surface format afterwards.
        let render_texture = device.create_texture(&vello::wgpu::TextureDescriptor {
            label: Some("vello render texture"),
            size: vello::wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: vello::wgpu::TextureDimension::D2,
            format: vello::wgpu::TextureFormat::Rgba8Unorm,
            usage: vello::wgpu::TextureUsages::STORAGE_BINDING
                | vello::wgpu::TextureUsages::COPY_SRC
                | vello::wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let render_texture_view =
            render_texture.create_view(&vello::wgpu::TextureViewDescriptor::default());

        state
            .vello_renderer
            .render_to_texture(device, queue, &scene, &render_texture_view, &params)
            .map_err(|e| RendererError::RenderFailed(e.to_string()))?;

        let surface_view = surface_texture
            .texture
            .create_view(&vello::wgpu::TextureViewDescriptor::default());

        let mut encoder = device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
            label: Some("blit encoder"),
        });
        state
            .texture_blitter
            .copy(device, &mut encoder, &render_texture_view, &surface_view);
        queue.submit(std::iter::once(encoder.finish()));

        surface_texture.present();
        Ok(())
    }

    fn request_redraw(&self) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        log::info!("Creating window...");
        match self.init(event_loop) {
            Ok(state) => {
                state.window.request_redraw();
                self.state = Some(state);
            }
            Err(e) => {
                log::error!("{e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }

                self.viewport
                    .resize(size.width as f64, size.height as f64);
                self.update_spawn_point();

                if let (Some(state), Some(render_cx)) =
                    (self.state.as_mut(), self.render_cx.as_ref())
                {
                    render_cx.resize_surface(&mut state.surface, size.width, size.height);
                }
                self.request_redraw();
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.viewport.set_scale_factor(scale_factor);
                self.update_spawn_point();
            }

            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render_frame() {
                    log::warn!("{e}");
                }
                self.request_redraw();
            }

            WindowEvent::CursorMoved { position, .. } => {
                let position = self.world_point(position.x, position.y);
                self.last_cursor = position;
                self.editor
                    .handle_pointer_event(PointerEvent::Move { position });
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let Some(button) = pointer_button(button) else {
                    return;
                };
                // Button events carry no position.
                let position = self.last_cursor;
                let event = match state {
                    ElementState::Pressed => PointerEvent::Down { position, button },
                    ElementState::Released => PointerEvent::Up { position, button },
                };
                self.editor.handle_pointer_event(event);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                self.editor.handle_scale(scroll_notches(delta));
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && event.logical_key == Key::Named(NamedKey::Delete)
                {
                    self.editor.remove_selected();
                }
            }

            _ => {}
        }
    }

    fn new_events(&mut self, event_loop: &ActiveEventLoop, _cause: StartCause) {
        if let ControlFlow::Break(()) = self.editor.drain_commands(&self.commands) {
            event_loop.exit();
        }
    }
}
