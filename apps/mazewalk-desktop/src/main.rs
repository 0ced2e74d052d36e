use anyhow::Result;
use clap::Parser;
use egui::Context as EguiContext;
use glam::Vec2;
use mazewalk_input::{InputState, MoveKey, PointerTracker};
use mazewalk_render::RenderView;
use mazewalk_render_wgpu::WgpuRenderer;
use mazewalk_scene::{Scene, maze};
use mazewalk_sim::{Frame, Simulation};
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

#[derive(Parser)]
#[command(name = "mazewalk-desktop", about = "Third-person maze walk demo")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Application state: the static scene, the simulation, and the
/// per-frame input collector. Event handlers only record input; the
/// simulation steps once per redraw from the drained snapshot.
struct AppState {
    scene: Scene,
    sim: Simulation,
    input: InputState,
    pointer: PointerTracker,
    orbiting: bool,
    show_inspector: bool,
    start: Instant,
    last_frame: Option<Frame>,
}

impl AppState {
    fn new(scene: Scene, sim: Simulation) -> Self {
        Self {
            scene,
            sim,
            input: InputState::new(),
            pointer: PointerTracker::new(),
            orbiting: false,
            show_inspector: true,
            start: Instant::now(),
            last_frame: None,
        }
    }

    fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        let mapped = match key {
            KeyCode::KeyW | KeyCode::ArrowUp => Some(MoveKey::Forward),
            KeyCode::KeyS | KeyCode::ArrowDown => Some(MoveKey::Back),
            KeyCode::KeyA | KeyCode::ArrowLeft => Some(MoveKey::Left),
            KeyCode::KeyD | KeyCode::ArrowRight => Some(MoveKey::Right),
            _ => None,
        };
        if let Some(mapped) = mapped {
            self.input.key(mapped, pressed);
            return;
        }

        if !pressed {
            return;
        }
        match key {
            KeyCode::Escape => self.input.request_exit(),
            KeyCode::F1 => self.show_inspector = !self.show_inspector,
            _ => {}
        }
    }

    /// Advance the simulation one frame and keep the output snapshot for
    /// the renderer and the inspector.
    fn update(&mut self) -> Frame {
        let snapshot = self.input.snapshot();
        let frame = self.sim.step(&self.scene, &snapshot, self.now());
        self.last_frame = Some(frame);
        frame
    }

    fn draw_ui(&mut self, ctx: &EguiContext) {
        if !self.show_inspector {
            return;
        }
        let Some(frame) = self.last_frame else {
            return;
        };
        let cam = self.sim.camera();

        egui::SidePanel::left("inspector")
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.heading("Mazewalk");
                ui.separator();
                ui.label(format!(
                    "Character: ({:.2}, {:.2}, {:.2})",
                    frame.position.x, frame.position.y, frame.position.z
                ));
                ui.label(format!("Facing: {:.1} deg", frame.facing_deg));
                ui.separator();
                ui.label(format!("Yaw: {:.1} deg", cam.yaw_deg));
                ui.label(format!("Pitch: {:.1} deg", cam.pitch_deg));
                ui.label(format!("Distance: {:.2}", cam.distance));
                ui.label(format!(
                    "Eye: ({:.2}, {:.2}, {:.2})",
                    frame.eye.x, frame.eye.y, frame.eye.z
                ));
                ui.separator();
                ui.label(format!(
                    "Scene: {} platforms / {} walls",
                    self.scene.platforms().len(),
                    self.scene.obstacles().len()
                ));
                ui.label(format!("Frame: {:.1} ms", frame.dt * 1000.0));
                ui.separator();
                ui.small("WASD: Move | RMB: Orbit | Scroll: Zoom");
                ui.small("F1: Toggle Inspector | Esc: Quit");
            });
    }
}

struct GpuApp {
    state: AppState,
    window: Option<Arc<Window>>,
    surface: Option<wgpu::Surface<'static>>,
    device: Option<wgpu::Device>,
    queue: Option<wgpu::Queue>,
    config: Option<wgpu::SurfaceConfiguration>,
    renderer: Option<WgpuRenderer>,
    egui_ctx: EguiContext,
    egui_winit: Option<egui_winit::State>,
    egui_renderer: Option<egui_wgpu::Renderer>,
}

impl GpuApp {
    fn new(state: AppState) -> Self {
        Self {
            state,
            window: None,
            surface: None,
            device: None,
            queue: None,
            config: None,
            renderer: None,
            egui_ctx: EguiContext::default(),
            egui_winit: None,
            egui_renderer: None,
        }
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Mazewalk")
            .with_inner_size(PhysicalSize::new(1280u32, 720));
        let window = Arc::new(event_loop.create_window(attrs).expect("create window"));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .expect("create surface");

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .expect("find adapter");

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("mazewalk_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .expect("create device");

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let renderer = WgpuRenderer::new(&device, surface_format, size.width, size.height);

        let egui_winit = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&device, surface_format, None, 1, false);

        self.window = Some(window);
        self.surface = Some(surface);
        self.device = Some(device);
        self.queue = Some(queue);
        self.config = Some(config);
        self.renderer = Some(renderer);
        self.egui_winit = Some(egui_winit);
        self.egui_renderer = Some(egui_renderer);

        // The clock starts when frames do, so the first delta is tiny
        // instead of covering the whole GPU setup.
        let now = self.state.now();
        self.state.sim.start_clock(now);

        tracing::info!(
            "GPU initialized with {} backend",
            adapter.get_info().backend.to_str()
        );
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(egui_winit) = &mut self.egui_winit {
            let response = egui_winit.on_window_event(self.window.as_ref().unwrap(), &event);
            if response.consumed {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let (Some(surface), Some(device), Some(config)) =
                    (&self.surface, &self.device, &mut self.config)
                {
                    config.width = new_size.width.max(1);
                    config.height = new_size.height.max(1);
                    surface.configure(device, config);
                    if let Some(renderer) = &mut self.renderer {
                        renderer.resize(device, config.width, config.height);
                    }
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                self.state
                    .handle_key(key, key_state == ElementState::Pressed);
            }
            WindowEvent::MouseInput {
                button: MouseButton::Right,
                state: btn_state,
                ..
            } => {
                self.state.orbiting = btn_state == ElementState::Pressed;
                if let Some(window) = &self.window {
                    window.set_cursor_visible(!self.state.orbiting);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                // Track every sample so re-grabs never produce a jump;
                // only feed the camera while orbiting.
                let delta = self
                    .state
                    .pointer
                    .sample(Vec2::new(position.x as f32, position.y as f32));
                if self.state.orbiting {
                    self.state.input.pointer_motion(delta);
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 40.0,
                };
                self.state.input.scroll(scroll);
            }
            WindowEvent::RedrawRequested => {
                let frame = self.state.update();
                if frame.exit {
                    event_loop.exit();
                    return;
                }

                let (Some(surface), Some(device), Some(queue)) =
                    (&self.surface, &self.device, &self.queue)
                else {
                    return;
                };

                let output = match surface.get_current_texture() {
                    Ok(t) => t,
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        if let Some(config) = &self.config {
                            surface.configure(device, config);
                        }
                        return;
                    }
                    Err(e) => {
                        tracing::error!("surface error: {e}");
                        return;
                    }
                };

                let view = output
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());

                if let Some(renderer) = &self.renderer {
                    renderer.render(
                        device,
                        queue,
                        &view,
                        &self.state.scene,
                        &frame,
                        &RenderView::from_frame(&frame),
                    );
                }

                let raw_input = self
                    .egui_winit
                    .as_mut()
                    .unwrap()
                    .take_egui_input(self.window.as_ref().unwrap());
                let full_output = self.egui_ctx.run(raw_input, |ctx| {
                    self.state.draw_ui(ctx);
                });

                self.egui_winit.as_mut().unwrap().handle_platform_output(
                    self.window.as_ref().unwrap(),
                    full_output.platform_output,
                );

                let paint_jobs = self
                    .egui_ctx
                    .tessellate(full_output.shapes, full_output.pixels_per_point);

                let screen_descriptor = egui_wgpu::ScreenDescriptor {
                    size_in_pixels: [
                        self.config.as_ref().unwrap().width,
                        self.config.as_ref().unwrap().height,
                    ],
                    pixels_per_point: full_output.pixels_per_point,
                };

                {
                    let egui_renderer = self.egui_renderer.as_mut().unwrap();
                    for (id, image_delta) in &full_output.textures_delta.set {
                        egui_renderer.update_texture(device, queue, *id, image_delta);
                    }
                    let mut encoder =
                        device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
                            label: Some("egui_encoder"),
                        });
                    egui_renderer.update_buffers(
                        device,
                        queue,
                        &mut encoder,
                        &paint_jobs,
                        &screen_descriptor,
                    );
                    {
                        let mut pass = encoder
                            .begin_render_pass(&wgpu::RenderPassDescriptor {
                                label: Some("egui_pass"),
                                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                                    view: &view,
                                    resolve_target: None,
                                    ops: wgpu::Operations {
                                        load: wgpu::LoadOp::Load,
                                        store: wgpu::StoreOp::Store,
                                    },
                                })],
                                depth_stencil_attachment: None,
                                ..Default::default()
                            })
                            .forget_lifetime();
                        egui_renderer.render(&mut pass, &paint_jobs, &screen_descriptor);
                    }
                    queue.submit(std::iter::once(encoder.finish()));
                    for id in &full_output.textures_delta.free {
                        egui_renderer.free_texture(id);
                    }
                }

                output.present();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("mazewalk-desktop starting");

    let scene = Scene::try_from(maze())?;
    let sim = Simulation::new(&scene)?;
    let state = AppState::new(scene, sim);

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(state);
    event_loop.run_app(&mut app)?;

    Ok(())
}
