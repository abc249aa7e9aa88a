//! Wire Cube Demo
//!
//! Run with: `cargo run --bin wire-cube [camera_config.json]`
//!
//! A wireframe unit cube viewed through the smoothed free-look camera.
//! Every input event is translated into a discrete camera command; the
//! damping in the camera update turns those impulses into smooth motion.
//!
//! Controls:
//! - WASD: Move camera
//! - E/Q: Move up/down
//! - Mouse left-drag: Look around
//! - Scroll: Nudge along the up axis
//! - Tab: Toggle Free/Ortho projection
//! - R: Reset the up axis
//! - ESC or X: Exit

use std::path::Path;
use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowAttributes, WindowId};

use glam::Vec3;
use smoothcam_engine::camera::{CameraConfig, CameraMode, FreeCamera};
use smoothcam_engine::input::{CameraCommand, KeyBindings, KeyCode, MouseButton, ScrollDelta};

// ============================================================================
// GPU DATA STRUCTURES
// ============================================================================

/// Vertex for the cube edge list
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct LineVertex {
    position: [f32; 3],
}

/// Uniforms sent to the GPU
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Uniforms {
    mvp: [[f32; 4]; 4],
}

static_assertions::assert_eq_size!(Uniforms, [u8; 64]);

/// Unit cube centered at the origin as a line list: 8 corners, 12 edges.
fn cube_edges() -> (Vec<LineVertex>, Vec<u16>) {
    let corners = [
        [-0.5, -0.5, -0.5],
        [0.5, -0.5, -0.5],
        [0.5, 0.5, -0.5],
        [-0.5, 0.5, -0.5],
        [-0.5, -0.5, 0.5],
        [0.5, -0.5, 0.5],
        [0.5, 0.5, 0.5],
        [-0.5, 0.5, 0.5],
    ];
    let vertices = corners
        .into_iter()
        .map(|position| LineVertex { position })
        .collect();
    let indices = vec![
        0, 1, 1, 2, 2, 3, 3, 0, // back face
        4, 5, 5, 6, 6, 7, 7, 4, // front face
        0, 4, 1, 5, 2, 6, 3, 7, // connecting edges
    ];
    (vertices, indices)
}

// ============================================================================
// EVENT TRANSLATION
// ============================================================================

/// Translate a winit key code into the engine's generic key code.
fn map_key(key: winit::keyboard::KeyCode) -> KeyCode {
    match key {
        winit::keyboard::KeyCode::KeyW => KeyCode::W,
        winit::keyboard::KeyCode::KeyA => KeyCode::A,
        winit::keyboard::KeyCode::KeyS => KeyCode::S,
        winit::keyboard::KeyCode::KeyD => KeyCode::D,
        winit::keyboard::KeyCode::KeyQ => KeyCode::Q,
        winit::keyboard::KeyCode::KeyE => KeyCode::E,
        winit::keyboard::KeyCode::KeyR => KeyCode::R,
        winit::keyboard::KeyCode::KeyX => KeyCode::X,
        winit::keyboard::KeyCode::Tab => KeyCode::Tab,
        winit::keyboard::KeyCode::Escape => KeyCode::Escape,
        _ => KeyCode::Unknown,
    }
}

/// Translate a winit mouse button into the engine's generic button.
fn map_button(button: winit::event::MouseButton) -> MouseButton {
    match button {
        winit::event::MouseButton::Left => MouseButton::Left,
        winit::event::MouseButton::Middle => MouseButton::Middle,
        winit::event::MouseButton::Right => MouseButton::Right,
        winit::event::MouseButton::Back => MouseButton::Other(4),
        winit::event::MouseButton::Forward => MouseButton::Other(5),
        winit::event::MouseButton::Other(id) => MouseButton::Other(id),
    }
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

struct AppState {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    // Render pipeline
    line_pipeline: wgpu::RenderPipeline,

    // Buffers
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    index_count: u32,

    // Camera
    camera: FreeCamera,
    bindings: KeyBindings,

    // Input state
    last_cursor: (f32, f32),
}

impl AppState {
    async fn new(window: Arc<Window>, camera_config: &CameraConfig) -> Self {
        let size = window.inner_size();

        // Create wgpu instance
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        // Create surface
        let surface = instance.create_surface(window.clone()).unwrap();

        // Request adapter
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to find suitable GPU adapter");

        log::info!("using GPU: {}", adapter.get_info().name);

        // Request device
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor::default())
            .await
            .expect("Failed to create device");

        // Configure surface
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

        // Load shader
        let shader_source = include_str!("../../shaders/wire_cube.wgsl");
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Wire Cube Shader"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        // Create bind group layout
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Uniform Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        // Create pipeline layout
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        // Create line render pipeline
        let line_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Line Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<LineVertex>() as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &[wgpu::VertexAttribute {
                        offset: 0,
                        shader_location: 0,
                        format: wgpu::VertexFormat::Float32x3,
                    }],
                }],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        // Create vertex and index buffers
        let (vertices, indices) = cube_edges();
        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Vertex Buffer"),
            size: (vertices.len() * std::mem::size_of::<LineVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        queue.write_buffer(&vertex_buffer, 0, bytemuck::cast_slice(&vertices));

        let index_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Index Buffer"),
            size: (indices.len() * std::mem::size_of::<u16>()) as u64,
            usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        queue.write_buffer(&index_buffer, 0, bytemuck::cast_slice(&indices));

        // Create uniform buffer
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Uniform Buffer"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        // Create bind group
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Uniform Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        // Start a unit behind the origin, looking at the cube.
        let mut camera = FreeCamera::with_config(camera_config);
        camera.set_mode(CameraMode::Free);
        camera.set_position(Vec3::new(0.0, 0.0, -1.0));
        camera.set_look_at(Vec3::ZERO);
        camera.set_viewport(0, 0, config.width, config.height);

        Self {
            window,
            surface,
            device,
            queue,
            config,
            line_pipeline,
            vertex_buffer,
            index_buffer,
            uniform_buffer,
            bind_group,
            index_count: indices.len() as u32,
            camera,
            bindings: KeyBindings::default(),
            last_cursor: (0.0, 0.0),
        }
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
            self.camera.set_viewport(0, 0, new_size.width, new_size.height);
        }
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        // Consume the accumulated input impulses and refresh matrices.
        self.camera.update();

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let uniforms = Uniforms {
            mvp: self.camera.matrices().mvp().to_cols_array_2d(),
        };
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.1,
                            g: 0.1,
                            b: 0.1,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // Apply the camera's stored viewport rectangle to the pass.
            let vp = self.camera.viewport();
            render_pass.set_viewport(
                vp.x as f32,
                vp.y as f32,
                vp.width as f32,
                vp.height as f32,
                0.0,
                1.0,
            );

            render_pass.set_pipeline(&self.line_pipeline);
            render_pass.set_bind_group(0, &self.bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
            render_pass.draw_indexed(0..self.index_count, 0, 0..1);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, key: KeyCode, pressed: bool) {
        // Discrete impulses: each key-down (including OS auto-repeat)
        // queues one command; the camera's damping smooths them out.
        if !pressed {
            return;
        }
        let Some(command) = self.bindings.command_for(key) else {
            return;
        };
        match command {
            CameraCommand::Move(dir) => self.camera.apply_move(dir),
            CameraCommand::ToggleMode => {
                let next = match self.camera.mode() {
                    CameraMode::Free => CameraMode::Ortho,
                    CameraMode::Ortho => CameraMode::Free,
                };
                self.camera.set_mode(next);
                log::info!("camera mode: {next:?}");
            }
            CameraCommand::ResetOrientation => self.camera.reset(),
            CameraCommand::Exit => event_loop.exit(),
        }
    }

    fn handle_mouse_button(&mut self, button: winit::event::MouseButton, pressed: bool) {
        let (x, y) = self.last_cursor;
        self.camera
            .handle_mouse_button(map_button(button), pressed, x, y);
    }

    fn handle_mouse_move(&mut self, x: f64, y: f64) {
        self.last_cursor = (x as f32, y as f32);
        self.camera.handle_mouse_move(x as f32, y as f32);
    }

    fn handle_scroll(&mut self, delta: MouseScrollDelta) {
        let scroll = match delta {
            MouseScrollDelta::LineDelta(x, y) => ScrollDelta::from_lines(x, y),
            MouseScrollDelta::PixelDelta(pos) => ScrollDelta::from_pixels(pos.x, pos.y),
        };
        self.camera.handle_scroll(scroll.ticks());
    }
}

// ============================================================================
// APPLICATION HANDLER
// ============================================================================

struct App {
    state: Option<AppState>,
    camera_config: CameraConfig,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let window_attrs = WindowAttributes::default()
            .with_title("Wire Cube - WASD to move, left-drag to look")
            .with_inner_size(PhysicalSize::new(1024, 512));

        let window = Arc::new(event_loop.create_window(window_attrs).unwrap());
        self.state = Some(pollster::block_on(AppState::new(
            window,
            &self.camera_config,
        )));

        log::info!("ready; controls:");
        log::info!("  WASD - move, E/Q - up/down");
        log::info!("  left-drag - look, scroll - nudge up/down");
        log::info!("  Tab - toggle Free/Ortho, R - reset up axis");
        log::info!("  ESC or X - exit");
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(state) = &mut self.state else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                state.resize(new_size);
            }
            WindowEvent::KeyboardInput {
                event:
                    winit::event::KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                state.handle_key(event_loop, map_key(key), key_state == ElementState::Pressed);
            }
            WindowEvent::MouseInput {
                button,
                state: btn_state,
                ..
            } => {
                state.handle_mouse_button(button, btn_state == ElementState::Pressed);
            }
            WindowEvent::CursorMoved { position, .. } => {
                state.handle_mouse_move(position.x, position.y);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                state.handle_scroll(delta);
            }
            WindowEvent::RedrawRequested => {
                match state.render() {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                    Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                    Err(e) => log::warn!("render error: {e:?}"),
                }

                state.window.request_redraw();
            }
            _ => {}
        }
    }
}

// ============================================================================
// MAIN
// ============================================================================

fn main() {
    env_logger::init();

    let camera_config = match std::env::args().nth(1) {
        Some(path) => {
            let config =
                CameraConfig::load(Path::new(&path)).expect("failed to load camera config");
            log::info!("loaded camera config from {path}");
            config
        }
        None => CameraConfig::default(),
    };

    let event_loop = EventLoop::new().unwrap();
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App {
        state: None,
        camera_config,
    };
    event_loop.run_app(&mut app).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_edges_shape() {
        let (vertices, indices) = cube_edges();
        assert_eq!(vertices.len(), 8);
        // 12 edges, two indices each.
        assert_eq!(indices.len(), 24);
        assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));
    }

    #[test]
    fn test_key_translation() {
        assert_eq!(map_key(winit::keyboard::KeyCode::KeyW), KeyCode::W);
        assert_eq!(map_key(winit::keyboard::KeyCode::Escape), KeyCode::Escape);
        assert_eq!(map_key(winit::keyboard::KeyCode::F5), KeyCode::Unknown);
    }

    #[test]
    fn test_button_translation() {
        assert_eq!(map_button(winit::event::MouseButton::Left), MouseButton::Left);
        assert_eq!(
            map_button(winit::event::MouseButton::Other(7)),
            MouseButton::Other(7)
        );
    }

    #[test]
    fn test_wire_cube_shader_parses_and_validates() {
        let source = include_str!("../../shaders/wire_cube.wgsl");
        let module = naga::front::wgsl::parse_str(source).expect("WGSL parse failed");
        let mut validator = naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::default(),
        );
        validator.validate(&module).expect("WGSL validation failed");
    }
}
