// File: crates/window-demo/src/main.rs
// Summary: Interactive window: paints plots with Skia on the CPU, blits them through softbuffer and feeds mouse/touch input to the plotter.

use std::collections::HashMap;
use std::num::NonZeroU32;

use anyhow::{anyhow, Result};
use clap::Parser;
use plotter_core::{
    theme, transform, Orientation, Pair, PlotConfig, PlotId, Plotter, PlotterOptions, PointerEvent, TouchEvent, TouchPhase,
};
use plotter_render_skia::{raster_plotter, SkiaSurface};
use winit::{
    dpi::{LogicalSize, PhysicalPosition},
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

#[derive(Parser, Debug)]
#[command(name = "plotter-window-demo", version, about = "Interactive plots with pointer and touch routing")]
struct Cli {
    /// Theme preset: classic, dark or high-contrast-dark.
    #[arg(long, default_value = "dark")]
    theme: String,
    /// Outline each plot's cleared region.
    #[arg(long, default_value_t = false)]
    debug_borders: bool,
}

/// Redraw one plot and its decorations, leaving it selected and clipped.
fn repaint(plotter: &mut Plotter<SkiaSurface>, id: PlotId) {
    plotter.select(id, true, true);
    match plotter.plot(id).map(|p| p.orientation()) {
        Some(Orientation::C) => {
            plotter.plot_function(|x| Some((x * 0.5).sin() * 8.0), true, 0.1, None, None);
        }
        Some(_) => {
            plotter.plot_function(|x| Some(x * x * 0.1 - 5.0), true, 0.25, None, None);
            plotter.plot_slope(Pair::ZERO, -0.5);
        }
        None => return,
    }
    // Mark the last press and the cursor trail on the plot being handled.
    if let Some(mouse) = plotter.current_mouse().copied() {
        if mouse.down.x.is_finite() && mouse.down.y.is_finite() {
            plotter.plot_point(mouse.down, 4.0, mouse.is_down);
        }
        if mouse.is_down && mouse.moved.x.is_finite() && mouse.moved.y.is_finite() {
            plotter.plot_line(mouse.down, mouse.moved);
        }
    }
}

fn build_plotter(cli: &Cli) -> Result<Plotter<SkiaSurface>> {
    let options = PlotterOptions { padding: Pair::new(10.0, 10.0), debug_borders: cli.debug_borders, ..PlotterOptions::default() };
    let mut plotter = raster_plotter(options, theme::find(&cli.theme))?;
    let left = plotter.register(&PlotConfig::new().with_axes("x", "x² / 10 - 5").with_draw_coords(true), Some("left"));
    let right_x = plotter
        .plot(left)
        .map(|p| p.raw_offset().x + p.plot_size().x + p.label_bleed().x + p.label_size().x + 40.0)
        .unwrap_or_default();
    let right = plotter.register(
        &PlotConfig::new()
            .with_offset(right_x, 0.0)
            .with_orientation(Orientation::C)
            .with_zero_bound_axis(false)
            .with_axes("x", "sin(x / 2)")
            .with_draw_coords(true),
        Some("right"),
    );
    for id in [left, right] {
        repaint(&mut plotter, id);
    }
    Ok(plotter)
}

fn to_pair(p: PhysicalPosition<f64>) -> Pair {
    Pair::new(p.x, p.y)
}

/// Copy the plot surface into a 0RGB frame, clipped to the smaller of the two.
fn blit(rgba: &[u8], src_w: u32, src_h: u32, stride: usize, frame: &mut [u32], dst_w: u32, dst_h: u32) {
    let (w, h) = (src_w.min(dst_w) as usize, src_h.min(dst_h) as usize);
    frame.fill(0);
    for y in 0..h {
        let row = &rgba[y * stride..y * stride + w * 4];
        let out = &mut frame[y * dst_w as usize..y * dst_w as usize + w];
        for (px, dst) in row.chunks_exact(4).zip(out.iter_mut()) {
            *dst = ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32;
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut plotter = build_plotter(&cli)?;
    let (surface_w, surface_h) = (plotter.surface().width(), plotter.surface().height());

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Plotter - Window Demo")
        .with_inner_size(LogicalSize::new(surface_w as f64, surface_h as f64))
        .build(&event_loop)?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let mut cursor = Pair::ZERO;
    let mut left_held = false;
    let mut touches: HashMap<u64, Pair> = HashMap::new();

    log::info!("window demo: {} plots on a {surface_w}x{surface_h} surface", plotter.len());

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => {
                let hit = match event {
                    WindowEvent::CloseRequested => {
                        *cf = ControlFlow::Exit;
                        None
                    }
                    WindowEvent::Resized(_) => {
                        window.request_redraw();
                        None
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        cursor = to_pair(position);
                        plotter.handle_pointer(PointerEvent::moved(cursor).with_buttons(true, left_held))
                    }
                    WindowEvent::MouseInput { state, button, .. } => {
                        let primary = button == MouseButton::Left;
                        if primary {
                            left_held = state == ElementState::Pressed;
                        }
                        let ev = match state {
                            ElementState::Pressed => PointerEvent::down(cursor),
                            ElementState::Released => PointerEvent::up(cursor),
                        };
                        plotter.handle_pointer(ev.with_buttons(primary, left_held))
                    }
                    WindowEvent::Touch(touch) => {
                        let at = to_pair(touch.location);
                        let phase = match touch.phase {
                            winit::event::TouchPhase::Started => TouchPhase::Start,
                            winit::event::TouchPhase::Moved => TouchPhase::Move,
                            winit::event::TouchPhase::Ended => TouchPhase::End,
                            winit::event::TouchPhase::Cancelled => TouchPhase::Cancel,
                        };
                        match phase {
                            TouchPhase::Start | TouchPhase::Move => {
                                touches.insert(touch.id, at);
                            }
                            TouchPhase::End | TouchPhase::Cancel => {
                                touches.remove(&touch.id);
                            }
                        }
                        let ev = TouchEvent::new(phase, vec![at], touches.values().copied().collect());
                        if ev.is_single_drag() {
                            log::trace!("single-touch drag at ({:.0}, {:.0})", at.x, at.y);
                        }
                        plotter.handle_touch(&ev);
                        transform::find_plot_at(at, Pair::ZERO, plotter.plots()).and_then(|i| plotter.resolve(i))
                    }
                    _ => None,
                };
                if let Some(id) = hit {
                    repaint(&mut plotter, id);
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                let size = window.inner_size();
                let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
                    return;
                };
                if let Err(e) = surface.resize(w, h) {
                    log::warn!("softbuffer resize failed: {e}");
                    return;
                }
                let (rgba, src_w, src_h, stride) = match plotter.surface_mut().rgba8() {
                    Ok(px) => px,
                    Err(e) => {
                        log::warn!("reading plot pixels failed: {e:#}");
                        return;
                    }
                };
                let mut frame = match surface.buffer_mut() {
                    Ok(frame) => frame,
                    Err(e) => {
                        log::warn!("softbuffer buffer unavailable: {e}");
                        return;
                    }
                };
                blit(&rgba, src_w, src_h, stride, &mut frame, size.width, size.height);
                if let Err(e) = frame.present() {
                    log::warn!("present failed: {e}");
                }
            }
            _ => {}
        }
    });
}
