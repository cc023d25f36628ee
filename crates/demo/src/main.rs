// File: crates/demo/src/main.rs
// Summary: Demo lays out three plots on one Skia surface, draws primitives on them and writes a PNG (plus optional CSV).

use anyhow::{bail, Context, Result};
use clap::Parser;
use plotter_core::{theme, Orientation, Pair, PlotConfig, PlotId, Plotter, PlotterOptions};
use plotter_render_skia::{raster_plotter, SkiaSurface};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "plotter-demo", version, about = "Render a multi-plot demo surface to PNG")]
struct Cli {
    /// Output PNG path.
    #[arg(short, long, default_value = "target/out/plotter_demo.png")]
    out: PathBuf,
    /// CSV file with `x` and `y` columns, drawn as points on the main plot.
    #[arg(short, long)]
    points: Option<PathBuf>,
    /// JSON file with settings for the main plot (camelCase keys, unknown keys ignored).
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Orientation of the main plot (a, b, c or d); overrides the config file.
    #[arg(long)]
    orientation: Option<Orientation>,
    /// Theme preset: classic, dark or high-contrast-dark.
    #[arg(long, default_value = "classic")]
    theme: String,
    /// Extra pixels around the fitted surface.
    #[arg(long, default_value_t = 0.0)]
    padding: f64,
    /// Outline each plot's cleared region.
    #[arg(long, default_value_t = false)]
    debug_borders: bool,
    /// Write every plotted point to this CSV file.
    #[arg(long)]
    export: Option<PathBuf>,
    /// Columns for --export, comma separated (plot, x, y). Defaults to all.
    #[arg(long, value_delimiter = ',')]
    fields: Vec<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct InputPoint {
    x: f64,
    y: f64,
}

/// A point drawn by the demo, in the plot's local coordinates.
#[derive(Debug, Clone, PartialEq)]
struct PlottedPoint {
    plot: String,
    x: f64,
    y: f64,
}

const EXPORT_FIELDS: [&str; 3] = ["plot", "x", "y"];

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut main_cfg = match &cli.config {
        Some(path) => load_config(path)?,
        None => PlotConfig::new().with_axes("x", "f(x)").with_draw_coords(false),
    };
    if let Some(o) = cli.orientation {
        main_cfg.orientation = Some(o);
    }

    let options = PlotterOptions {
        padding: Pair::new(cli.padding, cli.padding),
        debug_borders: cli.debug_borders,
        ..PlotterOptions::default()
    };
    let mut plotter = raster_plotter(options, theme::find(&cli.theme))?;
    let mut plotted = Vec::new();

    let main = plotter.register(&main_cfg, Some("main"));
    let right = right_of(&plotter, main);
    plotter.register(
        &PlotConfig::new()
            .with_offset(right, 0.0)
            .with_orientation(Orientation::C)
            .with_zero_bound_axis(false)
            .with_axes("mirrored x", "mirrored y"),
        Some("mirrored"),
    );
    let below = below(&plotter, main);
    plotter.register(
        &PlotConfig::new()
            .with_offset(0.0, below)
            .with_domain(0.0, 100.0)
            .with_range(0.0, 50.0)
            .with_pixel_per_unit(4.0, 4.0)
            .with_unit_per_tick(5.0, 5.0)
            .with_label_frequency(4, 2)
            .with_label_precision(0, 0)
            .with_axes("step", "value"),
        Some("wide"),
    );
    log::info!(
        "registered {} plots on a {}x{} surface",
        plotter.len(),
        plotter.surface().width(),
        plotter.surface().height()
    );

    // main: user points (or a sampled curve), a slope and a polygon
    plotter.select("main", false, true);
    let points = match &cli.points {
        Some(path) => load_points(path)?,
        None => (0..=20)
            .map(|i| {
                let x = -10.0 + i as f64;
                InputPoint { x, y: (x * 0.6).sin() * 6.0 }
            })
            .collect(),
    };
    for p in &points {
        let at = Pair::new(p.x, p.y);
        plotter.plot_point(at, 3.0, true);
        plotted.push(PlottedPoint { plot: "main".into(), x: p.x, y: p.y });
    }
    if let Some(line) = plotter.plot_slope(Pair::ZERO, 0.75) {
        println!("slope line from ({:.2}, {:.2}) to ({:.2}, {:.2})", line.a.x, line.a.y, line.b.x, line.b.y);
    }
    plotter.plot_poly(&[Pair::new(2.0, -8.0), Pair::new(8.0, -8.0), Pair::new(5.0, -3.0)], true);
    plotter.plot_text("main", Some(Pair::new(-9.0, 8.0)));

    // mirrored: a parabola and a range-sampled root, origin top-right
    plotter.select("mirrored", false, true);
    plotter.plot_function(|x| Some(x * x * 0.1 - 5.0), true, 0.25, None, None);
    plotter.plot_function(|y| (y > 0.0).then(|| y.sqrt() * 3.0), false, 0.25, None, None);
    for &x in &[-8.0, -4.0, 0.0, 4.0, 8.0] {
        let y = x * x * 0.1 - 5.0;
        plotter.plot_point(Pair::new(x, y), 4.0, false);
        plotted.push(PlottedPoint { plot: "mirrored".into(), x, y });
    }

    // wide: two overlaid waves as one polyline
    plotter.select("wide", false, true);
    let walk: Vec<Pair> = (0..=100)
        .map(|i| {
            let t = i as f64;
            Pair::new(t, 25.0 + (t * 0.15).sin() * 12.0 + (t * 0.05).cos() * 6.0)
        })
        .collect();
    plotter.plot_poly(&walk, false);
    plotted.extend(walk.iter().map(|p| PlottedPoint { plot: "wide".into(), x: p.x, y: p.y }));

    write_png(plotter.surface_mut(), &cli.out)?;
    println!("Wrote {}", cli.out.display());

    if let Some(path) = &cli.export {
        let fields: Vec<&str> = if cli.fields.is_empty() {
            EXPORT_FIELDS.to_vec()
        } else {
            cli.fields.iter().map(|s| s.trim()).collect()
        };
        let file = std::fs::File::create(path).with_context(|| format!("create {}", path.display()))?;
        write_points_csv(file, &plotted, &fields)?;
        println!("Exported {} points to {}", plotted.len(), path.display());
    }
    Ok(())
}

/// Raw x offset that places a plot to the right of `id` with room for its labels.
fn right_of(plotter: &Plotter<SkiaSurface>, id: PlotId) -> f64 {
    plotter
        .plot(id)
        .map(|p| p.raw_offset().x + p.plot_size().x + p.label_bleed().x + p.label_size().x + 40.0)
        .unwrap_or_default()
}

/// Raw y offset that places a plot below `id`, clear of its x labels.
fn below(plotter: &Plotter<SkiaSurface>, id: PlotId) -> f64 {
    plotter
        .plot(id)
        .map(|p| p.raw_offset().y + p.plot_size().y + p.label_size().y + 40.0)
        .unwrap_or_default()
}

fn load_config(path: &Path) -> Result<PlotConfig> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing plot config {}", path.display()))
}

/// Load `x,y` rows; rows that fail to parse are skipped with a warning.
fn load_points(path: &Path) -> Result<Vec<InputPoint>> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_points(rdr)
}

fn read_points<R: std::io::Read>(mut rdr: csv::Reader<R>) -> Result<Vec<InputPoint>> {
    let mut out = Vec::new();
    for (row, rec) in rdr.deserialize::<InputPoint>().enumerate() {
        match rec {
            Ok(p) if p.x.is_finite() && p.y.is_finite() => out.push(p),
            Ok(_) => log::warn!("row {}: non-finite value skipped", row + 1),
            Err(e) => log::warn!("row {}: {e}", row + 1),
        }
    }
    if out.is_empty() {
        bail!("no points loaded; expected columns named x and y");
    }
    Ok(out)
}

fn write_points_csv<W: std::io::Write>(out: W, points: &[PlottedPoint], fields: &[&str]) -> Result<()> {
    if let Some(bad) = fields.iter().find(|f| !EXPORT_FIELDS.contains(*f)) {
        bail!("unknown export field '{bad}' (expected one of {})", EXPORT_FIELDS.join(", "));
    }
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(fields)?;
    for p in points {
        let row = fields.iter().map(|f| match *f {
            "plot" => p.plot.clone(),
            "x" => p.x.to_string(),
            _ => p.y.to_string(),
        });
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_png(surface: &mut SkiaSurface, path: &Path) -> Result<()> {
    surface
        .save_png(path)
        .with_context(|| format!("rendering {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_rows_are_skipped() {
        let data = "x,y\n1,2\noops,3\n4,5\n";
        let rdr = csv::ReaderBuilder::new().from_reader(data.as_bytes());
        let pts = read_points(rdr).expect("two good rows");
        assert_eq!(pts.len(), 2);
        assert_eq!((pts[1].x, pts[1].y), (4.0, 5.0));
    }

    #[test]
    fn export_keeps_requested_columns_in_order() {
        let pts = vec![PlottedPoint { plot: "main".into(), x: 1.5, y: -2.0 }];
        let mut buf = Vec::new();
        write_points_csv(&mut buf, &pts, &["y", "plot"]).expect("write csv");
        assert_eq!(String::from_utf8(buf).expect("utf8"), "y,plot\n-2,main\n");
        assert!(write_points_csv(Vec::new(), &pts, &["z"]).is_err());
    }
}
