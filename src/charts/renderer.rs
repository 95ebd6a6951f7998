//! Surface Renderer
//! Rasterizes a `SurfaceChart` into an in-memory image with plotters.
//!
//! Layout:
//! 1. Title centered at the top
//! 2. 3D axes: x = column (year position), y = value, z = grid row
//! 3. Surface polygons colored from min color to max color
//! 4. Axis names listed in the bottom-left corner

use crate::charts::SurfaceChart;
use crate::config::Theme;
use crate::error::ChartError;
use egui::Color32;
use image::RgbImage;
use plotters::prelude::*;

fn render_error<E: std::fmt::Display>(e: E) -> ChartError {
    ChartError::Render(e.to_string())
}

pub struct SurfaceRenderer;

impl SurfaceRenderer {
    /// Render the surface at `width` x `height` pixels.
    pub fn render(
        chart: &SurfaceChart,
        width: u32,
        height: u32,
        theme: Theme,
    ) -> Result<RgbImage, ChartError> {
        let grid = &chart.grid;
        let columns = grid.column_count();
        let rows = grid.row_count();
        if columns == 0 || rows == 0 {
            return Err(ChartError::EmptyDataset);
        }

        let background = Self::to_rgb(theme.background());
        let foreground = Self::to_rgb(theme.foreground());
        let (y_min, y_max) = Self::value_axis(grid.min_value, grid.max_value);
        let (yaw, pitch) = Self::camera_angles(chart.camera);

        let mut buffer = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            root.fill(&background).map_err(render_error)?;

            let mut cc = ChartBuilder::on(&root)
                .caption(
                    &chart.title,
                    ("sans-serif", 24).into_font().color(&foreground),
                )
                .margin(20)
                .build_cartesian_3d(
                    0.0..(columns.max(2) - 1) as f64,
                    y_min..y_max,
                    0.0..(rows.max(2) - 1) as f64,
                )
                .map_err(render_error)?;

            cc.with_projection(|mut pb| {
                pb.yaw = yaw;
                pb.pitch = pitch;
                pb.scale = 0.8;
                pb.into_matrix()
            });

            cc.configure_axes()
                .label_style(("sans-serif", 12).into_font().color(&foreground))
                .bold_grid_style(foreground.mix(0.2))
                .light_grid_style(foreground.mix(0.08))
                .max_light_lines(3)
                .draw()
                .map_err(render_error)?;

            let style = |v: &f64| -> ShapeStyle {
                Self::to_rgb(Self::color_at(chart, *v)).filled()
            };
            cc.draw_series(
                SurfaceSeries::xoz(
                    (0..columns).map(|c| c as f64),
                    (0..rows).map(|r| r as f64),
                    |x: f64, z: f64| grid.get(z as usize, x as usize).unwrap_or(y_min),
                )
                .style_func(&style),
            )
            .map_err(render_error)?;

            let label_font = ("sans-serif", 14).into_font().color(&foreground);
            let labels = [
                format!("x: {}", chart.x_label),
                format!("y: {}", chart.y_label),
                format!("z: {}", chart.z_label),
            ];
            for (i, text) in labels.iter().enumerate() {
                let y = height as i32 - 20 * (labels.len() - i) as i32;
                root.draw(&Text::new(text.as_str(), (20, y), label_font.clone()))
                    .map_err(render_error)?;
            }

            root.present().map_err(render_error)?;
        }

        RgbImage::from_raw(width, height, buffer)
            .ok_or_else(|| ChartError::Render("image buffer size mismatch".to_string()))
    }

    /// Linear blend from min color to max color by the value's position in range.
    pub fn color_at(chart: &SurfaceChart, value: f64) -> Color32 {
        let span = chart.grid.max_value - chart.grid.min_value;
        let t = if span > 0.0 {
            ((value - chart.grid.min_value) / span).clamp(0.0, 1.0)
        } else {
            0.5
        };
        let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Color32::from_rgb(
            lerp(chart.min_color.r(), chart.max_color.r()),
            lerp(chart.min_color.g(), chart.max_color.g()),
            lerp(chart.min_color.b(), chart.max_color.b()),
        )
    }

    /// Yaw and pitch looking at the origin from `camera`.
    pub fn camera_angles(camera: [f64; 3]) -> (f64, f64) {
        let [x, y, z] = camera;
        let yaw = x.atan2(z);
        let pitch = y.atan2((x * x + z * z).sqrt());
        (yaw, pitch)
    }

    /// Value axis range, widened when every value is equal.
    fn value_axis(min: f64, max: f64) -> (f64, f64) {
        if max > min {
            (min, max)
        } else {
            (min - 0.5, max + 0.5)
        }
    }

    fn to_rgb(color: Color32) -> RGBColor {
        RGBColor(color.r(), color.g(), color.b())
    }
}
